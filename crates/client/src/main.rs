//! Interactive terminal client for the Pantry API.
//!
//! A thin REPL over [`ItemsController`]: it parses commands, calls the
//! controller, and re-renders. All list state, pending tracking, and error
//! handling live in the controller.

use std::io::{self, BufRead, Write};

use pantry_client::api::ItemsApi;
use pantry_client::controller::ItemsController;
use pantry_client::view;

const HELP: &str = "\
Commands:
  add <name>    add a product to the list
  toggle <n>    mark row n (un)bought
  rm <n>        delete row n
  list          refresh from the server
  help          show this help
  quit          exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let base_url =
        std::env::var("PANTRY_API_URL").unwrap_or_else(|_| "http://localhost:3001".into());

    let mut controller = ItemsController::new(ItemsApi::new(base_url));
    controller.load().await;

    println!("{}\n", view::render_app(&controller));
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "list" => controller.load().await,
            "add" => {
                controller.new_item_name = rest.to_string();
                controller.add_item().await;
            }
            "toggle" | "rm" => match resolve_row(&controller, rest) {
                Some(id) => {
                    if command == "toggle" {
                        controller.toggle_item(id).await;
                    } else {
                        controller.remove_item(id).await;
                    }
                }
                None => {
                    println!("No such row: {rest}");
                    continue;
                }
            },
            other => {
                println!("Unknown command: {other} (try `help`)");
                continue;
            }
        }

        println!("{}", view::render_app(&controller));
    }

    Ok(())
}

/// Resolve a 1-based row number to an item id.
fn resolve_row(
    controller: &ItemsController,
    raw: &str,
) -> Option<pantry_core::types::ItemId> {
    let index: usize = raw.parse().ok()?;
    controller.items.get(index.checked_sub(1)?).map(|item| item.id)
}
