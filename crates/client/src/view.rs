//! Pure presentation: controller state in, styled strings out.
//!
//! No function here touches the network or mutates state. Styling uses
//! `console`, which degrades to plain text when stdout is not a terminal.

use console::{style, Style};

use pantry_core::item::Item;

use crate::controller::ItemsController;

/// Marker appended to rows with an in-flight operation.
const PENDING_MARKER: &str = " ...";

/// Render the whole screen: error banner, list, stats footer.
pub fn render_app(controller: &ItemsController) -> String {
    let mut sections = Vec::new();

    if let Some(message) = &controller.error_message {
        sections.push(render_error(message));
    }

    sections.push(render_list(controller));
    sections.push(render_stats(controller));

    sections.join("\n\n")
}

/// Error banner.
pub fn render_error(message: &str) -> String {
    style(format!("! {message}")).red().bold().to_string()
}

/// The item list: loading, empty, or populated.
pub fn render_list(controller: &ItemsController) -> String {
    if controller.is_loading {
        return style("Loading your list...").dim().to_string();
    }

    if controller.items.is_empty() {
        return style("Nothing here yet. Add the first product.")
            .dim()
            .to_string();
    }

    controller
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| render_row(i + 1, item, controller.is_pending(item.id)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One list row: index, checkbox, name.
///
/// Bought items render with strikethrough; rows with an in-flight
/// operation are dimmed and suffixed with [`PENDING_MARKER`], signalling
/// that their controls are disabled.
fn render_row(index: usize, item: &Item, pending: bool) -> String {
    let checkbox = if item.bought { "[x]" } else { "[ ]" };

    let mut name_style = Style::new();
    if item.bought {
        name_style = name_style.strikethrough().dim();
    }
    if pending {
        name_style = name_style.dim();
    }

    let marker = if pending { PENDING_MARKER } else { "" };

    format!(
        "{index:>3} {checkbox} {}{marker}",
        name_style.apply_to(&item.name)
    )
}

/// Stats footer.
pub fn render_stats(controller: &ItemsController) -> String {
    format!(
        "{} of {} purchased",
        controller.purchased_count(),
        controller.items.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ItemsApi;

    fn controller_with(items: Vec<Item>) -> ItemsController {
        // The API client is never called by the view layer.
        let mut controller = ItemsController::new(ItemsApi::new("http://localhost:0"));
        controller.items = items;
        controller.is_loading = false;
        controller
    }

    fn item(name: &str, bought: bool) -> Item {
        Item {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            bought,
        }
    }

    #[test]
    fn loading_state_renders_placeholder() {
        let mut controller = controller_with(vec![]);
        controller.is_loading = true;
        assert!(render_list(&controller).contains("Loading"));
    }

    #[test]
    fn empty_list_renders_hint() {
        let controller = controller_with(vec![]);
        assert!(render_list(&controller).contains("Nothing here yet"));
    }

    #[test]
    fn rows_are_numbered_with_checkboxes() {
        let controller = controller_with(vec![item("Milk", false), item("Eggs", true)]);
        let rendered = render_list(&controller);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1 [ ]"));
        assert!(lines[0].contains("Milk"));
        assert!(lines[1].contains("2 [x]"));
        assert!(lines[1].contains("Eggs"));
    }

    #[test]
    fn pending_rows_carry_the_marker() {
        let pending_item = item("Flour", false);
        let rendered = render_row(1, &pending_item, true);
        assert!(rendered.ends_with(PENDING_MARKER));

        let settled = render_row(1, &pending_item, false);
        assert!(!settled.ends_with(PENDING_MARKER));
    }

    #[test]
    fn stats_count_purchased_items() {
        let controller = controller_with(vec![
            item("Milk", true),
            item("Eggs", true),
            item("Flour", false),
        ]);
        assert_eq!(render_stats(&controller), "2 of 3 purchased");
    }

    #[test]
    fn error_banner_contains_the_message() {
        assert!(render_error("Server error").contains("Server error"));
    }
}
