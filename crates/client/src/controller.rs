//! Client-side state controller.
//!
//! Owns the in-memory item list and issues pessimistic updates: the list
//! reflects server state only after confirmation. Items with an in-flight
//! operation are tracked in a pending set keyed by id, consulted by the
//! view layer to disable their controls. Operations on different items
//! track independently. Errors surface as the message string only.

use std::collections::HashSet;

use pantry_core::item::{Item, ITEM_NAME_MIN_LEN};
use pantry_core::types::ItemId;

use crate::api::{ApiError, ItemsApi};

pub struct ItemsController {
    api: ItemsApi,
    /// Current list, newest first (server ordering).
    pub items: Vec<Item>,
    /// Draft text for the add-item form.
    pub new_item_name: String,
    /// Last operation failure, human-readable.
    pub error_message: Option<String>,
    /// True until the initial load resolves.
    pub is_loading: bool,
    /// True while a create round trip is in flight.
    pub is_creating: bool,
    pending: HashSet<ItemId>,
}

impl ItemsController {
    pub fn new(api: ItemsApi) -> Self {
        Self {
            api,
            items: Vec::new(),
            new_item_name: String::new(),
            error_message: None,
            is_loading: true,
            is_creating: false,
            pending: HashSet::new(),
        }
    }

    /// Initial load: replaces the whole list on success.
    ///
    /// Dropping the returned future cancels the underlying request, so a
    /// torn-down controller never applies a stale result.
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.api.list().await {
            Ok(items) => self.items = items,
            Err(err) => self.error_message = Some(err.user_message()),
        }

        self.is_loading = false;
    }

    /// Create an item from the current draft and prepend it to the list.
    ///
    /// No-op with an inline error when the trimmed draft is empty. The
    /// server remains the validation authority; [`Self::can_submit`] is
    /// only a UX guard.
    pub async fn add_item(&mut self) {
        let trimmed = self.new_item_name.trim().to_string();
        if trimmed.is_empty() {
            self.error_message = Some("Enter a product name".to_string());
            return;
        }

        self.is_creating = true;
        self.error_message = None;

        match self.api.create(&trimmed).await {
            Ok(item) => {
                self.items.insert(0, item);
                self.new_item_name.clear();
            }
            Err(err) => self.error_message = Some(err.user_message()),
        }

        self.is_creating = false;
    }

    /// Flip an item's `bought` flag, replacing it in place on confirmation
    /// so list order is preserved.
    pub async fn toggle_item(&mut self, id: ItemId) {
        let Some(item) = self.items.iter().find(|item| item.id == id).cloned() else {
            return;
        };

        self.pending.insert(id);
        self.error_message = None;

        match self.api.update(item.id, !item.bought).await {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(err) => self.error_message = Some(err.user_message()),
        }

        self.pending.remove(&id);
    }

    /// Delete an item, filtering it out of the list on confirmation.
    pub async fn remove_item(&mut self, id: ItemId) {
        self.pending.insert(id);
        self.error_message = None;

        match self.api.delete(id).await {
            Ok(()) => self.items.retain(|item| item.id != id),
            Err(err) => self.error_message = Some(err.user_message()),
        }

        self.pending.remove(&id);
    }

    /// Whether an operation is in flight for the given item.
    pub fn is_pending(&self, id: ItemId) -> bool {
        self.pending.contains(&id)
    }

    /// Count of items already bought.
    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.bought).count()
    }

    /// Whether the draft can be submitted.
    pub fn can_submit(&self) -> bool {
        self.new_item_name.trim().chars().count() >= ITEM_NAME_MIN_LEN && !self.is_creating
    }
}
