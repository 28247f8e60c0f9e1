// File: ./src/store.rs
// The authoritative in-memory packing list
use crate::model::{IdGenerator, Item, ItemId, SeedItem, SortBy};
use crate::stats::Stats;
use tracing::{debug, warn};

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear the list?";

/// Answers a yes/no question before a destructive operation.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemListStore {
    items: Vec<Item>,
    ids: IdGenerator,
}

impl ItemListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store whose first items come from `seed`, in order.
    pub fn with_seed(seed: impl IntoIterator<Item = SeedItem>) -> Self {
        let mut store = Self::new();
        for s in seed {
            let id = store.next_id();
            store.items.push(s.into_item(id));
        }
        store
    }

    /// Fresh id for an item about to be added.
    pub fn next_id(&mut self) -> ItemId {
        self.ids.next_id()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Appends `item`. An id that is already present is ignored so ids
    /// stay unique.
    pub fn add(&mut self, item: Item) {
        if self.get(item.id).is_some() {
            warn!(id = %item.id, "ignoring add with an id already in the list");
            return;
        }
        if !self.ids.observe(item.id) {
            warn!(id = %item.id, "ignoring add with an id at the end of the id range");
            return;
        }
        debug!(id = %item.id, description = %item.description, quantity = item.quantity, "add");
        self.items.push(item);
    }

    pub fn delete(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() != before {
            debug!(%id, "delete");
        }
    }

    pub fn toggle(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.packed = !item.packed;
            debug!(%id, packed = item.packed, "toggle");
        }
    }

    /// Unconditional clear. Callers are expected to have asked first;
    /// see [`ItemListStore::clear_confirmed`].
    pub fn clear(&mut self) {
        debug!(removed = self.items.len(), "clear");
        self.items.clear();
    }

    /// Asks `confirm` and clears only on a yes. Returns whether the list
    /// was cleared.
    pub fn clear_confirmed<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> bool {
        if confirm.confirm(CLEAR_PROMPT) {
            self.clear();
            true
        } else {
            debug!("clear declined");
            false
        }
    }

    /// Items in display order for `sort_by`. The store itself is untouched.
    pub fn sorted_view(&self, sort_by: SortBy) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        if sort_by != SortBy::Input {
            // sort_by is stable, ties keep insertion order
            view.sort_by(|a, b| sort_by.compare(a, b));
        }
        view
    }

    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }
}
