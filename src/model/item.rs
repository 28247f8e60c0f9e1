// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an item. Only ever compared, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing ids. Never rewinds, so an id is not
/// reused after its item is deleted or the list is cleared.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Makes sure ids minted later are above `id`. Returns false when no
    /// id above it exists, in which case the generator is left alone.
    pub fn observe(&mut self, id: ItemId) -> bool {
        if id.0 < self.next {
            return true;
        }
        match id.0.checked_add(1) {
            Some(next) => {
                self.next = next;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// New unpacked item. A zero quantity is bumped to 1.
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity: quantity.max(1),
            packed: false,
        }
    }

    pub fn packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }
}

/// An item as written in the config file, before it gets an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub packed: bool,
}

fn default_quantity() -> u32 {
    1
}

impl SeedItem {
    pub fn new(description: &str, quantity: u32, packed: bool) -> Self {
        Self {
            description: description.to_string(),
            quantity,
            packed,
        }
    }

    /// The list a fresh session starts with.
    pub fn examples() -> Vec<SeedItem> {
        vec![
            SeedItem::new("Passports", 2, false),
            SeedItem::new("Socks", 12, true),
            SeedItem::new("Charger", 1, false),
        ]
    }

    pub fn into_item(self, id: ItemId) -> Item {
        Item::new(id, self.description, self.quantity).packed(self.packed)
    }
}
