// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod sort;

pub use item::{IdGenerator, Item, ItemId, SeedItem};
pub use sort::SortBy;
