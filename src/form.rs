// File: ./src/form.rs
// The "add item" form: description buffer, quantity selector and validation
use crate::model::Item;
use crate::store::ItemListStore;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_MAX_QUANTITY: u32 = 20;
pub const DEFAULT_BOUNCE: Duration = Duration::from_millis(1000);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Description cannot be empty")]
    EmptyDescription,
}

#[derive(Debug, Clone)]
pub struct ItemForm {
    pub description: String,
    pub cursor_position: usize,
    pub quantity: u32,
    pub error: Option<String>,
    max_quantity: u32,
    bounce: Duration,
    bounce_until: Option<Instant>,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUANTITY, DEFAULT_BOUNCE)
    }
}

impl ItemForm {
    pub fn new(max_quantity: u32, bounce: Duration) -> Self {
        Self {
            description: String::new(),
            cursor_position: 0,
            quantity: 1,
            error: None,
            max_quantity: max_quantity.max(1),
            bounce,
            bounce_until: None,
        }
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        let byte_index = self.byte_index();
        self.description.insert(byte_index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.description.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.description.chars().skip(current_index);
            self.description = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }

    pub fn increase_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(self.max_quantity);
    }

    pub fn decrease_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, self.max_quantity);
    }

    /// Validates the form and, on success, returns a new item and resets the
    /// form. Only an id is reserved from `store`; the caller adds the item.
    pub fn submit(&mut self, store: &mut ItemListStore) -> Result<Item, FormError> {
        self.submit_at(store, Instant::now())
    }

    pub fn submit_at(&mut self, store: &mut ItemListStore, now: Instant) -> Result<Item, FormError> {
        if self.description.is_empty() {
            let err = FormError::EmptyDescription;
            warn!("rejected submit: {}", err);
            self.error = Some(format!("{} 🚨", err));
            self.bounce_until = Some(now + self.bounce);
            return Err(err);
        }

        let item = Item::new(store.next_id(), self.description.clone(), self.quantity);
        debug!(id = %item.id, "form submitted");
        self.reset();
        Ok(item)
    }

    /// Whether the description field should still be emphasized after a
    /// failed submit.
    pub fn is_bouncing(&self, now: Instant) -> bool {
        self.bounce_until.is_some_and(|until| now < until)
    }

    pub fn reset(&mut self) {
        self.description.clear();
        self.cursor_position = 0;
        self.quantity = 1;
        self.error = None;
        self.bounce_until = None;
    }

    fn byte_index(&self) -> usize {
        self.description
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.description.len())
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.description.chars().count())
    }
}
