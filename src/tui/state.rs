use crate::config::Config;
use crate::form::ItemForm;
use crate::model::{ItemId, SortBy};
use crate::store::ItemListStore;
use crate::tui::action::Action;
use ratatui::widgets::ListState;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Adding,
    ConfirmClear,
}

pub struct AppState {
    pub store: ItemListStore,
    pub form: ItemForm,
    pub sort_by: SortBy,
    /// Ids in display order for the current sort.
    pub view_ids: Vec<ItemId>,
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: ItemListStore, form: ItemForm, sort_by: SortBy) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        let mut state = Self {
            store,
            form,
            sort_by,
            view_ids: vec![],
            list_state: l_state,
            mode: InputMode::Normal,
            message: "a: Add | Space: Pack | d: Del | s: Sort | c: Clear".to_string(),
            should_quit: false,
        };
        state.recalculate_view();
        state
    }

    pub fn from_config(config: &Config) -> Self {
        let store = ItemListStore::with_seed(config.seed_items());
        let form = ItemForm::new(config.max_quantity, config.bounce());
        Self::new(store, form, config.sort_by)
    }

    pub fn recalculate_view(&mut self) {
        self.view_ids = self
            .store
            .sorted_view(self.sort_by)
            .into_iter()
            .map(|i| i.id)
            .collect();
        let sel = self.list_state.selected().unwrap_or(0);
        if self.view_ids.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.view_ids.len() {
            self.list_state.select(Some(self.view_ids.len() - 1));
        }
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        let view_idx = self.list_state.selected()?;
        self.view_ids.get(view_idx).copied()
    }

    fn select_id(&mut self, id: ItemId) {
        if let Some(pos) = self.view_ids.iter().position(|v| *v == id) {
            self.list_state.select(Some(pos));
        }
    }

    pub fn apply(&mut self, action: Action) {
        self.apply_at(action, Instant::now());
    }

    pub fn apply_at(&mut self, action: Action, now: Instant) {
        debug!(?action, "apply");
        match action {
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::JumpForward(step) => self.jump_forward(step),
            Action::JumpBackward(step) => self.jump_backward(step),

            Action::StartAdding => {
                self.mode = InputMode::Adding;
                self.message = format!(
                    "Enter: Add | Up/Down: Quantity (1-{}) | Esc: Cancel",
                    self.form.max_quantity()
                );
            }
            Action::CancelAdding => {
                self.form.reset();
                self.mode = InputMode::Normal;
                self.message = "Cancelled.".to_string();
            }
            Action::InputChar(c) => self.form.enter_char(c),
            Action::DeleteChar => self.form.delete_char(),
            Action::CursorLeft => self.form.move_cursor_left(),
            Action::CursorRight => self.form.move_cursor_right(),
            Action::QuantityUp => self.form.increase_quantity(),
            Action::QuantityDown => self.form.decrease_quantity(),
            Action::Submit => match self.form.submit_at(&mut self.store, now) {
                Ok(item) => {
                    let id = item.id;
                    self.message = format!("Added {} {}.", item.quantity, item.description);
                    self.store.add(item);
                    self.mode = InputMode::Normal;
                    self.recalculate_view();
                    self.select_id(id);
                }
                Err(e) => {
                    self.message = e.to_string();
                }
            },

            Action::ToggleItem(id) => {
                self.store.toggle(id);
                self.recalculate_view();
                self.select_id(id);
            }
            Action::DeleteItem(id) => {
                if let Some(item) = self.store.get(id) {
                    self.message = format!("Deleted {}.", item.description);
                }
                self.store.delete(id);
                self.recalculate_view();
            }
            Action::SetSort(sort_by) => self.set_sort(sort_by),
            Action::NextSort => self.set_sort(self.sort_by.next()),
            Action::PreviousSort => self.set_sort(self.sort_by.previous()),

            Action::RequestClear => {
                if self.store.is_empty() {
                    self.message = "The list is already empty.".to_string();
                } else {
                    self.mode = InputMode::ConfirmClear;
                }
            }
            Action::AnswerClear(answer) => {
                self.mode = InputMode::Normal;
                if self.store.clear_confirmed(&mut |_: &str| answer) {
                    self.message = "List cleared.".to_string();
                    self.list_state.select(Some(0));
                } else {
                    self.message = "Kept the list.".to_string();
                }
                self.recalculate_view();
            }

            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    fn set_sort(&mut self, sort_by: SortBy) {
        let selected = self.selected_id();
        self.sort_by = sort_by;
        self.recalculate_view();
        if let Some(id) = selected {
            self.select_id(id);
        }
        self.message = sort_by.label().to_string();
    }

    pub fn next(&mut self) {
        let len = self.view_ids.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.view_ids.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.view_ids.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (don't wrap around like next())
        let new_index = (current + step).min(self.view_ids.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.view_ids.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}
