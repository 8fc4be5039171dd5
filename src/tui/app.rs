use ratatui::widgets::ListState;
use std::time::Instant;

use crate::store::TodoStore;
use crate::tui::error::TuiError;
use crate::utils::{parse_key_binding, ParsedKeyBinding};
use crate::view::{self, Filter};
use crate::{Config, Todo};

/// How long a status message stays on screen before the key hints return.
const STATUS_MESSAGE_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Input,
    Help,
}

/// Which field of the add form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Text,
    DueDate,
}

/// Key bindings parsed once at startup so a bad config fails fast instead
/// of on the first keypress.
pub struct KeyMap {
    pub quit: ParsedKeyBinding,
    pub add: ParsedKeyBinding,
    pub toggle_done: ParsedKeyBinding,
    pub delete: ParsedKeyBinding,
    pub mark_started: ParsedKeyBinding,
    pub cycle_filter: ParsedKeyBinding,
    pub list_up: ParsedKeyBinding,
    pub list_down: ParsedKeyBinding,
    pub help: ParsedKeyBinding,
}

impl KeyMap {
    fn from_config(config: &Config) -> Result<Self, TuiError> {
        let parse = |s: &str| parse_key_binding(s).map_err(TuiError::KeyBindingError);
        Ok(Self {
            quit: parse(&config.key_bindings.quit)?,
            add: parse(&config.key_bindings.add)?,
            toggle_done: parse(&config.key_bindings.toggle_done)?,
            delete: parse(&config.key_bindings.delete)?,
            mark_started: parse(&config.key_bindings.mark_started)?,
            cycle_filter: parse(&config.key_bindings.cycle_filter)?,
            list_up: parse(&config.key_bindings.list_up)?,
            list_down: parse(&config.key_bindings.list_down)?,
            help: parse(&config.key_bindings.help)?,
        })
    }
}

/// Session state for the TUI: the store plus everything transient (mode,
/// filter, selection, input buffers, status message). None of this survives
/// the session; the store is the only durable thing here.
pub struct App {
    pub config: Config,
    pub store: TodoStore,
    pub keys: KeyMap,
    pub mode: Mode,
    pub filter: Filter,
    pub list_state: ListState,
    pub input_text: String,
    pub input_due: String,
    pub input_field: InputField,
    pub status_message: Option<String>,
    status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: Config, store: TodoStore) -> Result<Self, TuiError> {
        let keys = KeyMap::from_config(&config)?;
        let mut list_state = ListState::default();
        if !store.todos().is_empty() {
            list_state.select(Some(0));
        }
        Ok(Self {
            config,
            store,
            keys,
            mode: Mode::List,
            filter: Filter::default(),
            list_state,
            input_text: String::new(),
            input_due: String::new(),
            input_field: InputField::Text,
            status_message: None,
            status_message_time: None,
        })
    }

    /// The projection currently on screen.
    pub fn visible_todos(&self) -> Vec<&Todo> {
        view::visible(self.store.todos(), self.filter)
    }

    pub fn remaining(&self) -> usize {
        view::remaining(self.store.todos())
    }

    /// Id of the highlighted record, if any.
    pub fn selected_id(&self) -> Option<u64> {
        let index = self.list_state.selected()?;
        self.visible_todos().get(index).map(|t| t.id)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_todos().len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.visible_todos().is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    /// Clamp the selection after the visible list shrank (delete, filter
    /// change, toggle under the Active/Done filters).
    pub fn adjust_selection(&mut self) {
        let len = self.visible_todos().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            match self.list_state.selected() {
                Some(i) if i >= len => self.list_state.select(Some(len - 1)),
                None => self.list_state.select(Some(0)),
                _ => {}
            }
        }
    }

    pub fn begin_input(&mut self) {
        self.mode = Mode::Input;
        self.input_text.clear();
        self.input_due.clear();
        self.input_field = InputField::Text;
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::List;
        self.input_text.clear();
        self.input_due.clear();
        self.input_field = InputField::Text;
    }

    /// Submit the add form. Blank text is a silent no-op, same as the
    /// store's contract; the form just closes.
    pub fn submit_input(&mut self) {
        let due = {
            let trimmed = self.input_due.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        if self.store.add(&self.input_text, due).is_some() {
            self.list_state.select(Some(0));
            self.set_status_message("Task added".to_string());
        }
        self.cancel_input();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle(id);
            self.adjust_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.remove(id);
            self.adjust_selection();
            self.set_status_message("Task deleted".to_string());
        }
    }

    pub fn mark_started_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.mark_worked(id);
            self.set_status_message("Marked as started".to_string());
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.cycle();
        self.adjust_selection();
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    /// Clear the status message once it has been on screen long enough.
    pub fn check_status_message_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_SECS {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Key hints for the status bar, built from the configured bindings.
    pub fn key_hints(&self) -> Vec<String> {
        let bindings = &self.config.key_bindings;
        vec![
            format!("{}: Quit", bindings.quit),
            format!("{}: Add", bindings.add),
            format!("{}: Done", bindings.toggle_done),
            format!("{}: Start", bindings.mark_started),
            format!("{}: Delete", bindings.delete),
            format!("{}: Filter", bindings.cycle_filter),
            format!("{}: Help", bindings.help),
        ]
    }
}
