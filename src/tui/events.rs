use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

use crate::tui::app::{App, InputField, Mode};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;

/// Guard that ensures terminal state is restored even on panic.
/// If the terminal is left in raw mode or the alternate screen, the user's
/// shell is unusable afterwards.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Manually restore terminal state (called on normal exit).
    /// After calling this, the guard will do nothing on drop.
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors in drop - we're already in a cleanup path
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering the alternate screen so the error
    // message lands in the normal terminal
    let (width, height) = terminal_size()?;
    if width < Layout::MIN_WIDTH || height < Layout::MIN_HEIGHT {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, minimum required: {}x{}.",
            width,
            height,
            Layout::MIN_WIDTH,
            Layout::MIN_HEIGHT
        )));
    }

    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.check_status_message_timeout();

        // Debounced write-back: the tick is the only place a save can fire,
        // so persistence never races the key handling below
        app.store.maybe_save();

        terminal.draw(|f| {
            let layout = Layout::calculate(f.area());
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        // Only process Press events to avoid double-processing on Windows
        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if handle_key_event(&mut app, key_event) {
                        break;
                    }
                }
                _ => {
                    // Resize redraws on the next loop pass; other events
                    // (mouse, focus) are ignored
                }
            }
        }
    }

    // Whatever the debounce state, the last edits must reach disk
    app.store.flush();

    guard.restore()?;

    Ok(())
}

/// Returns true when the user asked to quit.
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> bool {
    match app.mode {
        Mode::Help => {
            app.mode = Mode::List;
            false
        }
        Mode::Input => {
            handle_input_mode(app, key_event);
            false
        }
        Mode::List => handle_list_mode(app, key_event),
    }
}

fn handle_input_mode(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Tab => {
            app.input_field = match app.input_field {
                InputField::Text => InputField::DueDate,
                InputField::DueDate => InputField::Text,
            };
        }
        KeyCode::Backspace => {
            match app.input_field {
                InputField::Text => app.input_text.pop(),
                InputField::DueDate => app.input_due.pop(),
            };
        }
        KeyCode::Char(c) => match app.input_field {
            InputField::Text => app.input_text.push(c),
            InputField::DueDate => app.input_due.push(c),
        },
        _ => {}
    }
}

fn handle_list_mode(app: &mut App, key_event: KeyEvent) -> bool {
    if app.keys.quit.matches(&key_event) {
        return true;
    }

    if app.keys.add.matches(&key_event) {
        app.begin_input();
    } else if app.keys.toggle_done.matches(&key_event) {
        app.toggle_selected();
    } else if app.keys.delete.matches(&key_event) {
        app.delete_selected();
    } else if app.keys.mark_started.matches(&key_event) {
        app.mark_started_selected();
    } else if app.keys.cycle_filter.matches(&key_event) {
        app.cycle_filter();
    } else if app.keys.list_up.matches(&key_event) || key_event.code == KeyCode::Up {
        app.select_previous();
    } else if app.keys.list_down.matches(&key_event) || key_event.code == KeyCode::Down {
        app.select_next();
    } else if app.keys.help.matches(&key_event) {
        app.mode = Mode::Help;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::{Config, TodoStore};
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("todos.json"));
        let mut store = TodoStore::open(storage, Duration::from_millis(50));
        store.add("Buy milk", None);
        App::new(Config::default(), store).unwrap()
    }

    #[test]
    fn quit_key_ends_the_loop() {
        let mut app = test_app();
        assert!(handle_key_event(&mut app, key('q')));
    }

    #[test]
    fn add_key_opens_the_form_and_typing_fills_it() {
        let mut app = test_app();
        assert!(!handle_key_event(&mut app, key('a')));
        assert_eq!(app.mode, Mode::Input);

        handle_key_event(&mut app, key('h'));
        handle_key_event(&mut app, key('i'));
        assert_eq!(app.input_text, "hi");

        // Tab moves to the due-date field
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        handle_key_event(&mut app, key('2'));
        assert_eq!(app.input_due, "2");

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.store.todos().len(), 2);
        assert_eq!(app.store.todos()[0].text, "hi");
    }

    #[test]
    fn escape_cancels_the_form() {
        let mut app = test_app();
        handle_key_event(&mut app, key('a'));
        handle_key_event(&mut app, key('x'));
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.store.todos().len(), 1);
    }

    #[test]
    fn space_toggles_the_selected_task() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(app.store.todos()[0].done);
        assert_eq!(app.remaining(), 0);
    }

    #[test]
    fn help_overlay_closes_on_any_key() {
        let mut app = test_app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE));
        assert_eq!(app.mode, Mode::Help);
        handle_key_event(&mut app, key('z'));
        assert_eq!(app.mode, Mode::List);
    }
}
