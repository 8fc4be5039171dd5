use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::Mode;
use crate::tui::widgets::{
    color::parse_color, help::render_help, input::render_input, status_bar::render_status_bar,
    task_list::render_task_list,
};
use crate::tui::{App, Layout};

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    let theme = app.config.theme.clone();
    let fg_color = parse_color(&theme.fg);
    let bg_color = parse_color(&theme.bg);

    // Outer border with the app name centered in the top edge
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("TUDU")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    // Header: remaining count and active filter
    let header = format!(
        "Remaining: {}  •  Filter: {}",
        app.remaining(),
        app.filter.label()
    );
    f.render_widget(
        Paragraph::new(header).style(Style::default().fg(fg_color).bg(bg_color)),
        layout.header_area,
    );

    // Project straight off the store field so the borrow stays disjoint
    // from list_state; no per-frame clone of the records
    let visible = crate::view::visible(app.store.todos(), app.filter);
    render_task_list(
        f,
        layout.list_area,
        &visible,
        app.filter,
        &mut app.list_state,
        &app.config,
    );

    render_input(f, layout.input_area, app);

    let hints = app.key_hints();
    render_status_bar(
        f,
        layout.status_area,
        app.status_message.as_ref(),
        &hints,
        &app.config,
    );

    if app.mode == Mode::Help {
        render_help(f, layout.inner_area, &app.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::{Config, TodoStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_tasks_header_and_hints() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("todos.json"));
        let mut store = TodoStore::open(storage, Duration::from_millis(50));
        store.add("Buy milk", None);
        store.add("Write tests", Some("2025-11-01".to_string()));
        let mut app = App::new(Config::default(), store).unwrap();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let layout = Layout::calculate(f.area());
                render(f, &mut app, &layout);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Remaining: 2"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Write tests"));
        assert!(text.contains("[due 2025-11-01]"));
        assert!(text.contains("q: Quit"));
    }
}
