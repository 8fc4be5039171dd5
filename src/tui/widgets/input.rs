use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, InputField, Mode};
use crate::tui::widgets::color::parse_color;

/// The add-task box at the bottom of the screen. Outside input mode it is a
/// passive hint; in input mode it shows the text and due-date fields and
/// places the cursor in the focused one.
pub fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.config.theme;
    let fg_color = parse_color(&theme.fg);
    let done_fg = parse_color(&theme.done_fg);

    if app.mode != Mode::Input {
        let hint = format!("Press '{}' to add a task", app.config.key_bindings.add);
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(done_fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("New task")
                    .style(Style::default().fg(fg_color)),
            );
        f.render_widget(paragraph, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New task (Enter: save, Tab: due date, Esc: cancel)")
        .style(Style::default().fg(fg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Text field takes what the due field doesn't; the due field only needs
    // room for YYYY-MM-DD plus its label
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(17)])
        .split(inner);

    let focused = Style::default().fg(fg_color).add_modifier(Modifier::BOLD);
    let unfocused = Style::default().fg(done_fg);

    let text_style = if app.input_field == InputField::Text { focused } else { unfocused };
    let due_style = if app.input_field == InputField::DueDate { focused } else { unfocused };

    f.render_widget(Paragraph::new(app.input_text.as_str()).style(text_style), fields[0]);
    f.render_widget(
        Paragraph::new(format!("due: {}", app.input_due)).style(due_style),
        fields[1],
    );

    // Put the terminal cursor at the end of the focused field
    match app.input_field {
        InputField::Text => {
            let x = fields[0].x + app.input_text.chars().count() as u16;
            f.set_cursor_position((x.min(fields[0].right().saturating_sub(1)), fields[0].y));
        }
        InputField::DueDate => {
            let x = fields[1].x + 5 + app.input_due.chars().count() as u16;
            f.set_cursor_position((x.min(fields[1].right().saturating_sub(1)), fields[1].y));
        }
    }
}
