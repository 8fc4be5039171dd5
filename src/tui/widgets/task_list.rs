use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::models::Todo;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::view::Filter;
use crate::Config;

pub fn render_task_list(
    f: &mut Frame,
    area: Rect,
    todos: &[&Todo],
    filter: Filter,
    list_state: &mut ListState,
    config: &Config,
) {
    // Max line width for truncation (2 for borders, 2 for padding)
    let max_width = area.width.saturating_sub(4) as usize;

    let theme = &config.theme;
    let fg_color = parse_color(&theme.fg);
    let done_fg = parse_color(&theme.done_fg);
    let highlight_bg = parse_color(&theme.highlight_bg);
    let highlight_fg = if theme.highlight_fg.is_empty() {
        get_contrast_text_color(highlight_bg)
    } else {
        parse_color(&theme.highlight_fg)
    };

    let items: Vec<ListItem> = todos
        .iter()
        .map(|todo| {
            let marker = if todo.done { "✓" } else { "○" };
            let due_str = todo
                .due_date
                .as_ref()
                .map(|d| format!(" [due {}]", d))
                .unwrap_or_default();
            let started_str = if !todo.done && todo.worked_at.is_some() {
                " ·started"
            } else {
                ""
            };

            let line = truncate_line(
                format!("{} {}{}{}", marker, todo.text, due_str, started_str),
                max_width,
            );

            let style = if todo.done {
                Style::default().fg(done_fg).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(fg_color)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = match filter {
        Filter::All => format!("Tasks ({})", todos.len()),
        _ => format!("Tasks - {} ({})", filter.label(), todos.len()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(Style::default().fg(fg_color)),
        )
        .highlight_style(
            Style::default()
                .fg(highlight_fg)
                .bg(highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, list_state);
}

/// Cut a line down to the column budget, with an ellipsis when there is
/// room for one.
fn truncate_line(line: String, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line;
    }
    if max_width <= 3 {
        return line.chars().take(max_width).collect();
    }
    line.chars().take(max_width - 3).collect::<String>() + "..."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_cut_to_the_column_budget() {
        let long = "○ a rather long task text".to_string();
        let cut = truncate_line(long.clone(), 12);
        assert_eq!(cut.chars().count(), 12);
        assert!(cut.ends_with("..."));

        // Narrower than the ellipsis itself: hard cut, no overflow
        assert_eq!(truncate_line(long.clone(), 2).chars().count(), 2);
        assert_eq!(truncate_line(long, 0), "");
        assert_eq!(truncate_line("○ short".to_string(), 12), "○ short");
    }
}
