use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::Config;

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    config: &Config,
) {
    let theme = &config.theme;
    let fg_color = parse_color(&theme.fg);
    let bg_color = parse_color(&theme.bg);
    let highlight_bg = parse_color(&theme.highlight_bg);

    let (content, style) = if let Some(msg) = message {
        // Status messages get a highlighted background for visibility
        let msg_fg = get_contrast_text_color(highlight_bg);
        (
            truncate(msg, area.width as usize),
            Style::default().fg(msg_fg).bg(highlight_bg).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            fit_hints(key_hints, area.width as usize),
            Style::default().fg(fg_color).bg(bg_color),
        )
    };

    // Simple 1-line display, no Block wrapper
    let paragraph = Paragraph::new(content).style(style);
    f.render_widget(paragraph, area);
}

/// Join hints with bullet separators, keeping only as many as fit.
fn fit_hints(key_hints: &[String], max_width: usize) -> String {
    let separator = " • ";
    let mut text = String::new();

    for (i, hint) in key_hints.iter().enumerate() {
        let would_be = if i == 0 {
            hint.chars().count()
        } else {
            text.chars().count() + separator.chars().count() + hint.chars().count()
        };
        if would_be > max_width {
            if !text.is_empty() {
                text.push_str("...");
            }
            break;
        }
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(hint);
    }

    text
}

fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    // No room for an ellipsis below 4 columns; just cut hard
    if max_width <= 3 {
        return s.chars().take(max_width).collect();
    }
    s.chars().take(max_width - 3).collect::<String>() + "..."
}
