use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::widgets::color::parse_color;
use crate::Config;

pub fn render_help(f: &mut Frame, area: Rect, config: &Config) {
    let theme = &config.theme;
    let fg_color = parse_color(&theme.fg);
    let bg_color = parse_color(&theme.bg);

    let popup_area = popup_area(area, 50, 60);

    // Clear the background first so list content doesn't show through
    f.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text(config))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Key Bindings")
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

/// Centered popup rect, following the ratatui popup example.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn build_help_text(config: &Config) -> String {
    let bindings = &config.key_bindings;
    let mut text = String::new();

    text.push_str("Navigation:\n");
    text.push_str(&format!("  {} / {}: Move selection up/down\n", bindings.list_up, bindings.list_down));
    text.push_str(&format!("  {}: Cycle filter (All / Active / Done)\n", bindings.cycle_filter));
    text.push('\n');

    text.push_str("Actions:\n");
    text.push_str(&format!("  {}: Add a task\n", bindings.add));
    text.push_str(&format!("  {}: Toggle done\n", bindings.toggle_done));
    text.push_str(&format!("  {}: Mark as started\n", bindings.mark_started));
    text.push_str(&format!("  {}: Delete\n", bindings.delete));
    text.push('\n');

    text.push_str("Other:\n");
    text.push_str(&format!("  {}: This help\n", bindings.help));
    text.push_str(&format!("  {}: Quit\n", bindings.quit));
    text.push('\n');
    text.push_str("Press any key to close");

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_names_every_binding() {
        let config = Config::default();
        let text = build_help_text(&config);
        for key in ["q", "a", "Space", "s", "d", "f", "F1"] {
            assert!(text.contains(key), "missing binding {key} in help text");
        }
    }
}
