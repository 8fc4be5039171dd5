use ratatui::layout::{Constraint, Direction, Layout as RatLayout, Rect};

pub struct Layout {
    pub inner_area: Rect, // Area inside the outer border
    pub header_area: Rect,
    pub list_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application.
    /// Height: 2 outer borders + 1 header + 1 list line + 3 input box + 1 status.
    pub const MIN_WIDTH: u16 = 30;
    pub const MIN_HEIGHT: u16 = 8;

    pub fn calculate(size: Rect) -> Self {
        let width = size.width.max(Self::MIN_WIDTH);
        let height = size.height.max(Self::MIN_HEIGHT);
        let size = Rect::new(size.x, size.y, width, height);

        // Inner area accounts for the outer border: 1 char on each side
        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        let vertical = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header (remaining count + filter)
                Constraint::Min(1),    // Task list
                Constraint::Length(3), // Input box (borders + content)
                Constraint::Length(1), // Status bar
            ])
            .split(inner_area);

        Self {
            inner_area,
            header_area: vertical[0],
            list_area: vertical[1],
            input_area: vertical[2],
            status_area: vertical[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_without_overlap() {
        let layout = Layout::calculate(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header_area.y, 1);
        assert_eq!(
            layout.list_area.y + layout.list_area.height,
            layout.input_area.y
        );
        assert_eq!(
            layout.input_area.y + layout.input_area.height,
            layout.status_area.y
        );
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
    }

    #[test]
    fn tiny_rects_are_padded_to_the_minimum() {
        let layout = Layout::calculate(Rect::new(0, 0, 5, 3));
        assert!(layout.list_area.height >= 1);
    }
}
