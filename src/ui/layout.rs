//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (sidebar+plants on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let screen_width = area.width;
        let screen_height = area.height;

        let top_height = screen_height.saturating_sub(1);
        let top_area = Rect::new(0, 0, screen_width, top_height);

        // Bottom area: status bar (1 line height, full width)
        let status_area = Rect::new(0, top_height, screen_width, 1);

        vec![top_area, status_area]
    }

    /// Calculate the top pane layout (sidebar + main panel side by side)
    #[must_use]
    pub fn top_pane_layout(area: Rect, sidebar_width: u16) -> Vec<Rect> {
        let sidebar_width = std::cmp::min(area.width / 3, sidebar_width);
        let main_width = area.width.saturating_sub(sidebar_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Length(main_width)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Rectangle for the toast in a given stack slot, anchored bottom-right.
    ///
    /// Slot 0 is the corner itself; higher slots stack upward. Returns
    /// `None` when the slot does not fit in the area.
    #[must_use]
    pub fn toast_rect(area: Rect, slot: u16, width: u16, height: u16) -> Option<Rect> {
        let width = std::cmp::min(width, area.width);
        let used_height = height.checked_mul(slot + 1)?;
        if width == 0 || used_height > area.height.saturating_sub(1) {
            return None;
        }

        let x = area.right().saturating_sub(width + 1).max(area.left());
        let y = area.bottom().saturating_sub(used_height + 1).max(area.top());
        Some(Rect::new(x, y, width, height))
    }
}
