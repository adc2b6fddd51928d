//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, loading: bool, active_tasks: usize) {
        let status_text = if loading {
            "Loading garden data...".to_string()
        } else if active_tasks > 0 {
            "Working...".to_string()
        } else {
            "Space: advance status • h: harvest • b: new bed • p: new plant • x: delete • ?: help • q: quit"
                .to_string()
        };

        let status_color = if loading || active_tasks > 0 {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
