//! Help overlay listing all key bindings.

use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame) {
        let area = LayoutManager::centered_rect(60, 70, f.area());
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(""),
            Line::from("Navigation"),
            Line::from("  j / ↓          next plant"),
            Line::from("  k / ↑          previous plant"),
            Line::from("  Shift+J / ↓    next sidebar entry"),
            Line::from("  Shift+K / ↑    previous sidebar entry"),
            Line::from(""),
            Line::from("Garden"),
            Line::from("  Space          advance plant status"),
            Line::from("  h              record a harvest"),
            Line::from("  b              create a garden bed"),
            Line::from("  p              add a plant to the current bed"),
            Line::from("  x              delete selected plant"),
            Line::from("  X              delete current bed"),
            Line::from("  r              reload data"),
            Line::from(""),
            Line::from("Other"),
            Line::from("  ?              toggle this help"),
            Line::from("  q / Esc        quit"),
        ];

        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Help")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help, area);
    }
}
