//! Garden statistics panel.
//!
//! Read-only view summarizing the whole garden: plant totals by lifecycle
//! status, season, and year, plus the most recent harvests.

use crate::garden::{GardenStats, HarvestDisplay, PlantStatus, Season};
use crate::icons::IconService;
use crate::utils::datetime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub struct StatsPanel {
    stats: GardenStats,
    recent_harvests: Vec<HarvestDisplay>,
    pub icons: IconService,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsPanel {
    pub fn new() -> Self {
        Self {
            stats: GardenStats::default(),
            recent_harvests: Vec::new(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, stats: GardenStats, recent_harvests: Vec<HarvestDisplay>) {
        self.stats = stats;
        self.recent_harvests = recent_harvests;
    }

    fn count(map: &std::collections::BTreeMap<String, i64>, key: &str) -> i64 {
        map.get(key).copied().unwrap_or(0)
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(8)])
            .split(rect);

        let mut lines = vec![
            Line::from(format!("Total plants: {}", self.stats.total_plants)),
            Line::from(""),
            Line::from("By status:"),
        ];
        for status in PlantStatus::ALL {
            lines.push(Line::from(format!(
                "  {} {:<11} {}",
                self.icons.plant_status(status),
                status.as_str(),
                Self::count(&self.stats.plants_by_status, status.as_str())
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from("By season:"));
        for season in Season::ALL {
            lines.push(Line::from(format!(
                "  {} {:<11} {}",
                self.icons.season(season),
                season.as_str(),
                Self::count(&self.stats.plants_by_season, season.as_str())
            )));
        }

        if !self.stats.plants_by_year.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from("By year:"));
            for (year, count) in self.stats.plants_by_year.iter().rev() {
                lines.push(Line::from(format!("  {:<13} {}", year, count)));
            }
        }

        let summary = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!("{} Garden Stats", self.icons.stats_title()))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(summary, areas[0]);

        let harvest_items: Vec<ListItem> = self
            .recent_harvests
            .iter()
            .map(|harvest| {
                ListItem::new(format!(
                    "{} {} {} on {}",
                    self.icons.harvest(),
                    harvest.quantity,
                    harvest.unit,
                    datetime::format_date(&harvest.harvest_date)
                ))
            })
            .collect();

        let harvests = List::new(harvest_items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Recent Harvests")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(harvests, areas[1]);
    }
}
