//! Sidebar navigation component for the Gardenist application.
//!
//! The sidebar lists the fixed views (All Plants, Stats) followed by every
//! garden bed. Selection changes bubble up as navigation actions so the app
//! can load the matching plant data.

use crate::garden::BedDisplay;
use crate::icons::IconService;
use crate::ui::core::SidebarSelection;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub selection: SidebarSelection,
    pub beds: Vec<BedDisplay>,
    pub icons: IconService,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selection: SidebarSelection::AllPlants,
            beds: Vec::new(),
            icons: IconService::default(),
            list_state,
        }
    }

    pub fn update_data(&mut self, beds: Vec<BedDisplay>) {
        self.beds = beds;
        // Selected bed may be gone after a delete
        if let SidebarSelection::Bed(index) = self.selection {
            if index >= self.beds.len() {
                self.selection = SidebarSelection::AllPlants;
            }
        }
        self.update_list_state();
    }

    /// Bed backing the current selection, when one is selected.
    pub fn selected_bed(&self) -> Option<&BedDisplay> {
        match self.selection {
            SidebarSelection::Bed(index) => self.beds.get(index),
            _ => None,
        }
    }

    fn total_items(&self) -> usize {
        2 + self.beds.len()
    }

    fn index_to_selection(&self, index: usize) -> SidebarSelection {
        match index {
            0 => SidebarSelection::AllPlants,
            1 => SidebarSelection::Stats,
            n => SidebarSelection::Bed(n - 2),
        }
    }

    fn selection_to_index(&self, selection: &SidebarSelection) -> usize {
        match selection {
            SidebarSelection::AllPlants => 0,
            SidebarSelection::Stats => 1,
            SidebarSelection::Bed(index) => 2 + index,
        }
    }

    fn update_list_state(&mut self) {
        let index = self.selection_to_index(&self.selection);
        self.list_state.select(Some(index));
    }

    fn navigate(&mut self, forward: bool) -> Action {
        let total = self.total_items();
        if total == 0 {
            return Action::None;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % total
        } else {
            (current + total - 1) % total
        };
        self.list_state.select(Some(next));
        Action::NavigateToSidebar(self.index_to_selection(next))
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') | KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.navigate(true)
            }
            KeyCode::Char('K') | KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.navigate(false)
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NavigateToSidebar(selection) => {
                self.selection = selection.clone();
                self.update_list_state();
                // Pass the action through to AppComponent for further processing
                Action::NavigateToSidebar(selection)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.update_list_state();

        let mut items: Vec<ListItem> = vec![
            ListItem::new(format!("{} All Plants", self.icons.plants_title())),
            ListItem::new(format!("{} Stats", self.icons.stats_title())),
        ];

        for bed in &self.beds {
            items.push(ListItem::new(format!(
                "{} {} ({})",
                self.icons.beds_title(),
                bed.name,
                bed.plant_count
            )));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Garden")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
