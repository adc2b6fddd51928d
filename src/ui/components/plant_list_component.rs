//! Plant list component.
//!
//! Shows the plants for the current sidebar selection with their lifecycle
//! status, season, and planting date. Operations on the selected plant
//! (advance status, record harvest, delete) are emitted as actions.

use crate::garden::{BedDisplay, PlantDisplay};
use crate::icons::IconService;
use crate::ui::core::actions::{Action, DialogType};
use crate::ui::core::{Component, SidebarSelection};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};
use uuid::Uuid;

pub struct PlantListComponent {
    plants: Vec<PlantDisplay>,
    beds: Vec<BedDisplay>,
    selection: SidebarSelection,
    date_format: String,
    show_varieties: bool,
    show_notes: bool,
    pub icons: IconService,
    list_state: ListState,
}

impl Default for PlantListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantListComponent {
    pub fn new() -> Self {
        Self {
            plants: Vec::new(),
            beds: Vec::new(),
            selection: SidebarSelection::AllPlants,
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
            show_varieties: true,
            show_notes: true,
            icons: IconService::default(),
            list_state: ListState::default(),
        }
    }

    pub fn set_display_options(&mut self, date_format: String, show_varieties: bool, show_notes: bool) {
        self.date_format = date_format;
        self.show_varieties = show_varieties;
        self.show_notes = show_notes;
    }

    pub fn update_data(
        &mut self,
        plants: Vec<PlantDisplay>,
        beds: Vec<BedDisplay>,
        selection: SidebarSelection,
    ) {
        self.plants = plants;
        self.beds = beds;
        self.selection = selection;

        // Clamp selection to the new list
        match self.list_state.selected() {
            Some(index) if index >= self.plants.len() => {
                self.list_state.select(self.plants.len().checked_sub(1));
            }
            None if !self.plants.is_empty() => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn selected_plant(&self) -> Option<&PlantDisplay> {
        self.list_state.selected().and_then(|index| self.plants.get(index))
    }

    fn bed_name(&self, bed_uuid: &Uuid) -> Option<&str> {
        self.beds
            .iter()
            .find(|bed| &bed.uuid == bed_uuid)
            .map(|bed| bed.name.as_str())
    }

    fn select_next(&mut self) {
        if self.plants.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % self.plants.len()));
    }

    fn select_previous(&mut self) {
        if self.plants.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((current + self.plants.len() - 1) % self.plants.len()));
    }

    fn title(&self) -> String {
        match &self.selection {
            SidebarSelection::AllPlants => "All Plants".to_string(),
            SidebarSelection::Stats => "Stats".to_string(),
            SidebarSelection::Bed(index) => self
                .beds
                .get(*index)
                .map(|bed| format!("{} ({})", bed.name, bed.dimensions))
                .unwrap_or_else(|| "Plants".to_string()),
        }
    }

    fn plant_line(&self, plant: &PlantDisplay) -> String {
        let mut line = format!(
            "{} {}",
            self.icons.plant_status(plant.status),
            plant.name
        );

        if self.show_varieties {
            if let Some(variety) = &plant.variety {
                line.push_str(&format!(" ({})", variety));
            }
        }

        if plant.quantity > 1 {
            line.push_str(&format!(" ×{}", plant.quantity));
        }

        line.push_str(&format!(
            "  {} {}",
            self.icons.season(plant.season),
            datetime::format_date_with(&plant.planting_date, &self.date_format)
        ));

        if let Some(expected) = &plant.expected_harvest_date {
            line.push_str(&format!("  harvest {}", datetime::format_human_date(expected)));
        }

        if let SidebarSelection::AllPlants = self.selection {
            if let Some(bed_name) = self.bed_name(&plant.bed_uuid) {
                line.push_str(&format!("  [{}]", bed_name));
            }
        }

        if self.show_notes {
            if let Some(notes) = &plant.notes {
                line.push_str(&format!("  · {}", notes));
            }
        }

        line
    }
}

impl Component for PlantListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Char(' ') => match self.selected_plant() {
                Some(plant) => Action::AdvancePlantStatus(plant.uuid),
                None => Action::None,
            },
            KeyCode::Char('h') => match self.selected_plant() {
                Some(plant) => Action::ShowDialog(DialogType::HarvestEntry {
                    plant_uuid: plant.uuid,
                    plant_name: plant.name.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('x') => match self.selected_plant() {
                Some(plant) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    item_type: "plant".to_string(),
                    item_name: plant.name.clone(),
                    item_uuid: plant.uuid,
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self
            .plants
            .iter()
            .map(|plant| {
                let style = if plant.status == crate::garden::PlantStatus::Finished {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(self.plant_line(plant)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.title())
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
