//! Modal dialogs for garden operations.
//!
//! One component owns every dialog variant: bed creation, plant creation,
//! harvest entry, and delete confirmation. While a dialog is open it
//! captures all key input; submitting emits the matching operation action.

use crate::ui::core::actions::{Action, DialogType};
use crate::ui::core::Component;
use crate::ui::layout::LayoutManager;
use crate::ui::components::toast::Severity;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

struct Field {
    label: &'static str,
    value: String,
}

impl Field {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    fn with_value(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

pub struct DialogComponent {
    dialog: Option<DialogType>,
    fields: Vec<Field>,
    active_field: usize,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog: None,
            fields: Vec::new(),
            active_field: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn open(&mut self, dialog: DialogType) {
        self.fields = match &dialog {
            DialogType::BedCreation => vec![Field::new("Name"), Field::new("Dimensions (WxH)")],
            DialogType::PlantCreation { .. } => vec![
                Field::new("Name"),
                Field::new("Variety"),
                Field::with_value("Quantity", "1"),
            ],
            DialogType::HarvestEntry { .. } => {
                vec![Field::new("Quantity"), Field::with_value("Unit", "kg")]
            }
            DialogType::DeleteConfirmation { .. } => Vec::new(),
        };
        self.active_field = 0;
        self.dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.dialog = None;
        self.fields.clear();
        self.active_field = 0;
    }

    fn field_value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.trim()).unwrap_or("")
    }

    fn optional_field(&self, index: usize) -> Option<String> {
        let value = self.field_value(index);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Turn the current dialog and its field values into an operation action.
    ///
    /// Validation failures become warning toasts and keep the dialog open.
    fn submit(&mut self) -> Action {
        let Some(dialog) = self.dialog.clone() else {
            return Action::None;
        };

        let action = match dialog {
            DialogType::BedCreation => {
                let name = self.field_value(0).to_string();
                let dimensions = self.field_value(1).to_string();
                if name.is_empty() || dimensions.is_empty() {
                    return warning("Name and dimensions are required");
                }
                Action::CreateBed { name, dimensions }
            }
            DialogType::PlantCreation { bed_uuid } => {
                let name = self.field_value(0).to_string();
                if name.is_empty() {
                    return warning("Plant name is required");
                }
                let Ok(quantity) = self.field_value(2).parse::<i32>() else {
                    return warning("Quantity must be a whole number");
                };
                Action::CreatePlant {
                    name,
                    variety: self.optional_field(1),
                    bed_uuid,
                    quantity,
                }
            }
            DialogType::HarvestEntry { plant_uuid, .. } => {
                let Ok(quantity) = self.field_value(0).parse::<f64>() else {
                    return warning("Quantity must be a number");
                };
                let unit = self.field_value(1).to_string();
                if unit.is_empty() {
                    return warning("Unit is required");
                }
                Action::RecordHarvest {
                    plant_uuid,
                    quantity,
                    unit,
                }
            }
            DialogType::DeleteConfirmation { .. } => Action::None,
        };

        self.close();
        action
    }

    fn confirm_delete(&mut self) -> Action {
        let Some(DialogType::DeleteConfirmation {
            item_type, item_uuid, ..
        }) = self.dialog.clone()
        else {
            return Action::None;
        };
        self.close();
        match item_type.as_str() {
            "bed" => Action::DeleteBed(item_uuid),
            _ => Action::DeletePlant(item_uuid),
        }
    }

    fn title(&self) -> String {
        match &self.dialog {
            Some(DialogType::BedCreation) => "New Garden Bed".to_string(),
            Some(DialogType::PlantCreation { .. }) => "New Plant".to_string(),
            Some(DialogType::HarvestEntry { plant_name, .. }) => {
                format!("Harvest from {}", plant_name)
            }
            Some(DialogType::DeleteConfirmation { item_type, .. }) => {
                format!("Delete {}?", item_type)
            }
            None => String::new(),
        }
    }
}

fn warning(message: &str) -> Action {
    Action::ShowToast {
        message: message.to_string(),
        severity: Severity::Warning,
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog) = &self.dialog else {
            return Action::None;
        };

        if matches!(dialog, DialogType::DeleteConfirmation { .. }) {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.close();
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                if !self.fields.is_empty() {
                    self.active_field = (self.active_field + 1) % self.fields.len();
                }
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                if !self.fields.is_empty() {
                    self.active_field =
                        (self.active_field + self.fields.len() - 1) % self.fields.len();
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.active_field) {
                    field.value.pop();
                }
                Action::None
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.fields.get_mut(self.active_field) {
                    field.value.push(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, _rect: Rect) {
        if self.dialog.is_none() {
            return;
        }

        let height = (self.fields.len() as u16 * 2).max(3) + 3;
        let area = LayoutManager::centered_rect_lines(50, height, f.area());
        f.render_widget(Clear, area);

        let mut lines = Vec::new();
        if let Some(DialogType::DeleteConfirmation { item_name, .. }) = &self.dialog {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Really delete '{}'? (y/n)", item_name)));
        } else {
            for (index, field) in self.fields.iter().enumerate() {
                let marker = if index == self.active_field { "> " } else { "  " };
                lines.push(Line::from(format!("{}{}: {}", marker, field.label, field.value)));
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(
                "Enter: save  Tab: next field  Esc: cancel",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }

        let dialog = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.title())
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(dialog, area);
    }
}
