use uuid::Uuid;

use crate::garden::{ApiError, BedDisplay, GardenStats, HarvestDisplay, PlantDisplay};
use crate::ui::components::toast::Severity;

/// Represents the currently selected item in the sidebar
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SidebarSelection {
    #[default]
    AllPlants, // Every plant across all beds
    Stats,      // Garden statistics view
    Bed(usize), // Index into beds vector
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateToSidebar(SidebarSelection),

    // Bed operations
    CreateBed {
        name: String,
        dimensions: String,
    },
    DeleteBed(Uuid),

    // Plant operations
    CreatePlant {
        name: String,
        variety: Option<String>,
        bed_uuid: Uuid,
        quantity: i32,
    },
    AdvancePlantStatus(Uuid),
    DeletePlant(Uuid),

    // Harvest operations
    RecordHarvest {
        plant_uuid: Uuid,
        quantity: f64,
        unit: String,
    },

    // Data loading
    DataLoaded {
        beds: Vec<BedDisplay>,
        plants: Vec<PlantDisplay>,
    },
    StatsLoaded {
        stats: GardenStats,
        recent_harvests: Vec<HarvestDisplay>,
    },
    RefreshData,

    // Operation outcomes
    ShowToast {
        message: String,
        severity: Severity,
    },
    ReportError(ApiError),

    // UI operations
    ShowHelp(bool),
    ShowDialog(DialogType),

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    BedCreation,
    PlantCreation {
        bed_uuid: Uuid,
    },
    HarvestEntry {
        plant_uuid: Uuid,
        plant_name: String,
    },
    DeleteConfirmation {
        item_type: String,
        item_name: String,
        item_uuid: Uuid,
    },
}
