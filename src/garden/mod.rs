//! Garden domain: typed errors, plant lifecycle, and display models.
//!
//! The types here are what the UI layer works with. Storage entities are
//! converted into `*Display` structs at the service boundary so components
//! never touch SeaORM models directly.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod service;
mod stats;

pub use service::{GardenService, NewBed, NewHarvest, NewPlant};
pub use stats::{BedStats, GardenStats};

/// Typed errors for garden operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidData(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Other(String),
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Plant lifecycle status.
///
/// Statuses advance strictly forward: planted, sprouted, flowering,
/// harvesting, finished. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantStatus {
    Planted,
    Sprouted,
    Flowering,
    Harvesting,
    Finished,
}

impl PlantStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [PlantStatus; 5] = [
        PlantStatus::Planted,
        PlantStatus::Sprouted,
        PlantStatus::Flowering,
        PlantStatus::Harvesting,
        PlantStatus::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Planted => "planted",
            PlantStatus::Sprouted => "sprouted",
            PlantStatus::Flowering => "flowering",
            PlantStatus::Harvesting => "harvesting",
            PlantStatus::Finished => "finished",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "planted" => Ok(PlantStatus::Planted),
            "sprouted" => Ok(PlantStatus::Sprouted),
            "flowering" => Ok(PlantStatus::Flowering),
            "harvesting" => Ok(PlantStatus::Harvesting),
            "finished" => Ok(PlantStatus::Finished),
            other => Err(ApiError::InvalidData(format!("unknown plant status '{}'", other))),
        }
    }

    /// The next lifecycle stage, or `None` when the plant is finished.
    pub fn next(&self) -> Option<PlantStatus> {
        match self {
            PlantStatus::Planted => Some(PlantStatus::Sprouted),
            PlantStatus::Sprouted => Some(PlantStatus::Flowering),
            PlantStatus::Flowering => Some(PlantStatus::Harvesting),
            PlantStatus::Harvesting => Some(PlantStatus::Finished),
            PlantStatus::Finished => None,
        }
    }

    /// Whether a transition from `self` to `target` is legal.
    pub fn can_transition_to(&self, target: PlantStatus) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Growing season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Season implied by the current local month.
    pub fn current() -> Self {
        use chrono::Datelike;
        match chrono::Local::now().month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            other => Err(ApiError::InvalidData(format!("unknown season '{}'", other))),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Garden bed as shown in the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct BedDisplay {
    pub uuid: Uuid,
    pub name: String,
    pub dimensions: String,
    pub notes: Option<String>,
    pub plant_count: i64,
}

/// Plant as shown in the plant list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantDisplay {
    pub uuid: Uuid,
    pub name: String,
    pub variety: Option<String>,
    pub bed_uuid: Uuid,
    pub planting_date: String,
    pub status: PlantStatus,
    pub season: Season,
    pub year: i32,
    pub quantity: i32,
    pub space_required: i32,
    pub expected_harvest_date: Option<String>,
    pub notes: Option<String>,
}

impl PlantDisplay {
    /// Convert a storage model, rejecting rows with unknown status/season.
    pub fn from_model(model: crate::entities::plant::Model) -> Result<Self, ApiError> {
        Ok(Self {
            uuid: model.uuid,
            name: model.name,
            variety: model.variety,
            bed_uuid: model.bed_uuid,
            planting_date: model.planting_date,
            status: PlantStatus::parse(&model.status)?,
            season: Season::parse(&model.season)?,
            year: model.year,
            quantity: model.quantity,
            space_required: model.space_required,
            expected_harvest_date: model.expected_harvest_date,
            notes: model.notes,
        })
    }
}

/// Photo attached to a plant.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantImageDisplay {
    pub uuid: Uuid,
    pub plant_uuid: Uuid,
    pub url: String,
    pub description: Option<String>,
    pub taken_date: String,
}

impl From<crate::entities::plant_image::Model> for PlantImageDisplay {
    fn from(model: crate::entities::plant_image::Model) -> Self {
        Self {
            uuid: model.uuid,
            plant_uuid: model.plant_uuid,
            url: model.url,
            description: model.description,
            taken_date: model.taken_date,
        }
    }
}

/// Harvest record as shown in the harvest log.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestDisplay {
    pub uuid: Uuid,
    pub plant_uuid: Uuid,
    pub harvest_date: String,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
}

impl From<crate::entities::harvest::Model> for HarvestDisplay {
    fn from(model: crate::entities::harvest::Model) -> Self {
        Self {
            uuid: model.uuid,
            plant_uuid: model.plant_uuid,
            harvest_date: model.harvest_date,
            quantity: model.quantity,
            unit: model.unit,
            notes: model.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lifecycle_is_strictly_forward() {
        assert!(PlantStatus::Planted.can_transition_to(PlantStatus::Sprouted));
        assert!(!PlantStatus::Planted.can_transition_to(PlantStatus::Flowering));
        assert!(!PlantStatus::Sprouted.can_transition_to(PlantStatus::Planted));
        assert_eq!(PlantStatus::Finished.next(), None);
    }

    #[test]
    fn status_round_trips_through_storage_text() {
        for status in PlantStatus::ALL {
            assert_eq!(PlantStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(PlantStatus::parse("composted").is_err());
    }

    #[test]
    fn season_round_trips_through_storage_text() {
        for season in Season::ALL {
            assert_eq!(Season::parse(season.as_str()).unwrap(), season);
        }
        assert!(Season::parse("monsoon").is_err());
    }
}
