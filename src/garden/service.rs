//! Garden service: validated operations over local storage.
//!
//! All mutations go through this layer so lifecycle rules and referential
//! checks hold no matter which UI component triggered them.

use sea_orm::ActiveValue;
use std::sync::Arc;
use uuid::Uuid;

use super::{ApiError, BedDisplay, HarvestDisplay, PlantDisplay, PlantImageDisplay, PlantStatus, Season};
use crate::entities::plant;
use crate::repositories::{BedRepository, HarvestRepository, PlantImageRepository, PlantRepository};
use crate::storage::LocalStorage;
use crate::utils::datetime;

/// Arguments for creating a garden bed.
#[derive(Debug, Clone, Default)]
pub struct NewBed {
    pub name: String,
    pub dimensions: String,
    pub notes: Option<String>,
}

/// Arguments for adding a plant to a bed.
#[derive(Debug, Clone)]
pub struct NewPlant {
    pub name: String,
    pub variety: Option<String>,
    pub bed_uuid: Uuid,
    pub quantity: i32,
    pub space_required: i32,
    /// Defaults to today when not given
    pub planting_date: Option<String>,
    /// Defaults to the season implied by the current month
    pub season: Option<Season>,
    pub expected_harvest_date: Option<String>,
    pub notes: Option<String>,
}

/// Arguments for recording a harvest.
#[derive(Debug, Clone)]
pub struct NewHarvest {
    pub plant_uuid: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub notes: Option<String>,
}

/// Service that manages all garden data operations.
#[derive(Clone)]
pub struct GardenService {
    storage: Arc<LocalStorage>,
}

impl GardenService {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Create a new garden bed.
    pub async fn create_bed(&self, args: NewBed) -> Result<BedDisplay, ApiError> {
        if args.name.trim().is_empty() {
            return Err(ApiError::InvalidData("bed name cannot be empty".into()));
        }
        if args.dimensions.trim().is_empty() {
            return Err(ApiError::InvalidData("bed dimensions cannot be empty".into()));
        }

        let model = BedRepository::insert(
            &self.storage.conn,
            args.name.trim().to_string(),
            args.dimensions.trim().to_string(),
            args.notes,
        )
        .await?;

        log::info!("Created garden bed '{}' ({})", model.name, model.uuid);

        Ok(BedDisplay {
            uuid: model.uuid,
            name: model.name,
            dimensions: model.dimensions,
            notes: model.notes,
            plant_count: 0,
        })
    }

    /// All beds with their plant counts, for the sidebar.
    pub async fn get_beds(&self) -> Result<Vec<BedDisplay>, ApiError> {
        let models = BedRepository::get_all(&self.storage.conn).await?;

        let mut beds = Vec::with_capacity(models.len());
        for model in models {
            let plant_count = BedRepository::count_plants(&self.storage.conn, &model.uuid).await? as i64;
            beds.push(BedDisplay {
                uuid: model.uuid,
                name: model.name,
                dimensions: model.dimensions,
                notes: model.notes,
                plant_count,
            });
        }
        Ok(beds)
    }

    /// A single bed and the plants growing in it.
    pub async fn get_bed_with_plants(
        &self,
        bed_uuid: &Uuid,
    ) -> Result<(BedDisplay, Vec<PlantDisplay>), ApiError> {
        let model = BedRepository::get_by_id(&self.storage.conn, bed_uuid)
            .await?
            .ok_or_else(|| ApiError::NotFound("Garden bed".into()))?;

        let plants = self.get_plants_for_bed(bed_uuid).await?;

        let bed = BedDisplay {
            uuid: model.uuid,
            name: model.name,
            dimensions: model.dimensions,
            notes: model.notes,
            plant_count: plants.len() as i64,
        };
        Ok((bed, plants))
    }

    /// Update the notes on a bed.
    pub async fn update_bed_notes(&self, bed_uuid: &Uuid, notes: Option<String>) -> Result<(), ApiError> {
        if BedRepository::get_by_id(&self.storage.conn, bed_uuid).await?.is_none() {
            return Err(ApiError::NotFound("Garden bed".into()));
        }
        BedRepository::update_notes(&self.storage.conn, bed_uuid, notes).await?;
        Ok(())
    }

    /// Delete a bed and everything growing in it.
    pub async fn delete_bed(&self, bed_uuid: &Uuid) -> Result<(), ApiError> {
        let deleted = BedRepository::delete(&self.storage.conn, bed_uuid).await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Garden bed".into()));
        }
        log::info!("Deleted garden bed {}", bed_uuid);
        Ok(())
    }

    /// Add a plant to an existing bed.
    pub async fn create_plant(&self, args: NewPlant) -> Result<PlantDisplay, ApiError> {
        if args.name.trim().is_empty() {
            return Err(ApiError::InvalidData("plant name cannot be empty".into()));
        }
        if args.quantity <= 0 {
            return Err(ApiError::InvalidData("plant quantity must be positive".into()));
        }

        // The target bed must exist before a plant can reference it
        if BedRepository::get_by_id(&self.storage.conn, &args.bed_uuid).await?.is_none() {
            return Err(ApiError::NotFound("Garden bed".into()));
        }

        let planting_date = args.planting_date.unwrap_or_else(datetime::format_today);
        let year = datetime::parse_date(&planting_date)
            .map(|d| {
                use chrono::Datelike;
                d.year()
            })
            .unwrap_or_else(|_| datetime::current_year());
        let season = args.season.unwrap_or_else(Season::current);

        let model = PlantRepository::insert(
            &self.storage.conn,
            plant::ActiveModel {
                uuid: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(args.name.trim().to_string()),
                variety: ActiveValue::Set(args.variety),
                bed_uuid: ActiveValue::Set(args.bed_uuid),
                planting_date: ActiveValue::Set(planting_date),
                status: ActiveValue::Set(PlantStatus::Planted.as_str().to_string()),
                season: ActiveValue::Set(season.as_str().to_string()),
                year: ActiveValue::Set(year),
                quantity: ActiveValue::Set(args.quantity),
                space_required: ActiveValue::Set(args.space_required.max(1)),
                expected_harvest_date: ActiveValue::Set(args.expected_harvest_date),
                notes: ActiveValue::Set(args.notes),
            },
        )
        .await?;

        log::info!("Added plant '{}' to bed {}", model.name, model.bed_uuid);
        PlantDisplay::from_model(model)
    }

    /// All plants, newest planting first.
    pub async fn get_plants(&self) -> Result<Vec<PlantDisplay>, ApiError> {
        let models = PlantRepository::get_all(&self.storage.conn).await?;
        models.into_iter().map(PlantDisplay::from_model).collect()
    }

    /// Plants growing in one bed.
    pub async fn get_plants_for_bed(&self, bed_uuid: &Uuid) -> Result<Vec<PlantDisplay>, ApiError> {
        let models = PlantRepository::get_for_bed(&self.storage.conn, bed_uuid).await?;
        models.into_iter().map(PlantDisplay::from_model).collect()
    }

    /// Plants for one growing season.
    pub async fn get_plants_by_season(&self, season: Season) -> Result<Vec<PlantDisplay>, ApiError> {
        let models = PlantRepository::get_by_season(&self.storage.conn, season.as_str()).await?;
        models.into_iter().map(PlantDisplay::from_model).collect()
    }

    /// Move a plant to an explicit lifecycle status, validating the transition.
    pub async fn set_plant_status(
        &self,
        plant_uuid: &Uuid,
        new_status: PlantStatus,
    ) -> Result<PlantDisplay, ApiError> {
        let model = PlantRepository::get_by_id(&self.storage.conn, plant_uuid)
            .await?
            .ok_or_else(|| ApiError::NotFound("Plant".into()))?;

        let current = PlantStatus::parse(&model.status)?;
        if !current.can_transition_to(new_status) {
            let allowed = current
                .next()
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| "nothing".into());
            return Err(ApiError::InvalidData(format!(
                "Invalid status transition. From {}, can only transition to: {}",
                current, allowed
            )));
        }

        PlantRepository::set_status(&self.storage.conn, plant_uuid, new_status.as_str()).await?;
        log::info!("Plant {} moved {} -> {}", plant_uuid, current, new_status);

        let updated = PlantRepository::get_by_id(&self.storage.conn, plant_uuid)
            .await?
            .ok_or_else(|| ApiError::NotFound("Plant".into()))?;
        PlantDisplay::from_model(updated)
    }

    /// Advance a plant to its next lifecycle stage.
    pub async fn advance_plant_status(&self, plant_uuid: &Uuid) -> Result<PlantDisplay, ApiError> {
        let model = PlantRepository::get_by_id(&self.storage.conn, plant_uuid)
            .await?
            .ok_or_else(|| ApiError::NotFound("Plant".into()))?;

        let current = PlantStatus::parse(&model.status)?;
        let next = current
            .next()
            .ok_or_else(|| ApiError::InvalidData("plant is already finished".into()))?;

        self.set_plant_status(plant_uuid, next).await
    }

    /// Remove a plant and its harvest history.
    pub async fn delete_plant(&self, plant_uuid: &Uuid) -> Result<(), ApiError> {
        let deleted = PlantRepository::delete(&self.storage.conn, plant_uuid).await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Plant".into()));
        }
        log::info!("Removed plant {}", plant_uuid);
        Ok(())
    }

    /// Record a harvest against a plant.
    pub async fn record_harvest(&self, args: NewHarvest) -> Result<HarvestDisplay, ApiError> {
        if args.quantity <= 0.0 {
            return Err(ApiError::InvalidData("harvest quantity must be positive".into()));
        }
        if args.unit.trim().is_empty() {
            return Err(ApiError::InvalidData("harvest unit cannot be empty".into()));
        }
        if PlantRepository::get_by_id(&self.storage.conn, &args.plant_uuid).await?.is_none() {
            return Err(ApiError::NotFound("Plant".into()));
        }

        let model = HarvestRepository::insert(
            &self.storage.conn,
            args.plant_uuid,
            datetime::format_today(),
            args.quantity,
            args.unit.trim().to_string(),
            args.notes,
        )
        .await?;

        log::info!(
            "Recorded harvest of {} {} from plant {}",
            model.quantity,
            model.unit,
            model.plant_uuid
        );
        Ok(model.into())
    }

    /// Attach a photo record to a plant.
    pub async fn attach_plant_image(
        &self,
        plant_uuid: &Uuid,
        url: &str,
        description: Option<String>,
    ) -> Result<PlantImageDisplay, ApiError> {
        if url.trim().is_empty() {
            return Err(ApiError::InvalidData("image url cannot be empty".into()));
        }
        if PlantRepository::get_by_id(&self.storage.conn, plant_uuid).await?.is_none() {
            return Err(ApiError::NotFound("Plant".into()));
        }

        let model = PlantImageRepository::insert(
            &self.storage.conn,
            *plant_uuid,
            url.trim().to_string(),
            description,
            datetime::format_today(),
        )
        .await?;
        Ok(model.into())
    }

    /// Photos attached to a plant, newest first.
    pub async fn get_plant_images(&self, plant_uuid: &Uuid) -> Result<Vec<PlantImageDisplay>, ApiError> {
        let models = PlantImageRepository::get_for_plant(&self.storage.conn, plant_uuid).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// Harvest history for one plant, newest first.
    pub async fn get_harvests_for_plant(&self, plant_uuid: &Uuid) -> Result<Vec<HarvestDisplay>, ApiError> {
        let models = HarvestRepository::get_for_plant(&self.storage.conn, plant_uuid).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// The most recent harvests across the whole garden.
    pub async fn get_recent_harvests(&self, limit: u64) -> Result<Vec<HarvestDisplay>, ApiError> {
        let models = HarvestRepository::get_recent(&self.storage.conn, limit).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub(super) fn conn(&self) -> &sea_orm::DatabaseConnection {
        &self.storage.conn
    }
}
