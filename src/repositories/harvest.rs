//! Harvest repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::entities::harvest;

/// Repository for harvest-related database operations.
pub struct HarvestRepository;

impl HarvestRepository {
    /// Get all harvests recorded for a plant, newest first.
    pub async fn get_for_plant<C>(conn: &C, plant_uuid: &Uuid) -> Result<Vec<harvest::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        harvest::Entity::find()
            .filter(harvest::Column::PlantUuid.eq(*plant_uuid))
            .order_by_desc(harvest::Column::HarvestDate)
            .all(conn)
            .await
    }

    /// Get the most recent harvests across all plants.
    pub async fn get_recent<C>(conn: &C, limit: u64) -> Result<Vec<harvest::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        harvest::Entity::find()
            .order_by_desc(harvest::Column::HarvestDate)
            .limit(limit)
            .all(conn)
            .await
    }

    /// Insert a new harvest record and return its model.
    pub async fn insert<C>(
        conn: &C,
        plant_uuid: Uuid,
        harvest_date: String,
        quantity: f64,
        unit: String,
        notes: Option<String>,
    ) -> Result<harvest::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = harvest::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            plant_uuid: ActiveValue::Set(plant_uuid),
            harvest_date: ActiveValue::Set(harvest_date),
            quantity: ActiveValue::Set(quantity),
            unit: ActiveValue::Set(unit),
            notes: ActiveValue::Set(notes),
        };
        model.insert(conn).await
    }
}
