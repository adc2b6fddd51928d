//! Plant repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::entities::plant;

/// Repository for plant-related database operations.
pub struct PlantRepository;

impl PlantRepository {
    /// Get all plants ordered by planting date, newest first.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<plant::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        plant::Entity::find()
            .order_by_desc(plant::Column::PlantingDate)
            .all(conn)
            .await
    }

    /// Get a single plant by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<plant::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        plant::Entity::find()
            .filter(plant::Column::Uuid.eq(*uuid))
            .one(conn)
            .await
    }

    /// Get all plants growing in a specific bed.
    pub async fn get_for_bed<C>(conn: &C, bed_uuid: &Uuid) -> Result<Vec<plant::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        plant::Entity::find()
            .filter(plant::Column::BedUuid.eq(*bed_uuid))
            .order_by_desc(plant::Column::PlantingDate)
            .all(conn)
            .await
    }

    /// Get all plants for a season.
    pub async fn get_by_season<C>(conn: &C, season: &str) -> Result<Vec<plant::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        plant::Entity::find()
            .filter(plant::Column::Season.eq(season))
            .order_by_desc(plant::Column::PlantingDate)
            .all(conn)
            .await
    }

    /// Distinct years that have plants, ascending.
    pub async fn get_years<C>(conn: &C) -> Result<Vec<i32>, DbErr>
    where
        C: ConnectionTrait,
    {
        plant::Entity::find()
            .select_only()
            .column(plant::Column::Year)
            .distinct()
            .order_by_asc(plant::Column::Year)
            .into_tuple::<i32>()
            .all(conn)
            .await
    }

    /// Insert a new plant and return its model.
    pub async fn insert<C>(conn: &C, model: plant::ActiveModel) -> Result<plant::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        model.insert(conn).await
    }

    /// Overwrite the stored lifecycle status of a plant.
    pub async fn set_status<C>(conn: &C, uuid: &Uuid, status: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active: plant::ActiveModel = match Self::get_by_id(conn, uuid).await? {
            Some(model) => model.into(),
            None => return Err(DbErr::RecordNotFound(format!("plant {}", uuid))),
        };
        active.status = ActiveValue::Set(status.to_string());
        plant::Entity::update(active).exec(conn).await?;
        Ok(())
    }

    /// Delete a plant; its harvests and images cascade.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = plant::Entity::delete_many()
            .filter(plant::Column::Uuid.eq(*uuid))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
