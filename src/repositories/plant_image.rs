//! Plant image repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::entities::plant_image;

/// Repository for plant photo records.
pub struct PlantImageRepository;

impl PlantImageRepository {
    /// Get all images attached to a plant, newest first.
    pub async fn get_for_plant<C>(
        conn: &C,
        plant_uuid: &Uuid,
    ) -> Result<Vec<plant_image::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        plant_image::Entity::find()
            .filter(plant_image::Column::PlantUuid.eq(*plant_uuid))
            .order_by_desc(plant_image::Column::TakenDate)
            .all(conn)
            .await
    }

    /// Insert a new image record and return its model.
    pub async fn insert<C>(
        conn: &C,
        plant_uuid: Uuid,
        url: String,
        description: Option<String>,
        taken_date: String,
    ) -> Result<plant_image::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = plant_image::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            plant_uuid: ActiveValue::Set(plant_uuid),
            url: ActiveValue::Set(url),
            description: ActiveValue::Set(description),
            taken_date: ActiveValue::Set(taken_date),
        };
        model.insert(conn).await
    }
}
