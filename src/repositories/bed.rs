//! Garden bed repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::{bed, plant};

/// Repository for bed-related database operations.
pub struct BedRepository;

impl BedRepository {
    /// Get all beds ordered by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<bed::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        bed::Entity::find().order_by_asc(bed::Column::Name).all(conn).await
    }

    /// Get a single bed by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<bed::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        bed::Entity::find().filter(bed::Column::Uuid.eq(*uuid)).one(conn).await
    }

    /// Number of plants currently recorded in a bed.
    pub async fn count_plants<C>(conn: &C, uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        plant::Entity::find()
            .filter(plant::Column::BedUuid.eq(*uuid))
            .count(conn)
            .await
    }

    /// Insert a new bed and return its model.
    pub async fn insert<C>(
        conn: &C,
        name: String,
        dimensions: String,
        notes: Option<String>,
    ) -> Result<bed::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = bed::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name),
            dimensions: ActiveValue::Set(dimensions),
            notes: ActiveValue::Set(notes),
        };
        model.insert(conn).await
    }

    /// Update the free-form notes of a bed.
    pub async fn update_notes<C>(conn: &C, uuid: &Uuid, notes: Option<String>) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active: bed::ActiveModel = match Self::get_by_id(conn, uuid).await? {
            Some(model) => model.into(),
            None => return Err(DbErr::RecordNotFound(format!("bed {}", uuid))),
        };
        active.notes = ActiveValue::Set(notes);
        bed::Entity::update(active).exec(conn).await?;
        Ok(())
    }

    /// Delete a bed; plants in it cascade.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = bed::Entity::delete_many()
            .filter(bed::Column::Uuid.eq(*uuid))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
