use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub name: String,
    pub variety: Option<String>,
    pub bed_uuid: Uuid,
    /// YYYY-MM-DD
    pub planting_date: String,
    pub status: String,
    pub season: String,
    pub year: i32,
    pub quantity: i32,
    /// Square units of bed space one plant occupies
    pub space_required: i32,
    pub expected_harvest_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bed::Entity",
        from = "Column::BedUuid",
        to = "super::bed::Column::Uuid",
        on_delete = "Cascade"
    )]
    Bed,
    #[sea_orm(has_many = "super::harvest::Entity")]
    Harvest,
    #[sea_orm(has_many = "super::plant_image::Entity")]
    PlantImage,
}

impl Related<super::bed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bed.def()
    }
}

impl Related<super::harvest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Harvest.def()
    }
}

impl Related<super::plant_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
