//! SeaORM entity models for the local garden database.

pub mod bed;
pub mod harvest;
pub mod plant;
pub mod plant_image;
