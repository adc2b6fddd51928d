//! Repository layer for database operations.
//!
//! Repositories are thin, stateless query helpers over the SeaORM entities.
//! They accept any connection type so they work both on the pooled
//! connection and inside transactions.

pub mod bed;
pub mod harvest;
pub mod plant;
pub mod plant_image;

pub use bed::BedRepository;
pub use harvest::HarvestRepository;
pub use plant::PlantRepository;
pub use plant_image::PlantImageRepository;
