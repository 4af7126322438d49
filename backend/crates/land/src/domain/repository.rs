//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Land, NewLand};
use crate::domain::value_objects::ImageUpload;
use crate::error::LandResult;

/// Land record repository trait
#[trait_variant::make(LandRepository: Send)]
pub trait LocalLandRepository {
    /// Insert a validated record and return it with its assigned id
    async fn insert(&self, new_land: &NewLand) -> LandResult<Land>;

    /// All records in insertion (id) order
    async fn list_all(&self) -> LandResult<Vec<Land>>;

    /// Number of stored records
    async fn count(&self) -> LandResult<i64>;
}

/// Media store trait - durable storage for uploaded image files
#[trait_variant::make(MediaStore: Send)]
pub trait LocalMediaStore {
    /// Write an upload and return the stored relative path
    async fn save(&self, upload: &ImageUpload) -> LandResult<String>;

    /// Remove a stored file (used to release the blob when a later step fails)
    async fn remove(&self, stored_path: &str) -> LandResult<()>;
}
