//! Domain Entities
//!
//! Core business entities for the Land domain.

use chrono::{DateTime, Utc};
use kernel::id::{Id, markers};

use crate::domain::value_objects::Price;

/// Typed ID for Land records (database-assigned sequence value)
pub type LandId = Id<markers::Land>;

/// Land entity - a stored parcel record with its assigned identity
#[derive(Debug, Clone)]
pub struct Land {
    pub id: LandId,
    pub name: String,
    pub location: String,
    /// Area in square meters
    pub area: f64,
    pub price: Price,
    /// Relative path under the media root, e.g. `land_images/<file>`
    pub image: Option<String>,
    pub available: bool,
    pub land_category: String,
    pub tehsil_name: String,
    pub district_name: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}

/// NewLand entity - a validated record ready for insertion
///
/// Produced only by `LandForm::validate`, so every non-image field holds a
/// value that satisfies its constraint.
#[derive(Debug, Clone)]
pub struct NewLand {
    pub name: String,
    pub location: String,
    pub area: f64,
    pub price: Price,
    pub image: Option<String>,
    pub available: bool,
    pub land_category: String,
    pub tehsil_name: String,
    pub district_name: String,
    pub state: String,
}

impl NewLand {
    /// Attach the stored image path once the upload has been written
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}
