//! API DTOs (Data Transfer Objects)

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::config::LandConfig;
use crate::domain::entities::{Land, LandId};

/// A Land record as rendered on the wire
///
/// Element of the GET /lands response and body of a successful
/// POST /lands/create. Field names are the snake_case wire contract;
/// `price` serializes as a decimal string, `image` as a resolved URL
/// or null.
#[derive(Debug, Clone, Serialize)]
pub struct LandResponse {
    pub id: LandId,
    pub name: String,
    pub location: String,
    pub area: f64,
    pub price: Decimal,
    pub image: Option<String>,
    pub available: bool,
    pub land_category: String,
    pub tehsil_name: String,
    pub district_name: String,
    pub state: String,
}

impl LandResponse {
    /// Render a stored record, resolving the image path against the media URL
    pub fn from_land(land: &Land, config: &LandConfig) -> Self {
        Self {
            id: land.id,
            name: land.name.clone(),
            location: land.location.clone(),
            area: land.area,
            price: land.price.as_decimal(),
            image: land.image.as_deref().map(|path| config.image_url(path)),
            available: land.available,
            land_category: land.land_category.clone(),
            tehsil_name: land.tehsil_name.clone(),
            district_name: land.district_name.clone(),
            state: land.state.clone(),
        }
    }
}
