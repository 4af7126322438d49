//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::{Land, LandId, NewLand};
use crate::domain::repository::LandRepository;
use crate::domain::value_objects::Price;
use crate::error::LandResult;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgLandRepository {
    pool: PgPool,
}

impl PgLandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LandRepository for PgLandRepository {
    async fn insert(&self, new_land: &NewLand) -> LandResult<Land> {
        let row = sqlx::query_as::<_, LandRow>(
            r#"
            INSERT INTO lands (
                name,
                location,
                area,
                price,
                image,
                available,
                land_category,
                tehsil_name,
                district_name,
                state
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING
                land_id,
                name,
                location,
                area,
                price,
                image,
                available,
                land_category,
                tehsil_name,
                district_name,
                state,
                created_at
            "#,
        )
        .bind(&new_land.name)
        .bind(&new_land.location)
        .bind(new_land.area)
        .bind(new_land.price.as_decimal())
        .bind(new_land.image.as_deref())
        .bind(new_land.available)
        .bind(&new_land.land_category)
        .bind(&new_land.tehsil_name)
        .bind(&new_land.district_name)
        .bind(&new_land.state)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(land_id = row.land_id, name = %row.name, "Land row inserted");

        Ok(row.into_land())
    }

    async fn list_all(&self) -> LandResult<Vec<Land>> {
        let rows = sqlx::query_as::<_, LandRow>(
            r#"
            SELECT
                land_id,
                name,
                location,
                area,
                price,
                image,
                available,
                land_category,
                tehsil_name,
                district_name,
                state,
                created_at
            FROM lands
            ORDER BY land_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LandRow::into_land).collect())
    }

    async fn count(&self) -> LandResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lands")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct LandRow {
    land_id: i64,
    name: String,
    location: String,
    area: f64,
    price: Decimal,
    image: Option<String>,
    available: bool,
    land_category: String,
    tehsil_name: String,
    district_name: String,
    state: String,
    created_at: DateTime<Utc>,
}

impl LandRow {
    fn into_land(self) -> Land {
        Land {
            id: LandId::from_value(self.land_id),
            name: self.name,
            location: self.location,
            area: self.area,
            price: Price::from_stored(self.price),
            image: self.image,
            available: self.available,
            land_category: self.land_category,
            tehsil_name: self.tehsil_name,
            district_name: self.district_name,
            state: self.state,
            created_at: self.created_at,
        }
    }
}
