//! Land Router

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::LandConfig;
use crate::domain::repository::{LandRepository, MediaStore};
use crate::infra::media::FsMediaStore;
use crate::infra::postgres::PgLandRepository;
use crate::presentation::handlers::{self, LandAppState};

/// Create the Land router with the PostgreSQL repository and filesystem media store
pub fn land_router(repo: PgLandRepository, media: FsMediaStore, config: LandConfig) -> Router {
    land_router_generic(repo, media, config)
}

/// Create a generic Land router for any repository/media implementations
pub fn land_router_generic<R, M>(repo: R, media: M, config: LandConfig) -> Router
where
    R: LandRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let body_limit = config.body_limit_bytes();

    let state = LandAppState {
        repo: Arc::new(repo),
        media: Arc::new(media),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_lands::<R, M>))
        .route("/create", post(handlers::create_land::<R, M>))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
