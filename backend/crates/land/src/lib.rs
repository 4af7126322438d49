//! Land Records Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, validation, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database and media storage implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Data Model
//! - A single Land entity: created via POST /lands/create, read via GET /lands,
//!   never updated or deleted
//! - Validation inspects every field and reports the full per-field message
//!   map before anything is written
//! - Uploaded images are written under the media root; records store only the
//!   relative path, rendered as a URL on the way out

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LandConfig;
pub use error::{LandError, LandResult};
pub use infra::media::FsMediaStore;
pub use infra::postgres::PgLandRepository;
pub use presentation::router::{land_router, land_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
