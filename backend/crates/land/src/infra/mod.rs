//! Infrastructure Layer
//!
//! PostgreSQL repository and filesystem media store implementations.

pub mod media;
pub mod postgres;
