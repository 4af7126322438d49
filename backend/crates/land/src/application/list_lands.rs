//! List Lands Use Case

use std::sync::Arc;

use crate::domain::entities::Land;
use crate::domain::repository::LandRepository;
use crate::error::LandResult;

/// List Lands Use Case
pub struct ListLandsUseCase<R>
where
    R: LandRepository,
{
    repo: Arc<R>,
}

impl<R> ListLandsUseCase<R>
where
    R: LandRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All stored records in insertion order
    pub async fn execute(&self) -> LandResult<Vec<Land>> {
        let lands = self.repo.list_all().await?;
        tracing::debug!(count = lands.len(), "Listed land records");
        Ok(lands)
    }
}
