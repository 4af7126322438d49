//! Create Land Use Case

use std::sync::Arc;

use crate::application::config::LandConfig;
use crate::domain::entities::Land;
use crate::domain::repository::{LandRepository, MediaStore};
use crate::domain::validation::{FieldErrors, LandForm};
use crate::domain::value_objects::ImageUpload;
use crate::error::{LandError, LandResult};

/// Input DTO for create land
#[derive(Debug, Default)]
pub struct CreateLandInput {
    /// Raw text fields as decoded from the wire
    pub form: LandForm,
    /// Optional image file part
    pub image: Option<ImageUpload>,
}

/// Create Land Use Case
pub struct CreateLandUseCase<R, M>
where
    R: LandRepository,
    M: MediaStore,
{
    repo: Arc<R>,
    media: Arc<M>,
    config: Arc<LandConfig>,
}

impl<R, M> CreateLandUseCase<R, M>
where
    R: LandRepository,
    M: MediaStore,
{
    pub fn new(repo: Arc<R>, media: Arc<M>, config: Arc<LandConfig>) -> Self {
        Self {
            repo,
            media,
            config,
        }
    }

    /// Validate the submission, store the image, insert the record.
    ///
    /// Nothing is written unless every field passes; if the insert fails
    /// after the image was written, the blob is removed again.
    pub async fn execute(&self, input: CreateLandInput) -> LandResult<Land> {
        let CreateLandInput { form, image } = input;

        let image_problems = image
            .as_ref()
            .map(|upload| upload.problems(self.config.max_image_bytes))
            .unwrap_or_default();

        let new_land = match form.validate() {
            Ok(new_land) if image_problems.is_empty() => new_land,
            Ok(_) => {
                let mut errors = FieldErrors::new();
                for message in image_problems {
                    errors.push("image", message);
                }
                return Err(LandError::Validation(errors));
            }
            Err(mut errors) => {
                for message in image_problems {
                    errors.push("image", message);
                }
                return Err(LandError::Validation(errors));
            }
        };

        let stored_path = match &image {
            Some(upload) => Some(self.media.save(upload).await?),
            None => None,
        };

        let new_land = new_land.with_image(stored_path.clone());

        match self.repo.insert(&new_land).await {
            Ok(land) => {
                tracing::info!(land_id = %land.id, name = %land.name, "Land record created");
                Ok(land)
            }
            Err(err) => {
                // Release the blob; the record it belonged to never materialized
                if let Some(path) = stored_path.as_deref() {
                    if let Err(cleanup_err) = self.media.remove(path).await {
                        tracing::warn!(
                            error = %cleanup_err,
                            path = %path,
                            "Failed to remove orphaned image"
                        );
                    }
                }
                Err(err)
            }
        }
    }
}
