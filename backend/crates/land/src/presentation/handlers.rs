//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::config::LandConfig;
use crate::application::create_land::{CreateLandInput, CreateLandUseCase};
use crate::application::list_lands::ListLandsUseCase;
use crate::domain::repository::{LandRepository, MediaStore};
use crate::domain::value_objects::ImageUpload;
use crate::error::LandResult;
use crate::presentation::dto::LandResponse;

/// Shared state for Land handlers
#[derive(Clone)]
pub struct LandAppState<R, M>
where
    R: LandRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub media: Arc<M>,
    pub config: Arc<LandConfig>,
}

/// GET /lands
pub async fn list_lands<R, M>(
    State(state): State<LandAppState<R, M>>,
) -> LandResult<Json<Vec<LandResponse>>>
where
    R: LandRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let use_case = ListLandsUseCase::new(state.repo.clone());

    let lands = use_case.execute().await?;

    let body = lands
        .iter()
        .map(|land| LandResponse::from_land(land, &state.config))
        .collect();

    Ok(Json(body))
}

/// POST /lands/create
pub async fn create_land<R, M>(
    State(state): State<LandAppState<R, M>>,
    multipart: Multipart,
) -> LandResult<impl IntoResponse>
where
    R: LandRepository + Clone + Send + Sync + 'static,
    M: MediaStore + Clone + Send + Sync + 'static,
{
    let input = read_submission(multipart).await?;

    let use_case = CreateLandUseCase::new(
        state.repo.clone(),
        state.media.clone(),
        state.config.clone(),
    );

    let land = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(LandResponse::from_land(&land, &state.config)),
    ))
}

/// Decode the multipart body into raw field values plus the optional image
async fn read_submission(mut multipart: Multipart) -> LandResult<CreateLandInput> {
    let mut input = CreateLandInput::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "image" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;

            // A file input left empty submits a nameless, zero-byte part
            if filename.is_empty() && data.is_empty() {
                continue;
            }

            let filename = if filename.is_empty() {
                "upload".to_string()
            } else {
                filename
            };
            input.image = Some(ImageUpload::new(filename, data.to_vec()));
        } else if !input.form.set(&name, field.text().await?) {
            tracing::debug!(field = %name, "Ignoring unknown form field");
        }
    }

    Ok(input)
}
