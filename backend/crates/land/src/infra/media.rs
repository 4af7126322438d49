//! Filesystem Media Store
//!
//! Writes uploaded images under the configured media root and hands back the
//! relative path that gets persisted on the record.

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::domain::repository::MediaStore;
use crate::domain::value_objects::ImageUpload;
use crate::error::{LandError, LandResult};

/// Longest sanitized client filename kept in the stored name
const FILENAME_MAX_LENGTH: usize = 120;

/// Filesystem-backed media store
#[derive(Clone)]
pub struct FsMediaStore {
    media_root: PathBuf,
    upload_dir: String,
}

impl FsMediaStore {
    pub fn new(media_root: PathBuf, upload_dir: impl Into<String>) -> Self {
        Self {
            media_root,
            upload_dir: upload_dir.into(),
        }
    }
}

impl MediaStore for FsMediaStore {
    async fn save(&self, upload: &ImageUpload) -> LandResult<String> {
        let dir = self.media_root.join(&self.upload_dir);
        tokio::fs::create_dir_all(&dir).await?;

        // Client filenames are untrusted; a UUID prefix also makes the
        // stored name unique without a collision probe.
        let stored_name = format!(
            "{}_{}",
            Uuid::new_v4().simple(),
            sanitize_filename(&upload.filename)
        );
        let path = dir.join(&stored_name);

        tokio::fs::write(&path, &upload.data).await?;

        tracing::info!(
            path = %path.display(),
            bytes = upload.data.len(),
            "Stored uploaded image"
        );

        Ok(format!("{}/{}", self.upload_dir, stored_name))
    }

    async fn remove(&self, stored_path: &str) -> LandResult<()> {
        // Only paths this store handed out are removable
        if !is_plain_relative(Path::new(stored_path)) {
            return Err(LandError::Internal(format!(
                "refusing to remove media path outside the root: {stored_path}"
            )));
        }

        let path = self.media_root.join(stored_path);
        tokio::fs::remove_file(&path).await?;

        tracing::info!(path = %path.display(), "Removed stored image");

        Ok(())
    }
}

/// Strip any directory part and reduce the name to a safe character set
fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let mut safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    safe.truncate(FILENAME_MAX_LENGTH);

    if safe.trim_matches(['.', '_']).is_empty() {
        "upload".to_string()
    } else {
        safe
    }
}

/// True when the path is relative and free of parent/root components
fn is_plain_relative(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_)))
}
