//! Application Configuration
//!
//! Configuration for the Land application layer.

use std::path::PathBuf;

/// Land application configuration
#[derive(Debug, Clone)]
pub struct LandConfig {
    /// Filesystem root under which uploads are written
    pub media_root: PathBuf,
    /// URL prefix where the media root is served
    pub media_url: String,
    /// Subdirectory of the media root holding land images
    pub upload_dir: String,
    /// Upper bound on an uploaded image file
    pub max_image_bytes: usize,
}

impl Default for LandConfig {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("media"),
            media_url: "/media".to_string(),
            upload_dir: "land_images".to_string(),
            max_image_bytes: 5 * 1024 * 1024,
        }
    }
}

impl LandConfig {
    /// Directory uploads land in: `<media_root>/<upload_dir>`
    pub fn upload_root(&self) -> PathBuf {
        self.media_root.join(&self.upload_dir)
    }

    /// Public URL for a stored relative path
    pub fn image_url(&self, stored_path: &str) -> String {
        format!("{}/{}", self.media_url.trim_end_matches('/'), stored_path)
    }

    /// Request body limit: the image cap plus slack for the text fields
    pub fn body_limit_bytes(&self) -> usize {
        self.max_image_bytes + 64 * 1024
    }
}
