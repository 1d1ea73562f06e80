#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::locator::MatchMode;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST_PATH: &str = "BeReal_data/memories.json";
pub const DEFAULT_OUTPUT_ROOT: &str = "photos";
pub const PHOTOS_DIR_NAME: &str = "Photos";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizerConfig {
    pub manifest_path: PathBuf,
    pub output_root: PathBuf,
    pub photos_dir: PathBuf,
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl OrganizerConfig {
    /// Config for a manifest whose images live in the `Photos` directory beside it.
    pub fn new(manifest_path: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        let manifest_path = manifest_path.into();
        let photos_dir = default_photos_dir(&manifest_path);
        Self {
            manifest_path,
            output_root: output_root.into(),
            photos_dir,
            match_mode: MatchMode::default(),
        }
    }

    pub fn with_photos_dir(mut self, photos_dir: impl Into<PathBuf>) -> Self {
        self.photos_dir = photos_dir.into();
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_ROOT)
    }
}

pub fn default_photos_dir(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(PHOTOS_DIR_NAME)
}

impl ConfigProvider for OrganizerConfig {
    fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    fn output_root(&self) -> &Path {
        &self.output_root
    }

    fn photos_dir(&self) -> &Path {
        &self.photos_dir
    }

    fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
}

impl Validate for OrganizerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("manifest_path", &self.manifest_path)?;
        validate_path("output_root", &self.output_root)?;
        validate_path("photos_dir", &self.photos_dir)?;
        Ok(())
    }
}
