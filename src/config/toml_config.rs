use crate::config::{default_photos_dir, OrganizerConfig, DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_ROOT};
use crate::core::locator::MatchMode;
use crate::utils::error::{OrganizeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional TOML configuration file. Every key may be omitted.
///
/// ```toml
/// [paths]
/// manifest = "${EXPORT_DIR}/memories.json"
/// output = "photos"
///
/// [matching]
/// mode = "exact"
///
/// [logging]
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub manifest: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub photos: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub mode: Option<MatchMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OrganizeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrganizeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXPORT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrganizeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds the organizer config, falling back to the export's default layout.
    ///
    /// Without an explicit `photos` path the search root follows the manifest.
    pub fn to_organizer_config(&self) -> OrganizerConfig {
        let manifest_path = self
            .paths
            .manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH));
        let photos_dir = self
            .paths
            .photos
            .clone()
            .unwrap_or_else(|| default_photos_dir(&manifest_path));

        OrganizerConfig {
            manifest_path,
            output_root: self
                .paths
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT)),
            photos_dir,
            match_mode: self.matching.mode.unwrap_or_default(),
        }
    }
}
