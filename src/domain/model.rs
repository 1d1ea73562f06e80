use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One element of the manifest's top-level array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntry {
    pub date: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub front_image: ImageRef,
    pub back_image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
}

impl MemoryEntry {
    /// Caption text, empty when the field is absent or null.
    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    pub fn image(&self, role: ImageRole) -> &ImageRef {
        match role {
            ImageRole::Front => &self.front_image,
            ImageRole::Back => &self.back_image,
        }
    }
}

impl ImageRef {
    /// Final `/`-separated segment of the reference path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Text after the last `.` of the file name, or the whole name when it has none.
    pub fn extension(&self) -> &str {
        let name = self.file_name();
        name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Front,
    Back,
}

impl ImageRole {
    pub const ALL: [ImageRole; 2] = [ImageRole::Front, ImageRole::Back];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageRole::Front => "front",
            ImageRole::Back => "back",
        }
    }
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `YYYY_MM_DD` prefix shared by every file written for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    pub fn image_file_name(&self, role: ImageRole, extension: &str) -> String {
        format!("{}_{}.{}", self.0, role, extension)
    }

    pub fn description_file_name(&self) -> String {
        format!("{}_description.txt", self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub date: String,
    pub missing: String,
}

#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    pub organized: usize,
    pub skipped: Vec<SkippedEntry>,
    pub written: Vec<PathBuf>,
}
