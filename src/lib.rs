pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::OrganizerConfig;
pub use crate::core::{locator::MatchMode, organizer::Organizer};
pub use domain::model::{MemoryEntry, OrganizeReport, SkippedEntry};
pub use utils::error::{OrganizeError, Result};
