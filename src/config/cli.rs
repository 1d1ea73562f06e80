use crate::config::toml_config::FileConfig;
use crate::config::{default_photos_dir, OrganizerConfig};
use crate::core::locator::MatchMode;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "memory-organizer")]
#[command(about = "Rename and sort exported memories into per-year folders")]
pub struct CliArgs {
    /// Path to the memories.json manifest
    #[arg(long, help_heading = "Paths")]
    pub manifest: Option<PathBuf>,

    /// Output directory, must not exist yet
    #[arg(short, long, help_heading = "Paths")]
    pub output: Option<PathBuf>,

    /// Directory searched for images (default: Photos next to the manifest)
    #[arg(long, help_heading = "Paths")]
    pub photos_dir: Option<PathBuf>,

    /// Only accept files whose name equals the referenced filename
    #[arg(long)]
    pub exact_match: bool,

    /// Optional TOML configuration file; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

/// Everything `main` needs after flags and the config file are merged.
#[derive(Debug, Clone)]
pub struct ResolvedCli {
    pub organizer: OrganizerConfig,
    pub verbose: bool,
    pub log_json: bool,
}

impl CliArgs {
    pub fn resolve(&self) -> Result<ResolvedCli> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(self.merge(file))
    }

    /// Applies the flags on top of the file's config.
    ///
    /// A `--manifest` flag moves the default photos directory with it unless
    /// a photos path was given explicitly.
    fn merge(&self, file: FileConfig) -> ResolvedCli {
        let mut organizer = file.to_organizer_config();

        if let Some(manifest) = &self.manifest {
            if file.paths.photos.is_none() {
                organizer.photos_dir = default_photos_dir(manifest);
            }
            organizer.manifest_path = manifest.clone();
        }
        if let Some(output) = &self.output {
            organizer.output_root = output.clone();
        }
        if let Some(photos_dir) = &self.photos_dir {
            organizer.photos_dir = photos_dir.clone();
        }
        if self.exact_match {
            organizer.match_mode = MatchMode::Exact;
        }

        ResolvedCli {
            organizer,
            verbose: self.verbose || file.logging.verbose.unwrap_or(false),
            log_json: self.log_json || file.logging.json.unwrap_or(false),
        }
    }
}
