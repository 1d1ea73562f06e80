use crate::core::{locator, manifest, naming};
use crate::domain::model::{DateKey, ImageRole, MemoryEntry, OrganizeReport, SkippedEntry};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{OrganizeError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Strict manifest timestamp layout, e.g. `2023-05-01T12:00:00.000Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%fZ";

/// Shape accepted before parsing: 4-digit year, 1 to 6 fraction digits, no padding.
const TIMESTAMP_PATTERN: &str = r"^\d{4}-\d{1,2}-\d{1,2}T\d{1,2}:\d{1,2}:\d{1,2}\.\d{1,6}Z$";

/// Parses an entry timestamp and returns its `YYYY_MM_DD` key.
pub fn date_key(timestamp: &str) -> Result<DateKey> {
    let invalid = |reason: String| OrganizeError::TimestampError {
        value: timestamp.to_string(),
        reason,
    };

    let shape = Regex::new(TIMESTAMP_PATTERN).map_err(|e| invalid(e.to_string()))?;
    if !shape.is_match(timestamp) {
        return Err(invalid(format!("expected layout {}", TIMESTAMP_FORMAT)));
    }

    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;
    Ok(DateKey::new(parsed.format("%Y_%m_%d").to_string()))
}

enum EntryOutcome {
    Organized(Vec<PathBuf>),
    Skipped(String),
}

pub struct Organizer<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Organizer<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs the whole batch.
    ///
    /// Fails before touching the filesystem when the output root already
    /// exists. Entries whose images cannot be found are skipped and reported;
    /// any other failure aborts the run, leaving whatever was already copied.
    pub fn run(&self) -> Result<OrganizeReport> {
        let output_root = self.config.output_root();
        if output_root.exists() {
            return Err(OrganizeError::OutputExistsError {
                path: output_root.to_path_buf(),
            });
        }

        let entries = manifest::read_manifest(self.config.manifest_path())?;
        tracing::info!(
            "Loaded {} memories from {}",
            entries.len(),
            self.config.manifest_path().display()
        );

        fs::create_dir_all(output_root)?;

        let mut report = OrganizeReport::default();
        for (index, entry) in entries.iter().enumerate() {
            match self.organize_entry(entry)? {
                EntryOutcome::Organized(written) => {
                    report.organized += 1;
                    report.written.extend(written);
                }
                EntryOutcome::Skipped(missing) => {
                    tracing::warn!(
                        "File {} not found. Skipping the memory from {}.",
                        missing,
                        entry.date
                    );
                    report.skipped.push(SkippedEntry {
                        index,
                        date: entry.date.clone(),
                        missing,
                    });
                }
            }
        }

        tracing::debug!(
            "Organized {} memories, skipped {}",
            report.organized,
            report.skipped.len()
        );
        Ok(report)
    }

    fn organize_entry(&self, entry: &MemoryEntry) -> Result<EntryOutcome> {
        let key = date_key(&entry.date)?;

        let mut sources = Vec::with_capacity(ImageRole::ALL.len());
        for role in ImageRole::ALL {
            let image = entry.image(role);
            let fragment = image.file_name();
            match locator::locate(fragment, self.config.photos_dir(), self.config.match_mode()) {
                Some(found) => sources.push((role, found, image.extension())),
                None => return Ok(EntryOutcome::Skipped(fragment.to_string())),
            }
        }

        let year_dir = self.config.output_root().join(key.year());
        if !year_dir.exists() {
            fs::create_dir_all(&year_dir)?;
        }

        let mut written = Vec::with_capacity(3);
        for (role, source, extension) in sources {
            let dest = naming::resolve(&year_dir, &key.image_file_name(role, extension));
            tracing::debug!("Copying {} -> {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
            written.push(dest);
        }

        let caption = entry.caption();
        if !caption.is_empty() {
            written.push(write_caption(&year_dir, &key, caption)?);
        }

        Ok(EntryOutcome::Organized(written))
    }
}

fn write_caption(year_dir: &Path, key: &DateKey, caption: &str) -> Result<PathBuf> {
    let dest = naming::resolve(year_dir, &key.description_file_name());
    let mut file = OpenOptions::new().write(true).create_new(true).open(&dest)?;
    file.write_all(caption.as_bytes())?;
    Ok(dest)
}
