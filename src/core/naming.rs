use std::path::{Path, PathBuf};

/// Returns a path in `directory` that no existing file occupies.
///
/// `desired` is tried first, then `{stem}_1.{ext}`, `{stem}_2.{ext}`, ... with
/// the stem and extension split at the last `.`. The probe is not atomic with
/// whatever the caller creates afterwards; a single writer is assumed.
pub fn resolve(directory: &Path, desired: &str) -> PathBuf {
    let mut candidate = directory.join(desired);
    let (stem, extension) = match desired.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (desired, None),
    };

    let mut counter = 1;
    while candidate.exists() {
        let name = match extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        candidate = directory.join(name);
        counter += 1;
    }

    candidate
}
