use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How a file's base name is compared with the fragment being searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Base name contains the fragment.
    #[default]
    Substring,
    /// Base name equals the fragment.
    Exact,
}

impl MatchMode {
    pub fn matches(&self, file_name: &str, fragment: &str) -> bool {
        match self {
            MatchMode::Substring => file_name.contains(fragment),
            MatchMode::Exact => file_name == fragment,
        }
    }
}

/// Recursively searches `search_root` for the first entry whose base name
/// matches `fragment`, returning its absolute path.
///
/// Entries are visited in file-name order within each directory, so the first
/// match is stable across runs. The root itself is never a candidate. Each call
/// walks the whole tree again; nothing is cached.
pub fn locate(fragment: &str, search_root: &Path, mode: MatchMode) -> Option<PathBuf> {
    let walker = WalkDir::new(search_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", search_root.display(), e);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();
        if mode.matches(&file_name, fragment) {
            let path = entry.path();
            return Some(std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }

    #[test]
    fn test_locate_finds_nested_file() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("post/2023/abc123.webp"));

        let found = locate("abc123.webp", dir.path(), MatchMode::Substring).unwrap();
        assert!(found.is_absolute());
        assert_eq!(found.file_name().unwrap(), "abc123.webp");
    }

    #[test]
    fn test_locate_substring_matches_longer_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("bereal/abc123-secondary.webp"));

        let found = locate("abc123", dir.path(), MatchMode::Substring).unwrap();
        assert!(found
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains("abc123"));
    }

    #[test]
    fn test_locate_exact_ignores_partial_names() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("bereal/abc123-secondary.webp"));

        assert!(locate("abc123.webp", dir.path(), MatchMode::Exact).is_none());
        assert!(locate("abc123-secondary.webp", dir.path(), MatchMode::Exact).is_some());
    }

    #[test]
    fn test_locate_returns_none_when_absent() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("post/other.webp"));

        assert!(locate("missing.webp", dir.path(), MatchMode::Substring).is_none());
    }

    #[test]
    fn test_locate_missing_root() {
        let dir = TempDir::new().unwrap();
        assert!(locate("a.webp", &dir.path().join("Photos"), MatchMode::Substring).is_none());
    }

    #[test]
    fn test_locate_first_match_in_name_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b/shared.webp"));
        touch(&dir.path().join("a/shared.webp"));

        let found = locate("shared.webp", dir.path(), MatchMode::Substring).unwrap();
        assert_eq!(found.parent().unwrap().file_name().unwrap(), "a");
    }
}
