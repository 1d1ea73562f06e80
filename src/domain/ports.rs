use crate::core::locator::MatchMode;
use std::path::Path;

pub trait ConfigProvider {
    fn manifest_path(&self) -> &Path;
    fn output_root(&self) -> &Path;
    fn photos_dir(&self) -> &Path;
    fn match_mode(&self) -> MatchMode;
}
