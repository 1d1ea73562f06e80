pub mod locator;
pub mod manifest;
pub mod naming;
pub mod organizer;

pub use crate::domain::model::{MemoryEntry, OrganizeReport};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
