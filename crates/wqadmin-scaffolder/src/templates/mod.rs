//! Template resolution, fetching, and export
//!
//! This module provides:
//! - Version list parsing and selection
//! - Archive download from a module proxy
//! - Archive export with identifier rewriting

pub mod archive;
pub mod copier;
pub mod fetcher;
pub mod version;

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::path::{Path, PathBuf};

pub use archive::TemplateArchive;
pub use copier::{export, ExportReport};
pub use fetcher::ProxyClient;
pub use version::{select_version, VersionSelection};

/// Name of the project being generated, also the output directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a user-supplied project name
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScaffoldError::InvalidProjectName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output directory for this project under `parent`
    pub fn target_dir(&self, parent: &Path) -> PathBuf {
        parent.join(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
