//! Random-access view over a template's zip archive
//!
//! The fetcher buffers the whole download and hands back a
//! `TemplateArchive<Cursor<Vec<u8>>>`. The exporter only needs `Read + Seek`,
//! so a file-backed archive works the same way for templates too large to
//! keep in memory.

use crate::error::{Result, ScaffoldError};
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// A template archive for one resolved version
pub struct TemplateArchive<R> {
    version: String,
    inner: ZipArchive<R>,
}

impl TemplateArchive<Cursor<Vec<u8>>> {
    /// Open an archive from bytes already held in memory
    pub fn from_bytes(version: &str, bytes: Vec<u8>) -> Result<Self> {
        Self::new(version, Cursor::new(bytes))
    }
}

impl<R: Read + Seek> TemplateArchive<R> {
    /// Open an archive over any seekable reader
    pub fn new(version: &str, reader: R) -> Result<Self> {
        let inner = ZipArchive::new(reader).map_err(|source| ScaffoldError::ArchiveFormat {
            version: version.to_string(),
            source,
        })?;
        Ok(Self {
            version: version.to_string(),
            inner,
        })
    }

    /// Version this archive was fetched for
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of entries, directories included
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entry names in archive order
    pub fn entry_names(&self) -> Vec<String> {
        self.inner.file_names().map(str::to_string).collect()
    }

    pub(crate) fn zip_mut(&mut self) -> &mut ZipArchive<R> {
        &mut self.inner
    }
}
