//! Template export with identifier rewriting
//!
//! Each archive entry is either skipped, rewritten, or copied verbatim into the
//! destination directory. The rewrite is a raw byte-level find-and-replace of
//! the template identifier: it also touches comments, strings, and longer
//! identifiers that happen to contain it.

use super::archive::TemplateArchive;
use crate::config::RewriteRules;
use crate::error::{Result, ScaffoldError};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};
use std::path::{Component, Path, PathBuf};

/// What happens to a single archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Directory entries never produce a file
    SkipDirectory,
    /// Part of the generator itself
    SkipExcluded,
    /// Source or module file, identifier replaced
    Rewrite,
    /// Copied byte-for-byte
    Copy,
}

/// Decide what to do with an entry given its archive path
pub fn classify_entry(path: &str, is_dir: bool, rules: &RewriteRules) -> EntryAction {
    if is_dir {
        EntryAction::SkipDirectory
    } else if rules.is_excluded(path) {
        EntryAction::SkipExcluded
    } else if rules.is_rewritable(path) {
        EntryAction::Rewrite
    } else {
        EntryAction::Copy
    }
}

/// Files written by an export, relative to the destination directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Every file written, rewritten ones included
    pub written: Vec<PathBuf>,
    /// Files whose content had the identifier replaced
    pub rewritten: Vec<PathBuf>,
    /// Archive paths that were not written (directories, excluded, duplicates)
    pub skipped: Vec<String>,
}

/// Replace every occurrence of `from` with `to` in `content`
pub fn replace_bytes(content: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    if from.is_empty() {
        return content.to_vec();
    }

    let mut out = Vec::with_capacity(content.len());
    let mut rest = content;
    while let Some(pos) = find(rest, from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    out.extend_from_slice(rest);
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Strip the `<module>@<version>/` root that module zips nest every file under
fn strip_archive_root<'a>(path: &'a str, root_prefix: &str) -> &'a str {
    path.strip_prefix(root_prefix).unwrap_or(path)
}

/// Turn an archive path into a relative filesystem path, refusing anything
/// that would land outside the destination
fn relative_output_path(path: &str) -> Result<PathBuf> {
    let relative = PathBuf::from(path);
    let safe = !path.is_empty()
        && relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if safe {
        Ok(relative)
    } else {
        Err(ScaffoldError::UnsafeEntryPath {
            path: path.to_string(),
        })
    }
}

/// Create `path` (and its parents) and fill it from `reader`
fn write_file(path: &Path, reader: &mut impl Read) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    let mut out = File::create(path).map_err(|e| ScaffoldError::io(path, e))?;
    io::copy(reader, &mut out).map_err(|e| ScaffoldError::io(path, e))?;
    out.flush().map_err(|e| ScaffoldError::io(path, e))?;
    Ok(())
}

/// Export every entry of `archive` into `dest`, replacing the template
/// identifier with `project_name` in source and module files.
///
/// Stops at the first failure; files already written are left in place.
pub fn export<R: Read + Seek>(
    archive: &mut TemplateArchive<R>,
    module_path: &str,
    rules: &RewriteRules,
    project_name: &str,
    dest: &Path,
) -> Result<ExportReport> {
    let version = archive.version().to_string();
    let root_prefix = format!("{}@{}/", module_path, version);
    let mut report = ExportReport::default();
    let mut seen = HashSet::new();

    for index in 0..archive.len() {
        let mut entry = archive
            .zip_mut()
            .by_index(index)
            .map_err(|source| ScaffoldError::ArchiveFormat {
                version: version.clone(),
                source,
            })?;
        let name = entry.name().to_string();
        let relative_name = strip_archive_root(&name, &root_prefix);

        let action = classify_entry(relative_name, entry.is_dir(), rules);
        tracing::debug!("{} -> {:?}", name, action);

        match action {
            EntryAction::SkipDirectory | EntryAction::SkipExcluded => {
                report.skipped.push(name);
                continue;
            }
            EntryAction::Rewrite | EntryAction::Copy => {}
        }

        let relative = relative_output_path(relative_name)?;
        if !seen.insert(relative.clone()) {
            tracing::warn!("duplicate archive entry {}, keeping the first one", name);
            report.skipped.push(name);
            continue;
        }

        let out_path = dest.join(&relative);
        if action == EntryAction::Rewrite {
            let mut content = Vec::new();
            entry
                .read_to_end(&mut content)
                .map_err(|e| ScaffoldError::io(&name, e))?;
            let replaced = replace_bytes(
                &content,
                rules.identifier.as_bytes(),
                project_name.as_bytes(),
            );
            write_file(&out_path, &mut replaced.as_slice())?;
            report.rewritten.push(relative.clone());
        } else {
            write_file(&out_path, &mut entry)?;
        }
        report.written.push(relative);
    }

    Ok(report)
}
