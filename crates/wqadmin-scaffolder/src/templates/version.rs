//! Version list parsing and selection

use crate::error::{Result, ScaffoldError};
use semver::Version;

/// Policy for picking one version out of the proxy's list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionSelection {
    /// The last entry the proxy returned, without any comparison
    #[default]
    Last,
    /// The highest entry that parses as semver
    HighestSemver,
}

/// Split a `@v/list` response body into version strings
pub fn parse_version_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick a version from the list according to `selection`
pub fn select_version(
    versions: &[String],
    selection: VersionSelection,
    module: &str,
) -> Result<String> {
    let last = versions
        .last()
        .ok_or_else(|| ScaffoldError::VersionListEmpty {
            module: module.to_string(),
        })?;

    match selection {
        VersionSelection::Last => Ok(last.clone()),
        VersionSelection::HighestSemver => {
            let highest = versions
                .iter()
                .filter_map(|v| parse_version(v).ok().map(|parsed| (parsed, v)))
                .max_by(|(a, _), (b, _)| a.cmp(b))
                .map(|(_, v)| v.clone());

            match highest {
                Some(v) => Ok(v),
                None => {
                    tracing::warn!(
                        "no semver versions for {}, using last listed version {}",
                        module,
                        last
                    );
                    Ok(last.clone())
                }
            }
        }
    }
}

/// Parse version string, handling various formats
pub fn parse_version(version_str: &str) -> std::result::Result<Version, semver::Error> {
    // Remove leading 'v' if present
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned)
}
