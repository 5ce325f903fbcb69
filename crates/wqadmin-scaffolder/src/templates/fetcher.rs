//! Template fetching from a Go module proxy
//!
//! Two endpoints of the proxy protocol are used:
//! - `{base}/{module}/@v/list`: newline-delimited published versions
//! - `{base}/{module}/@v/{version}.zip`: the source archive for one version

use super::archive::TemplateArchive;
use super::version::{self, VersionSelection};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use std::io::Cursor;
use url::Url;

/// Client for one template module on a module proxy
pub struct ProxyClient {
    base_url: Url,
    module_path: String,
    client: reqwest::Client,
}

impl ProxyClient {
    /// Create a new client with a custom user agent
    pub fn new(base_url: Url, module_path: &str, user_agent: &str) -> Self {
        Self {
            base_url,
            module_path: module_path.to_string(),
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from a resolved scaffold config
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new(
            config.proxy_url.clone(),
            &config.module_path,
            &config.user_agent,
        )
    }

    /// Build `{base}/{escaped-module}/@v/{file}`, keeping any path prefix of the base
    fn build_url(&self, file: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        let escaped = escape_path(&self.module_path);
        url.path_segments_mut()
            .map_err(|_| ScaffoldError::InvalidProxyUrl {
                url: self.base_url.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .extend(escaped.split('/').filter(|s| !s.is_empty()))
            .push("@v")
            .push(file);
        Ok(url)
    }

    /// GET a URL and return the body, mapping transport and status failures
    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScaffoldError::Network {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ScaffoldError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ScaffoldError::Network {
                url: url.to_string(),
                source,
            })?;
        tracing::debug!("received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    /// Fetch the list of published versions, in the order the proxy returns them
    pub async fn list_versions(&self) -> Result<Vec<String>> {
        let url = self.build_url("list")?;
        let body = self.get_bytes(url).await?;
        Ok(version::parse_version_list(&String::from_utf8_lossy(&body)))
    }

    /// Fetch the version list and pick one version from it
    pub async fn resolve_version(&self, selection: VersionSelection) -> Result<String> {
        let versions = self.list_versions().await?;
        tracing::debug!("{} published versions of {}", versions.len(), self.module_path);
        version::select_version(&versions, selection, &self.module_path)
    }

    /// Download the archive for `version`, fully buffered in memory
    pub async fn fetch_archive(&self, version: &str) -> Result<TemplateArchive<Cursor<Vec<u8>>>> {
        let url = self.build_url(&format!("{}.zip", escape_path(version)))?;
        let bytes = self.get_bytes(url).await?;
        TemplateArchive::from_bytes(version, bytes)
    }
}

/// Case-encode a module path or version for the proxy: `A` becomes `!a`
pub fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            escaped.push('!');
            escaped.push(c.to_ascii_lowercase());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
