//! Resolved scaffolding configuration
//!
//! [`ScaffoldConfig`] is built once from a [`ProductConfig`] and handed to every
//! component, so tests can point the pipeline at a fake proxy without touching
//! global state.

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use url::Url;

/// How a template is rewritten while being exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    /// Identifier in the template replaced by the project name
    pub identifier: String,
    /// Entries whose path contains this fragment are skipped
    pub excluded_marker: String,
    /// Suffixes of files whose content is rewritten
    pub source_suffixes: Vec<String>,
    /// Module definition file name, rewritten as well
    pub manifest_file: String,
}

impl RewriteRules {
    /// Whether an entry at `path` gets its content rewritten
    pub fn is_rewritable(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        file_name == self.manifest_file
            || self
                .source_suffixes
                .iter()
                .any(|suffix| path.ends_with(suffix.as_str()))
    }

    /// Whether an entry at `path` belongs to the generator itself
    pub fn is_excluded(&self, path: &str) -> bool {
        !self.excluded_marker.is_empty() && path.contains(&self.excluded_marker)
    }
}

/// Everything the pipeline needs to know, passed explicitly to each component
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Module proxy base URL
    pub proxy_url: Url,
    /// Module path of the template on the proxy
    pub module_path: String,
    /// User agent for proxy requests
    pub user_agent: String,
    pub rules: RewriteRules,
}

impl ScaffoldConfig {
    /// Build a config from a product, resolving the proxy URL.
    ///
    /// Precedence: `proxy_override` > the product's environment variable > the product default.
    pub fn from_product<C: ProductConfig>(
        config: &C,
        proxy_override: Option<&str>,
    ) -> Result<Self> {
        let env_value = std::env::var(config.proxy_url_env()).ok();
        let url_str = resolve_proxy_url(
            proxy_override,
            env_value.as_deref(),
            config.default_proxy_url(),
        );
        let proxy_url = parse_proxy_url(url_str)?;

        Ok(Self {
            proxy_url,
            module_path: config.module_path().to_string(),
            user_agent: config.user_agent().to_string(),
            rules: RewriteRules {
                identifier: config.project_identifier().to_string(),
                excluded_marker: config.excluded_marker().to_string(),
                source_suffixes: config
                    .source_suffixes()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                manifest_file: config.manifest_file().to_string(),
            },
        })
    }
}

/// Pick the proxy URL string, ignoring blank values
fn resolve_proxy_url<'a>(
    flag: Option<&'a str>,
    env_value: Option<&'a str>,
    default: &'a str,
) -> &'a str {
    flag.map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| env_value.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(default)
}

/// Parse a proxy base URL, rejecting URLs that cannot carry path segments
pub fn parse_proxy_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(|source| ScaffoldError::InvalidProxyUrl {
        url: url_str.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ScaffoldError::InvalidProxyUrl {
            url: url_str.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}
