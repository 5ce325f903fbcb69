//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a product must implement to describe the
//! template module it scaffolds from and how that template is rewritten.

/// Configuration trait for a scaffolding product
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The template module on the proxy
/// - The identifier rewritten into the new project's name
/// - Proxy defaults
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Fully-qualified module path of the template (e.g. `github.com/org/repo`)
    fn module_path(&self) -> &'static str;

    /// Literal identifier in the template's sources replaced by the project name
    fn project_identifier(&self) -> &'static str;

    /// Path fragment marking the generator's own command directory.
    /// Entries containing it are never exported.
    fn excluded_marker(&self) -> &'static str;

    /// Default module proxy base URL
    fn default_proxy_url(&self) -> &'static str;

    /// Environment variable name for overriding the proxy URL
    fn proxy_url_env(&self) -> &'static str;

    /// File suffixes whose content gets the identifier rewrite
    fn source_suffixes(&self) -> &'static [&'static str] {
        &[".go"]
    }

    /// Module definition file name, rewritten like sources
    fn manifest_file(&self) -> &'static str {
        "go.mod"
    }

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
