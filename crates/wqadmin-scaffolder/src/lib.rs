//! wqadmin scaffolder - Shared library for project scaffolding CLIs
//!
//! This library generates a new project from a template module published on a
//! Go module proxy. It is designed to be driven by a thin CLI binary that
//! supplies the product configuration.
//!
//! # Pipeline
//!
//! 1. **Version resolution** - fetch `@v/list` and pick a version
//! 2. **Archive fetch** - download `@v/<version>.zip` into memory
//! 3. **Export** - write every entry under the project directory, rewriting
//!    the template identifier in source and module files
//!
//! # Example Usage
//!
//! ```ignore
//! use wqadmin_scaffolder::{templates, ProjectName, ProxyClient, ScaffoldConfig};
//!
//! let config = ScaffoldConfig::from_product(&MyProduct, None)?;
//! let client = ProxyClient::from_config(&config);
//! let version = client.resolve_version(Default::default()).await?;
//! let mut archive = client.fetch_archive(&version).await?;
//! let name = ProjectName::new("myapp")?;
//! templates::export(
//!     &mut archive,
//!     &config.module_path,
//!     &config.rules,
//!     name.as_str(),
//!     &name.target_dir(Path::new(".")),
//! )?;
//! ```

pub mod config;
pub mod error;
pub mod product;
pub mod templates;

// Re-export main types for convenience
pub use config::{RewriteRules, ScaffoldConfig};
pub use error::{Result, ScaffoldError};
pub use product::ProductConfig;
pub use templates::{
    export, ExportReport, ProjectName, ProxyClient, TemplateArchive, VersionSelection,
};
