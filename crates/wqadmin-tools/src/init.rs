//! `init` command: resolve, download, and export the template

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use wqadmin_scaffolder::{
    export, ProductConfig, ProjectName, ProxyClient, ScaffoldConfig, VersionSelection,
};

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project name, also the name of the directory to create
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Module proxy base URL (defaults to $WQADMIN_PROXY, then https://goproxy.cn)
    #[arg(long)]
    pub proxy: Option<String>,

    /// Use this template version instead of the latest listed one
    #[arg(long = "template-version")]
    pub template_version: Option<String>,

    /// Pick the highest semver version instead of the last listed one
    #[arg(long, conflicts_with = "template_version")]
    pub semver: bool,

    /// Directory to create the project in
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl InitArgs {
    fn selection(&self) -> VersionSelection {
        if self.semver {
            VersionSelection::HighestSemver
        } else {
            VersionSelection::Last
        }
    }
}

/// Run the init command
pub async fn run<C: ProductConfig>(config: &C, args: InitArgs) -> Result<()> {
    // Validate input before touching the network
    let name = ProjectName::new(&args.name)?;
    let scaffold = ScaffoldConfig::from_product(config, args.proxy.as_deref())?;
    let client = ProxyClient::from_config(&scaffold);
    tracing::info!(
        "using proxy {} for {}",
        scaffold.proxy_url,
        scaffold.module_path
    );

    // Step 1: Resolve the template version
    let version = match &args.template_version {
        Some(pinned) => pinned.clone(),
        None => client
            .resolve_version(args.selection())
            .await
            .context("could not fetch version information")?,
    };
    println!(
        "{}",
        format!("--{} version: {}", config.display_name(), version).cyan()
    );

    // Step 2: Download the archive
    let mut archive = client
        .fetch_archive(&version)
        .await
        .context("could not download template archive")?;

    // Step 3: Export into <dir>/<name>
    let parent = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let target = name.target_dir(&parent);
    let report = export(
        &mut archive,
        &scaffold.module_path,
        &scaffold.rules,
        name.as_str(),
        &target,
    )
    .context("could not export files")?;

    println!(
        "{}",
        format!("--{} download success", config.display_name())
            .green()
            .bold()
    );
    println!(
        "  {} {} files written to {} ({} rewritten)",
        "->".blue(),
        report.written.len(),
        target.display(),
        report.rewritten.len()
    );

    Ok(())
}
