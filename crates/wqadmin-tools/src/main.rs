//! wqadmin CLI - Project scaffolding from the wqadmin template

mod init;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wqadmin_scaffolder::ProductConfig;

/// wqadmin product configuration
#[derive(Clone)]
pub struct WqadminConfig;

impl ProductConfig for WqadminConfig {
    fn name(&self) -> &'static str {
        "wqadmin"
    }

    fn display_name(&self) -> &'static str {
        "wqadmin"
    }

    fn module_path(&self) -> &'static str {
        "github.com/xml520/wqadmin"
    }

    fn project_identifier(&self) -> &'static str {
        "wqadmin"
    }

    fn excluded_marker(&self) -> &'static str {
        "wqadmincli"
    }

    fn default_proxy_url(&self) -> &'static str {
        "https://goproxy.cn"
    }

    fn proxy_url_env(&self) -> &'static str {
        "WQADMIN_PROXY"
    }

    fn user_agent(&self) -> &'static str {
        concat!("wqadmin/", env!("CARGO_PKG_VERSION"))
    }
}

#[derive(Parser, Debug)]
#[command(name = "wqadmin")]
#[command(about = "Admin system scaffolding")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new project from the latest wqadmin template
    Init(init::InitArgs),
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose, args.quiet);

    let config = WqadminConfig;
    let result = match args.command {
        Command::Init(init_args) => init::run(&config, init_args).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
