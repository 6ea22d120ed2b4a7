use clap::{Args as ClapArgs, Parser, Subcommand};
use instance_compliance::application::dto::OutputFormat;
use instance_compliance::config::CliOverrides;
use std::path::PathBuf;

/// Track SSM-managed EC2 instances and start OpenSCAP compliance scans
#[derive(Parser, Debug)]
#[command(name = "instance-compliance")]
#[command(version)]
#[command(
    about = "Track SSM-managed EC2 instances and start OpenSCAP compliance scans",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./instance-compliance.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the catalog snapshot file
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// AWS region (overrides config and environment)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS named profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull the current SSM inventory into the catalog
    Refresh,

    /// Print the catalog
    List(RenderArgs),

    /// Start a compliance scan on the selected instances
    Scan(ScanArgs),

    /// Refresh periodically and re-render the catalog on every change until Ctrl-C
    Watch(WatchArgs),

    /// List the known OS content files and benchmark profiles
    Profiles,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RenderArgs {
    /// Output format: table, json or markdown
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Seconds between inventory refreshes
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScanArgs {
    /// Instance ids to scan
    #[arg(
        value_name = "INSTANCE_ID",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub instance_ids: Vec<String>,

    /// Scan every instance in the catalog
    #[arg(long)]
    pub all: bool,

    /// SCAP datastream file for the target OS (e.g. ssg-amzn2-ds.xml)
    #[arg(long)]
    pub os: Option<String>,

    /// XCCDF benchmark profile id
    #[arg(long)]
    pub benchmark: Option<String>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            region: self.region.clone(),
            profile: self.profile.clone(),
            catalog_path: self.catalog.clone(),
            verbose: self.verbose,
        }
    }
}
