mod cli;

use anyhow::Context;
use cli::{Args, Command, RenderArgs, ScanArgs, WatchArgs};
use clap::Parser;
use futures::StreamExt;
use instance_compliance::adapters::outbound::catalog::{
    InMemoryInstanceCatalog, PersistentInstanceCatalog,
};
use instance_compliance::adapters::outbound::console::StderrProgressReporter;
use instance_compliance::adapters::outbound::ssm::{
    build_ssm_client, PaginatedInventorySource, SsmCommandSender, SsmInventoryPageFetcher,
    SsmScanInvoker, SsmSettings,
};
use instance_compliance::application::dto::{OutputFormat, ScanOutcomeStatus, ScanReport};
use instance_compliance::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use instance_compliance::application::use_cases::{ReconcileInventoryUseCase, RunScanUseCase};
use instance_compliance::compliance::domain::{InstanceId, InstanceRecord, ScanSelection};
use instance_compliance::compliance::policies::{ScanOption, ScanProfiles};
use instance_compliance::config::{discover_config, load_config_from_path, Settings};
use instance_compliance::ports::outbound::InstanceCatalog;
use instance_compliance::shared::error::ExitCode;
use instance_compliance::shared::Result;
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

type Catalog = Arc<PersistentInstanceCatalog<InMemoryInstanceCatalog>>;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            discover_config(&cwd)?
        }
    };
    let settings = Settings::resolve(&args.overrides(), config.as_ref());

    init_logging(&settings.log_level)?;

    match args.command {
        Command::Profiles => {
            print_profiles();
            Ok(ExitCode::Success)
        }
        Command::List(render) => {
            let catalog = open_catalog(&settings).await?;
            let records = catalog.list().await?;
            render_records(&records, &render)?;
            Ok(ExitCode::Success)
        }
        Command::Refresh => refresh(&settings).await,
        Command::Scan(scan) => run_scan(&settings, scan).await,
        Command::Watch(watch) => watch_catalog(&settings, watch).await,
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level: {}", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

async fn open_catalog(settings: &Settings) -> Result<Catalog> {
    let catalog = PersistentInstanceCatalog::open(
        InMemoryInstanceCatalog::new(),
        settings.catalog_path.clone(),
    )
    .await?;
    Ok(Arc::new(catalog))
}

async fn ssm_client(settings: &Settings) -> aws_sdk_ssm::Client {
    build_ssm_client(&SsmSettings {
        region: settings.region.clone(),
        profile: settings.profile.clone(),
    })
    .await
}

fn reconcile_use_case(
    client: aws_sdk_ssm::Client,
    catalog: Catalog,
    settings: &Settings,
) -> ReconcileInventoryUseCase<
    PaginatedInventorySource<SsmInventoryPageFetcher>,
    Catalog,
    StderrProgressReporter,
> {
    ReconcileInventoryUseCase::new(
        PaginatedInventorySource::new(SsmInventoryPageFetcher::new(client)),
        catalog,
        StderrProgressReporter::new(),
    )
    .with_max_concurrency(settings.max_concurrency)
}

async fn refresh(settings: &Settings) -> Result<ExitCode> {
    let catalog = open_catalog(settings).await?;
    let client = ssm_client(settings).await;
    let report = reconcile_use_case(client, catalog, settings).execute().await?;

    println!("{}", report);

    if report.has_failures() {
        anyhow::bail!(
            "{} record(s) could not be stored in {}",
            report.failed(),
            settings.catalog_path.display()
        );
    }
    Ok(ExitCode::Success)
}

async fn run_scan(settings: &Settings, scan: ScanArgs) -> Result<ExitCode> {
    let os = scan
        .os
        .or_else(|| settings.default_os.clone())
        .unwrap_or_default();
    let benchmark = scan
        .benchmark
        .or_else(|| settings.default_benchmark.clone())
        .unwrap_or_default();

    // Reject a bad selection before touching the catalog or AWS
    let selection = ScanSelection::new(&os, &benchmark)?;
    let requested = scan
        .instance_ids
        .into_iter()
        .map(InstanceId::new)
        .collect::<Result<Vec<_>>>()?;

    let catalog = open_catalog(settings).await?;
    let targets: Vec<InstanceId> = if scan.all {
        catalog
            .list()
            .await?
            .iter()
            .map(|record| record.instance_id().clone())
            .collect()
    } else {
        requested
    };

    if targets.is_empty() {
        println!("No EC2 Instances");
        return Ok(ExitCode::Success);
    }

    let client = ssm_client(settings).await;
    let use_case = RunScanUseCase::new(
        SsmScanInvoker::new(SsmCommandSender::new(client)),
        catalog,
        StderrProgressReporter::new(),
    )
    .with_document_name(settings.document_name.clone())
    .with_max_concurrency(settings.max_concurrency);

    let report = use_case
        .run_scan(&targets, selection.os(), selection.benchmark())
        .await?;
    print_scan_report(&report);

    if report.has_failures() {
        Ok(ExitCode::ScanFailures)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn watch_catalog(settings: &Settings, watch: WatchArgs) -> Result<ExitCode> {
    let catalog = open_catalog(settings).await?;
    let client = ssm_client(settings).await;
    let reconcile = reconcile_use_case(client, catalog.clone(), settings);

    let mut subscription = catalog.subscribe();
    let mut ticker = tokio::time::interval(Duration::from_secs(watch.interval));
    let mut last_rendered: Option<Vec<InstanceRecord>> = None;

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(interval_secs = watch.interval, "Watching catalog");

    loop {
        tokio::select! {
            result = &mut shutdown => {
                result.context("Failed to listen for Ctrl-C")?;
                info!("Received Ctrl+C signal");
                break;
            }
            _ = ticker.tick() => {
                if let Err(e) = reconcile.execute().await {
                    warn!(error = %e, "Refresh failed; keeping the current catalog");
                }
            }
            snapshot = subscription.next() => {
                let Some(snapshot) = snapshot else { break };
                if last_rendered.as_deref() != Some(snapshot.as_slice()) {
                    render_records(&snapshot, &watch.render)?;
                    last_rendered = Some(snapshot.as_ref().clone());
                }
            }
        }
    }

    subscription.unsubscribe();
    Ok(ExitCode::Success)
}

fn render_records(records: &[InstanceRecord], render: &RenderArgs) -> Result<()> {
    let colored = render.output.is_none()
        && render.format == OutputFormat::Table
        && std::io::stdout().is_terminal();

    let formatter = FormatterFactory::create(render.format, colored);
    let output = formatter.format(records)?;

    let presenter = PresenterFactory::create(PresenterType::from(render.output.clone()));
    presenter.present(&output)
}

fn print_scan_report(report: &ScanReport) {
    println!("Scan run {}", report.run_id);
    for outcome in &report.outcomes {
        match &outcome.status {
            ScanOutcomeStatus::Started { command_id } => {
                println!("  ✅ {}  {}", outcome.instance_id, command_id);
            }
            ScanOutcomeStatus::NotStarted { reason } => {
                let summary = reason.lines().next().unwrap_or_default();
                println!("  ❌ {}  {}", outcome.instance_id, summary);
            }
        }
    }
    println!(
        "{} started, {} not started",
        report.started_count(),
        report.failed_count()
    );
}

fn print_options(title: &str, options: &[ScanOption]) {
    let width = options.iter().map(|o| o.label.len()).max().unwrap_or(0);
    println!("{}:", title);
    for option in options {
        println!("  {:<width$}  {}", option.label, option.value, width = width);
    }
}

fn print_profiles() {
    print_options("OS content (--os)", ScanProfiles::os_content());
    println!();
    print_options("Benchmarks (--benchmark)", ScanProfiles::benchmarks());
}

