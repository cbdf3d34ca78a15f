use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use bindshift_deploy::{
    BindRewriteHook, ComponentInventory, DirectoryInventory, ErrorPolicy, HookConfig, Lifecycle,
    ManifestInventory, PreDeployEvent, RestoreReport,
};
use bindshift_ir::TransformOrchestrator;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "bindshift",
    version,
    about = "Rewrite @bind decorators for deployment and restore them afterwards"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a single file
    Transform(TransformArgs),
    /// List component scripts and whether they need rewriting
    Scan(ScanArgs),
    /// Rewrite, run the deploy command, then restore the originals
    Deploy(DeployArgs),
}

#[derive(Args)]
struct TransformArgs {
    file: PathBuf,

    /// Rewrite the file in place instead of printing it
    #[arg(long, conflicts_with = "check")]
    write: bool,

    /// Exit with status 1 if the file would change
    #[arg(long)]
    check: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Discover component bundles under this project root
    #[arg(long)]
    project: Option<PathBuf>,

    /// Read artifacts from a JSON manifest
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Args)]
struct ScanArgs {
    #[command(flatten)]
    source: Source,

    /// Hook configuration (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct DeployArgs {
    #[command(flatten)]
    source: Source,

    /// Hook configuration (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured transform error policy (abort, skip)
    #[arg(long)]
    on_error: Option<ErrorPolicy>,

    /// Deploy command to run while the rewritten files are on disk
    #[arg(last = true, required = true)]
    command: Vec<String>,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Transform(args) => run_transform(args, cli.format),
        Commands::Scan(args) => run_scan(args, cli.format),
        Commands::Deploy(args) => run_deploy(args, cli.format),
    }
}

fn load_config(path: Option<&Path>) -> Result<HookConfig> {
    match path {
        Some(path) => HookConfig::from_yaml(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(HookConfig::default()),
    }
}

fn inventory(source: &Source) -> Box<dyn ComponentInventory> {
    match (&source.project, &source.manifest) {
        (_, Some(manifest)) => Box::new(ManifestInventory::new(manifest)),
        (Some(project), None) => Box::new(DirectoryInventory::new(project)),
        (None, None) => Box::new(DirectoryInventory::new(".")),
    }
}

fn run_transform(args: &TransformArgs, format: OutputFormat) -> Result<ExitCode> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let result = TransformOrchestrator::new()
        .transform_file(&source, &args.file.to_string_lossy())
        .with_context(|| format!("failed to transform {}", args.file.display()))?;

    if args.check {
        if result.modified {
            println!("{} would be rewritten", args.file.display());
            return Ok(ExitCode::from(1));
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.write {
        if result.modified {
            std::fs::write(&args.file, &result.code)
                .with_context(|| format!("failed to write {}", args.file.display()))?;
            println!(
                "rewrote {} ({} occurrences)",
                args.file.display(),
                result.metadata.occurrences
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    match format {
        OutputFormat::Text => print!("{}", result.code),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ScanStatus {
    Rewrite,
    Clean,
    Error,
}

#[derive(Serialize)]
struct ScanEntry {
    path: PathBuf,
    status: ScanStatus,
    occurrences: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run_scan(args: &ScanArgs, format: OutputFormat) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let hook = BindRewriteHook::new(config);
    let orchestrator = TransformOrchestrator::new();
    let artifacts = inventory(&args.source).artifacts()?;

    let mut entries = Vec::new();
    for artifact in artifacts.iter().filter(|a| hook.is_eligible(a)) {
        let path = hook.script_path(artifact);
        let outcome = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|source| {
                orchestrator
                    .transform_file(&source, &path.to_string_lossy())
                    .map_err(anyhow::Error::from)
            });

        let (status, occurrences, error) = match outcome {
            Ok(result) if result.modified => (ScanStatus::Rewrite, result.metadata.occurrences, None),
            Ok(_) => (ScanStatus::Clean, 0, None),
            Err(e) => (ScanStatus::Error, 0, Some(e.to_string())),
        };
        entries.push(ScanEntry {
            path,
            status,
            occurrences,
            error,
        });
    }

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                match (&entry.status, &entry.error) {
                    (ScanStatus::Rewrite, _) => println!(
                        "rewrite  {} ({} occurrences)",
                        entry.path.display(),
                        entry.occurrences
                    ),
                    (ScanStatus::Clean, _) => println!("clean    {}", entry.path.display()),
                    (ScanStatus::Error, error) => println!(
                        "error    {}: {}",
                        entry.path.display(),
                        error.as_deref().unwrap_or("unknown error")
                    ),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }

    let failed = entries
        .iter()
        .any(|e| matches!(e.status, ScanStatus::Error));
    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn report_restore(report: &RestoreReport) {
    for failure in &report.failures {
        eprintln!(
            "failed to restore {}: {}",
            failure.location.display(),
            failure.error
        );
    }
    if !report.restored.is_empty() {
        eprintln!("restored {} file(s)", report.restored.len());
    }
}

fn run_deploy(args: &DeployArgs, format: OutputFormat) -> Result<ExitCode> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(policy) = args.on_error {
        config = config.with_error_policy(policy);
    }

    let artifacts = inventory(&args.source).artifacts()?;
    let mut lifecycle = Lifecycle::new(BindRewriteHook::new(config));

    let summary = match lifecycle.emit_pre_deploy(&PreDeployEvent::new(artifacts)) {
        Ok(summary) => summary,
        Err(e) => {
            // Put back whatever was rewritten before the failure
            let report = lifecycle.emit_post_deploy()?;
            report_restore(&report);
            return Err(e).context("pre-deploy failed; deploy command was not run");
        }
    };
    // stdout belongs to the deploy command
    match format {
        OutputFormat::Text => eprintln!(
            "rewrote {} component(s), {} unchanged, {} skipped",
            summary.rewritten.len(),
            summary.unchanged.len(),
            summary.skipped.len()
        ),
        OutputFormat::Json => eprintln!("{}", serde_json::to_string_pretty(&summary)?),
    }

    let (program, rest) = match args.command.split_first() {
        Some(split) => split,
        None => bail!("no deploy command given"),
    };
    let status = Command::new(program).args(rest).status();

    let report = lifecycle.emit_post_deploy()?;
    report_restore(&report);

    let status = status.with_context(|| format!("failed to run {}", program))?;
    if !report.is_complete() {
        report.into_result()?;
    }

    tracing::info!(status = ?status.code(), "deploy command finished");
    Ok(match status.code() {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::from(1),
    })
}
