//! Command-line interface module for sweepdir.
//!
//! This module handles all CLI-related functionality including:
//! - Command parsing and validation
//! - Merging CLI flags over file configuration
//! - Wiring the sweep engine, notifier, and scheduler together
//! - Rendering sweep reports (styled or JSON)

use crate::config::{CompiledFilters, SweepConfig};
use crate::notify::{HttpNotifier, NoopNotifier, Notifier};
use crate::output::OutputFormatter;
use crate::scheduler::{Scheduler, SingleFlight};
use crate::sweep::{CollisionPolicy, SweepEngine, SweepReport};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Sweep a directory into extension-named buckets and notify a webhook of
/// each move.
#[derive(Debug, Parser)]
#[command(name = "sweepdir", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Perform one sweep pass and exit.
    Run(SweepArgs),
    /// Sweep repeatedly at a fixed interval until terminated.
    Watch {
        #[command(flatten)]
        args: SweepArgs,

        /// Seconds between sweeps (overrides config).
        #[arg(long)]
        interval: Option<u64>,
    },
}

/// Flags shared by `run` and `watch`. Every flag overrides its
/// configuration-file counterpart.
#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Directory to scan for files.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Root directory under which per-extension buckets are created.
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Endpoint to POST relocation events to. Omit to disable notifications.
    #[arg(long)]
    pub notify_url: Option<String>,

    /// What to do when a same-named file already exists in the target bucket.
    #[arg(long, value_enum)]
    pub collision: Option<CollisionArg>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the sweep report as JSON instead of styled output.
    #[arg(long)]
    pub json: bool,
}

/// CLI spelling of the collision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollisionArg {
    /// Skip the file and record a collision.
    Skip,
    /// Move under a numeric-suffixed name.
    Rename,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Skip => CollisionPolicy::Skip,
            CollisionArg::Rename => CollisionPolicy::Rename,
        }
    }
}

/// Fully resolved settings for a sweep invocation.
#[derive(Debug)]
struct Settings {
    source: PathBuf,
    dest_root: PathBuf,
    notify_url: Option<String>,
    notify_timeout: Duration,
    collision: CollisionPolicy,
    filters: CompiledFilters,
    interval: Duration,
    json: bool,
}

/// Merges CLI flags over the loaded configuration file.
fn resolve(args: &SweepArgs, interval_flag: Option<u64>) -> Result<Settings, String> {
    let config = SweepConfig::load(args.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?;

    let source = args
        .source
        .clone()
        .or(config.paths.source_dir)
        .ok_or_else(|| {
            "No source directory: pass --source or set [paths].source_dir".to_string()
        })?;
    let dest_root = args.dest.clone().or(config.paths.dest_root).ok_or_else(|| {
        "No destination root: pass --dest or set [paths].dest_root".to_string()
    })?;

    let filters = config
        .filters
        .compile()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    Ok(Settings {
        source,
        dest_root,
        notify_url: args.notify_url.clone().or(config.notify.url),
        notify_timeout: Duration::from_secs(config.notify.timeout_secs),
        collision: args
            .collision
            .map(CollisionPolicy::from)
            .unwrap_or(config.sweep.collision),
        filters,
        interval: Duration::from_secs(interval_flag.unwrap_or(config.schedule.interval_secs)),
        json: args.json,
    })
}

fn build_notifier(settings: &Settings) -> Box<dyn Notifier + Send + Sync> {
    match &settings.notify_url {
        Some(url) => Box::new(HttpNotifier::with_timeout(url.clone(), settings.notify_timeout)),
        None => Box::new(NoopNotifier),
    }
}

fn render_report(report: &SweepReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{}", text),
            Err(e) => OutputFormatter::error(&format!("Could not serialize report: {}", e)),
        }
        return;
    }

    for record in &report.records {
        OutputFormatter::record_line(record);
    }
    OutputFormatter::sweep_summary(report);
}

/// Runs the CLI application with the given parsed command.
///
/// This is the main entry point for CLI operations.
pub fn run_cli(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run_once(&args),
        Command::Watch { args, interval } => watch(&args, interval),
    }
}

/// Executes a single sweep pass.
fn run_once(args: &SweepArgs) -> Result<(), String> {
    let settings = resolve(args, None)?;
    let notifier = build_notifier(&settings);
    let engine = SweepEngine::new(&settings.dest_root)
        .with_collision_policy(settings.collision)
        .with_filters(settings.filters);

    if !settings.json {
        OutputFormatter::info(&format!(
            "Sweeping {} into {}",
            settings.source.display(),
            settings.dest_root.display()
        ));
    }

    let report = engine
        .sweep(&settings.source, &*notifier)
        .map_err(|e| format!("Sweep failed: {}", e))?;
    render_report(&report, settings.json);
    Ok(())
}

/// Sweeps on a fixed interval until the process is terminated.
///
/// A trigger that fires while a sweep is still running is skipped via the
/// single-flight guard. A sweep that fails fatally (source unlistable) is
/// reported but does not halt future scheduled sweeps.
fn watch(args: &SweepArgs, interval_flag: Option<u64>) -> Result<(), String> {
    let settings = resolve(args, interval_flag)?;
    let notifier = build_notifier(&settings);
    let engine = SweepEngine::new(&settings.dest_root)
        .with_collision_policy(settings.collision)
        .with_filters(settings.filters);
    let flight = Arc::new(SingleFlight::new());
    let json = settings.json;
    let source = settings.source.clone();

    if !json {
        OutputFormatter::info(&format!(
            "Watching {} → {} every {}s",
            source.display(),
            settings.dest_root.display(),
            settings.interval.as_secs()
        ));
    }

    let spinner = (!json).then(|| OutputFormatter::create_idle_spinner(settings.interval));

    let do_sweep = move |engine: &SweepEngine,
                         notifier: &dyn Notifier,
                         flight: &SingleFlight,
                         source: &std::path::Path| {
        let Some(_guard) = flight.try_begin() else {
            OutputFormatter::warning("Previous sweep still running, skipping this trigger");
            return;
        };
        match engine.sweep(source, notifier) {
            Ok(report) => {
                if !report.is_empty() || json {
                    render_report(&report, json);
                }
            }
            Err(e) => OutputFormatter::error(&format!("Sweep failed: {}", e)),
        }
    };

    // First pass right away; the scheduler fires after one interval.
    do_sweep(&engine, &*notifier, &flight, &source);

    let tick_spinner = spinner.clone();
    let handle = Scheduler::new(settings.interval).start(move || {
        let sweep = || do_sweep(&engine, &*notifier, &flight, &source);
        match &tick_spinner {
            Some(spinner) => spinner.suspend(sweep),
            None => sweep(),
        }
    });

    handle.wait();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    Ok(())
}
