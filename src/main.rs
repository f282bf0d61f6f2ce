// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: read targets and a catalog, run the search on a
//! worker thread, show progress and print the result.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use cover_search::{
    MaxDepth, Progress, SearchConfig, SearchOutcome, SearchRequest, SearchRunner, Solution,
};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Target requirements, separated by spaces or commas
    #[arg(short, long)]
    targets: String,

    /// Catalog file with one group per line; reads stdin when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Largest number of groups to try (non-positive or non-numeric means 6)
    #[arg(short = 'd', long)]
    max_depth: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose);

        if let Some(path) = &self.config {
            if !path.is_file() {
                bail!("configuration file {} does not exist", path.display());
            }
        }
        let mut config =
            SearchConfig::load(self.config.as_deref()).context("failed to load configuration")?;
        if let Some(depth) = &self.max_depth {
            config.max_depth = MaxDepth::parse(depth);
        }

        let catalog = read_catalog(self.catalog.as_deref())?;
        let request = SearchRequest::from_text(&self.targets, &catalog, config.max_depth);

        let mut runner = SearchRunner::new(&config);
        let handle = runner.start(request)?;

        let bar = (!self.quiet && !self.json).then(progress_bar);
        let mut before_level = 0;
        for progress in handle.progress().iter() {
            let Some(bar) = &bar else { continue };
            match progress {
                Progress::SizeStarted { size, combinations } => {
                    bar.set_length(combinations);
                    bar.set_position(0);
                    bar.set_message(format!("{size} groups"));
                }
                Progress::Examined { examined, .. } => {
                    bar.set_position(examined.saturating_sub(before_level));
                }
                Progress::SizeExhausted { examined, .. } => {
                    before_level += examined;
                }
                Progress::Phase(_) => {}
            }
        }
        if let Some(bar) = &bar {
            bar.finish_and_clear();
        }

        let outcome = handle.wait()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print_outcome(&outcome, config.max_depth);
        }

        Ok(match outcome {
            SearchOutcome::Found(_) => ExitCode::SUCCESS,
            SearchOutcome::NotFound(_) | SearchOutcome::Cancelled(_) => ExitCode::from(1),
            SearchOutcome::InvalidInput { .. } => ExitCode::from(2),
        })
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn read_catalog(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read catalog from stdin")?;
            Ok(text)
        }
    }
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    let template = "{spinner} {msg:>10} [{bar:40}] {pos}/{len} ({eta})";
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

fn print_outcome(outcome: &SearchOutcome, max_depth: MaxDepth) {
    match outcome {
        SearchOutcome::Found(solution) => print_solution(solution),
        SearchOutcome::NotFound(stats) => {
            println!(
                "No feasible combination of up to {} groups ({} combinations, {:.2}s).",
                max_depth.get(),
                stats.combinations_examined,
                stats.elapsed_seconds
            );
            println!("Raise --max-depth or check the catalog.");
        }
        SearchOutcome::Cancelled(stats) => {
            println!(
                "Search cancelled after {} combinations ({:.2}s).",
                stats.combinations_examined, stats.elapsed_seconds
            );
        }
        SearchOutcome::InvalidInput { reason } => {
            eprintln!("Invalid input: {reason}.");
        }
    }
}

fn print_solution(solution: &Solution) {
    println!(
        "Found {} groups after {} combinations ({:.2}s):",
        solution.size, solution.stats.combinations_examined, solution.stats.elapsed_seconds
    );
    println!();
    for group in &solution.groups {
        println!("{group}");
    }
    println!();
    println!("Coverage:");
    for target in solution.coverage.targets() {
        println!("{}: {}", target.target, target.count);
    }
    let insufficient = solution.coverage.insufficient();
    if !insufficient.is_empty() {
        println!();
        println!("Covered fewer than twice: {}", insufficient.join(", "));
    }
    let exceeded = solution.coverage.exceeded();
    if !exceeded.is_empty() {
        println!();
        println!("Covered more than twice: {}", exceeded.join(", "));
    }
}

fn main() -> anyhow::Result<ExitCode> {
    Cli::parse().run()
}
