mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use remforge_core::time::now_unix_millis;
use remforge_core::{
    ExportFormat, FileDescriptor, REMSequence, Session, SessionError, VALENCE_HISTOGRAM_BINS,
    ValenceBand, classify, format_file_size, modality_bars, spatial_distribution,
    valence_histogram,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "remforge", about = "Synthesize and export REM experience records")]
struct Cli {
    /// Config file (defaults to $REMFORGE_CONFIG or ./remforge.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize one record per file and optionally export the batch
    Process {
        /// Files to process (only names and sizes are used)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Export format: json, csv or report (repeatable)
        #[arg(long = "format", short = 'f')]
        formats: Vec<String>,

        /// Directory to write exports into
        #[arg(long)]
        out: Option<PathBuf>,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the pacing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Show the category each file name maps to
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Load a JSON export and print its statistics
    Stats {
        /// JSON export file
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Process {
            files,
            formats,
            out,
            seed,
            no_delay,
        } => {
            let mut config = Config::load(cli.config.as_deref())?;
            if let Some(out) = out {
                config.output_dir = out.clone();
            }
            if seed.is_some() {
                config.seed = *seed;
            }
            if *no_delay {
                config.pacing.enabled = false;
            }
            cmd_process(&config, files, formats).await
        }
        Commands::Classify { names } => {
            cmd_classify(names);
            Ok(())
        }
        Commands::Stats { path } => cmd_stats(path),
    }
}

/// Build descriptors from file metadata. File contents are never read.
fn describe_files(paths: &[PathBuf]) -> Result<Vec<FileDescriptor>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if !meta.is_file() {
            tracing::warn!("skipping {}: not a regular file", path.display());
            continue;
        }
        files.push(FileDescriptor::new(display_name(path), meta.len()));
    }
    Ok(files)
}

/// Final path component, with invalid UTF-8 replaced rather than dropped so
/// the extension still classifies.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

async fn cmd_process(config: &Config, paths: &[PathBuf], formats: &[String]) -> Result<()> {
    let formats = formats
        .iter()
        .map(|f| f.parse::<ExportFormat>())
        .collect::<Result<Vec<_>, SessionError>>()?;

    let files = describe_files(paths)?;
    let mut session = Session::new(config.pacing.clone());

    let delay = session.pacing_delay(&files);
    if !delay.is_zero() {
        tracing::info!("pacing batch for {}ms", delay.as_millis());
        tokio::time::sleep(delay).await;
    }

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let seq = match session.process_files(&files, &mut rng) {
        Ok(seq) => seq,
        Err(SessionError::EmptyBatch) => {
            tracing::warn!("no files to process");
            println!("(no files processed)");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for rem in seq.records() {
        tracing::debug!(
            "{} {} ({}) valence={:.3}",
            rem.rem_id,
            rem.file_info.name,
            rem.file_info.category,
            rem.sensorium.affective_valence
        );
    }
    tracing::info!(
        "processed {} files, {} bytes",
        seq.metadata.total_files,
        seq.metadata.total_size
    );

    print_summary(&session)?;

    if !formats.is_empty() {
        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("failed to create {}", config.output_dir.display())
        })?;
    }

    let now = now_unix_millis();
    for format in formats {
        let artifact = session
            .export_as(format, now)
            .with_context(|| format!("failed to render {}", format.as_str()))?;
        let path = config.output_dir.join(&artifact.file_name);
        if let Err(e) = std::fs::write(&path, &artifact.content) {
            tracing::error!("failed to write {}: {e}", path.display());
            return Err(e).with_context(|| format!("failed to write {}", path.display()));
        }
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn cmd_classify(names: &[String]) {
    for name in names {
        println!("{name} → {}", classify(name));
    }
}

fn cmd_stats(path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut session = Session::default();
    session
        .import_json(&json)
        .with_context(|| format!("failed to import {}", path.display()))?;

    print_summary(&session)?;

    let adv = session.advanced_statistics()?;
    let v = &adv.valence;
    println!(
        "valence:     mean={:.3}, std={:.3}, min={:.3}, max={:.3}",
        v.summary.mean, v.summary.std, v.summary.min, v.summary.max
    );
    println!(
        "signs:       positive={}, negative={}, neutral={}",
        v.signs.positive, v.signs.negative, v.signs.neutral
    );
    for (modality, s) in &adv.modalities {
        println!(
            "  {:<15} mean={:.3}, std={:.3}, min={:.3}, max={:.3}",
            modality.as_str(),
            s.mean,
            s.std,
            s.min,
            s.max
        );
    }

    if let Some(seq) = session.current() {
        print_charts(seq);
    }
    Ok(())
}

fn print_summary(session: &Session) -> Result<()> {
    let stats = session.statistics()?;
    let total_size = session
        .current()
        .map(|seq| seq.metadata.total_size)
        .unwrap_or(0);

    println!("experiences: {}", stats.total_experiences);
    println!("qualia:      {}", stats.total_qualia);
    println!("anchors:     {}", stats.total_anchors);
    match stats.avg_valence {
        Some(avg) => println!(
            "avg_valence: {avg:.3} ({})",
            ValenceBand::of(avg).color()
        ),
        None => println!("avg_valence: n/a"),
    }
    println!("total_size:  {}", format_file_size(total_size));
    Ok(())
}

fn print_charts(seq: &REMSequence) {
    println!("--- modality confidence ---");
    for (modality, avg) in modality_bars(&seq.sequence) {
        println!("  {:<15} {avg:.3}", modality.as_str());
    }

    println!("--- valence distribution ---");
    for bin in valence_histogram(&seq.sequence, VALENCE_HISTOGRAM_BINS) {
        if bin.count > 0 {
            println!("  [{:+.2}, {:+.2}) {}", bin.lower, bin.upper, bin.count);
        }
    }

    println!("--- spatial horizons ---");
    for (horizon, count) in spatial_distribution(&seq.sequence) {
        println!("  {horizon:<20} {count}");
    }
}
