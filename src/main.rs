use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Import from our modularized library
use duplicate_finder_rs::prelude::*;

#[derive(Parser)]
#[command(name = "duplicate_finder_rs")]
#[command(version)]
#[command(
    about = "Find duplicate files and quarantine them. The oldest file of a content-equal set is kept as the original.",
    long_about = None
)]
struct Cli {
    /// Directory to scan, including all subdirectories at any depth
    #[arg(short, long)]
    input: PathBuf,

    /// Directory receiving relocated duplicates, mirroring the scanned layout
    #[arg(short, long)]
    output: PathBuf,

    /// What to do with a duplicate: copy it, or move it out of the tree
    #[arg(short, long, value_enum, default_value_t = ActionChoice::Copy)]
    action: ActionChoice,

    /// Also copy each original into the output directory for comparison
    #[arg(short, long)]
    copy_originals: bool,

    /// Write a CSV report of every duplicate found; omit for no report
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Include hidden files and directories in the scan
    #[arg(long)]
    include_hidden: bool,

    /// Number of parallel hashing threads (default: number of CPUs)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Run in batch mode (no progress bar)
    #[arg(long)]
    batch: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionChoice {
    /// Copy duplicates into the output directory, leaving sources in place
    Copy,
    /// Move duplicates into the output directory, removing them from the tree
    Move,
}

impl From<ActionChoice> for DispositionAction {
    fn from(choice: ActionChoice) -> Self {
        match choice {
            ActionChoice::Copy => DispositionAction::Copy,
            ActionChoice::Move => DispositionAction::Move,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up graceful shutdown handler
    let shutdown_requested = Arc::new(AtomicBool::new(false));
    let shutdown_flag = shutdown_requested.clone();

    ctrlc::set_handler(move || {
        eprintln!("\n⚠️  Shutdown requested. Finishing current files...");
        shutdown_flag.store(true, Ordering::SeqCst);
    })
    .context("Error setting Ctrl-C handler")?;

    // Set up rayon thread pool
    if let Some(workers) = cli.workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .context("Failed to build thread pool")?;
    }

    // Validated before any file is touched; an invalid configuration never
    // starts a scan
    let config = ScanConfig::new(
        &cli.input,
        &cli.output,
        cli.action.into(),
        cli.copy_originals,
        cli.report,
        cli.include_hidden,
    )?;

    let num_threads = rayon::current_num_threads();
    println!("Duplicate Finder (Rust Edition)");
    println!("Using {} worker thread(s)", num_threads);
    println!("Scanning: {}", config.scan_root.display());
    println!();

    // Set up progress bar (skip in batch mode)
    let progress = if cli.batch {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    let outcome = run_scan(&config, &shutdown_requested, progress);

    if outcome.interrupted {
        eprintln!("\n⏹️  Graceful shutdown complete");
        eprintln!(
            "📊 Classified {} of {} files before stopping",
            outcome.events.len() + outcome.skipped.len(),
            outcome.files_scanned
        );
    }

    // Print summary
    println!();
    println!("==================================================");
    println!("SCAN COMPLETE");
    println!("==================================================");
    println!("Files scanned: {}", outcome.files_scanned);
    println!("Duplicates found: {}", outcome.events.len());
    println!("Files skipped due to errors: {}", outcome.skipped.len());
    println!();

    if !outcome.skipped.is_empty() {
        println!("Skipped files:");
        for skip in &outcome.skipped {
            println!("  [{}] {}", skip.operation.as_str(), skip.path.display());
        }
        println!();
    }

    // Write report
    if let Some(ref report_path) = config.report_path {
        if let Err(e) = write_report(report_path, &outcome.events) {
            eprintln!("⚠️  {}", e);
            eprintln!("Dumping accumulated report rows to console:");
            dump_to_console(&outcome.events);
            return Err(e.into());
        }
        println!("Report saved to: {}", report_path.display());
    }

    Ok(())
}
