use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use tracing::{info, warn, Level};

use tongues::{
    catalog, DetectOptions, DetectionResult, Detector, DetectorConfig, Failure, FailureKind,
    Success,
};

/// Process-wide tables that can be printed instead of detecting
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Table {
    Detected,
    Languages,
    Encodings,
}

#[derive(Parser, Debug)]
#[command(name = "tongues")]
#[command(about = "Asynchronous language identification for files, globs or stdin")]
#[command(version)]
struct Args {
    /// Files or glob patterns to classify; reads stdin when omitted or "-"
    inputs: Vec<String>,

    /// Input is HTML: skip tags and entities while scoring
    #[arg(long)]
    html: bool,

    /// Expected language name or code (e.g. "French", "fr")
    #[arg(long, default_value = "")]
    language_hint: String,

    /// Declared encoding name (e.g. "UTF8", "ISO-8859-1")
    #[arg(long, default_value = "")]
    encoding_hint: String,

    /// Domain suffix of the source document (e.g. "co.uk")
    #[arg(long, default_value = "")]
    tld_hint: String,

    /// HTTP Content-Language header value
    #[arg(long, default_value = "")]
    http_hint: String,

    /// Detection worker threads (defaults to the CPU count)
    #[arg(long, env = "TONGUES_WORKERS")]
    workers: Option<usize>,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Print a catalog table and exit
    #[arg(long, value_enum)]
    list: Option<Table>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

/// One output line: mirrors the (error, result) callback pair
#[derive(Serialize, Debug)]
struct Report {
    path: String,
    error: Option<Failure>,
    result: Option<Success>,
}

impl Report {
    fn new(path: String, result: DetectionResult) -> Self {
        let (error, result) = result.into_callback_args();
        Self {
            path,
            error,
            result,
        }
    }
}

/// Whole-run statistics written with --stats-out
#[derive(Serialize, Debug, Default)]
struct RunStats {
    inputs: u64,
    identified: u64,
    reliable: u64,
    unidentified: u64,
    /// Engine faults and pool failures
    detect_errors: u64,
    read_errors: u64,
    bytes_read: u64,
    elapsed_ms: u64,
}

impl RunStats {
    fn record(&mut self, report: &Report) {
        self.inputs += 1;
        match (&report.error, &report.result) {
            (_, Some(success)) => {
                self.identified += 1;
                if success.reliable {
                    self.reliable += 1;
                }
            }
            (Some(failure), None) if failure.kind != FailureKind::Unidentified => self.detect_errors += 1,
            _ => self.unidentified += 1,
        }
    }

    fn record_read_error(&mut self) {
        self.inputs += 1;
        self.read_errors += 1;
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let line = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{line}");
    Ok(())
}

fn print_table(table: Table, pretty: bool) -> Result<()> {
    match table {
        Table::Detected => print_json(&catalog::detected_languages(), pretty),
        Table::Languages => {
            let map: serde_json::Map<String, serde_json::Value> = catalog::languages()
                .iter()
                .map(|(name, code)| (name.to_string(), serde_json::Value::from(*code)))
                .collect();
            print_json(&map, pretty)
        }
        Table::Encodings => print_json(&catalog::encodings(), pretty),
    }
}

// WHY: shells expand most globs already, but quoted patterns and Windows shells do not
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.contains(['*', '?', '[']) {
            let mut matched: Vec<PathBuf> = glob::glob(input)
                .with_context(|| format!("Invalid glob pattern: {input}"))?
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!("Skipping unreadable glob match: {}", e);
                        None
                    }
                })
                .collect();
            if matched.is_empty() {
                warn!("Pattern matched no files: {}", input);
            }
            matched.sort();
            paths.extend(matched);
        } else {
            paths.push(PathBuf::from(input));
        }
    }
    Ok(paths)
}

async fn read_stdin() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut buffer)
        .await
        .context("Failed to read stdin")?;
    Ok(buffer)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logs on stderr keep stdout reserved for results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    if let Some(table) = args.list {
        return print_table(table, args.pretty);
    }

    let mut config = DetectorConfig::default();
    if let Some(workers) = args.workers {
        if workers == 0 {
            anyhow::bail!("--workers must be at least 1");
        }
        config.workers = workers;
    }
    let detector = Detector::new(config).context("Failed to start detector")?;

    let options = DetectOptions::default()
        .plain_text(!args.html)
        .language_hint(args.language_hint.as_str())
        .encoding_hint(args.encoding_hint.as_str())
        .tld_hint(args.tld_hint.as_str())
        .http_language_hint(args.http_hint.as_str());

    let start_time = Instant::now();
    let mut stats = RunStats::default();

    let read_stdin_only = args.inputs.is_empty() || args.inputs == ["-"];
    if read_stdin_only {
        let text = read_stdin().await?;
        stats.bytes_read = text.len() as u64;
        let report = Report::new("-".to_string(), detector.detect(text, &options).await);
        stats.record(&report);
        print_json(&report, args.pretty)?;
    } else {
        let paths = expand_inputs(&args.inputs)?;
        if paths.is_empty() {
            anyhow::bail!("No input files found");
        }
        info!("Detecting language of {} inputs with {} workers", paths.len(), detector.workers());

        let progress = if args.no_progress || paths.len() < 2 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(paths.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        };

        // WHY: buffered keeps output in input order while up to `workers` files are in flight
        let mut reports = stream::iter(paths)
            .map(|path| {
                let detector = detector.clone();
                let options = options.clone();
                async move {
                    let display = path.display().to_string();
                    match tokio::fs::read(&path).await {
                        Ok(bytes) => {
                            let len = bytes.len() as u64;
                            let result = detector.detect(bytes, &options).await;
                            Ok((Report::new(display, result), len))
                        }
                        Err(e) => Err((display, e)),
                    }
                }
            })
            .buffered(detector.workers());

        while let Some(outcome) = reports.next().await {
            match outcome {
                Ok((report, len)) => {
                    stats.bytes_read += len;
                    stats.record(&report);
                    progress.suspend(|| print_json(&report, args.pretty))?;
                }
                Err((path, e)) => {
                    let message = format!("Failed to read {path}: {e}");
                    if args.fail_fast {
                        progress.abandon();
                        anyhow::bail!(message);
                    }
                    warn!("{}", message);
                    stats.record_read_error();
                    let report = Report {
                        path,
                        error: Some(Failure::new(FailureKind::Unavailable, message)),
                        result: None,
                    };
                    progress.suspend(|| print_json(&report, args.pretty))?;
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();
    }

    stats.elapsed_ms = start_time.elapsed().as_millis() as u64;
    info!(
        "Detection complete: {} inputs, {} identified, {} unidentified, {} detection errors, {} read errors in {}ms",
        stats.inputs, stats.identified, stats.unidentified, stats.detect_errors, stats.read_errors, stats.elapsed_ms
    );

    if let Some(stats_path) = &args.stats_out {
        let content = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(stats_path, content)
            .await
            .with_context(|| format!("Failed to write stats to {}", stats_path.display()))?;
        info!("Run statistics written to {}", stats_path.display());
    }

    Ok(())
}
