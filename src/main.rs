mod config;
mod fetcher;
mod parser;
mod runner;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::parser::record::BusinessRecord;

#[derive(Parser)]
#[command(name = "yelp_scraper", about = "Yelp business page scraper")]
struct Cli {
    /// Settings file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and process business pages from a URL list file
    Run {
        /// Input URLs file, one URL per line (# comments allowed)
        #[arg(short, long, default_value = "data/input_urls.txt")]
        input: PathBuf,
        /// Output JSON file (default from settings)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max URLs to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Fetch and process a single URL, printing the record to stdout
    Probe { url: String },
    /// Process saved HTML (a file or a directory of .html files) without fetching
    Parse {
        /// HTML file or directory
        input: PathBuf,
        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, config_err) = match config::load(&cli.config) {
        Ok(settings) => (settings, None),
        Err(e) => (config::Settings::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .init();

    if let Some(e) = config_err {
        warn!("{:#}; using default settings", e);
    }

    let t0 = Instant::now();

    let result = match cli.command {
        Commands::Run { input, output, limit } => {
            let mut urls = read_input_urls(&input)?;
            if let Some(limit) = limit {
                urls.truncate(limit);
            }
            if urls.is_empty() {
                bail!("No URLs to process in {}", input.display());
            }
            info!("Processing {} URLs", urls.len());
            let records = runner::scrape_urls(urls, &settings).await?;
            let output = output.unwrap_or_else(|| PathBuf::from(&settings.output_file));
            write_output(&records, &output)?;
            runner::RunStats::collect(&records).print();
            Ok(())
        }
        Commands::Probe { url } => {
            let client = runner::build_client(&settings)?;
            let (body, status) = fetcher::fetch_html(&client, &url).await;
            let record =
                parser::process_page(body.as_deref(), status, &url, &runner::current_timestamp());
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Commands::Parse { input, output } => {
            let files = collect_html_files(&input)?;
            if files.is_empty() {
                bail!("No .html files found under {}", input.display());
            }
            println!("Parsing {} files...", files.len());
            let records = parse_files(&files);
            match output {
                Some(path) => write_output(&records, &path)?,
                None => println!("{}", serde_json::to_string_pretty(&records)?),
            }
            runner::RunStats::collect(&records).print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn read_input_urls(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Input URLs file not found: {}", path.display()))?;

    let urls: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        warn!("No URLs found in {}", path.display());
    }
    Ok(urls)
}

fn write_output(records: &[BusinessRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn collect_html_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input)
        .with_context(|| format!("Cannot read directory {}", input.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();
    Ok(files)
}

/// Process saved pages in parallel; a file that cannot be read still yields
/// a failure record so the output stays one record per input.
fn parse_files(files: &[PathBuf]) -> Vec<BusinessRecord> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let records: Vec<BusinessRecord> = files
        .par_iter()
        .map(|path| {
            let url = format!("file://{}", path.display());
            let timestamp = runner::current_timestamp();
            let record = match fs::read_to_string(path) {
                Ok(body) => parser::process_page(Some(&body), 200, &url, &timestamp),
                Err(e) => BusinessRecord::failure(&url, &timestamp, &format!("read failed: {e}")),
            };
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();
    records
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
