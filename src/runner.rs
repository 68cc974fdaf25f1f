use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::config::Settings;
use crate::fetcher;
use crate::parser::{self, record::BusinessRecord};

/// Current UTC time in the record timestamp format.
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn build_client(settings: &Settings) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(Duration::from_secs(settings.timeout))
        .build()?;
    Ok(client)
}

/// Batch outcome counts, printed after a run.
pub struct RunStats {
    pub total: usize,
    pub ok: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl RunStats {
    pub fn collect(records: &[BusinessRecord]) -> Self {
        let errors = records.iter().filter(|r| r.error.is_some()).count();
        let not_found = records
            .iter()
            .filter(|r| r.is_page_not_found && r.error.is_none())
            .count();
        let total = records.len();
        RunStats {
            total,
            ok: total - not_found - errors,
            not_found,
            errors,
        }
    }

    pub fn print(&self) {
        println!(
            "Done: {} records ({} ok, {} not found, {} errors).",
            self.total, self.ok, self.not_found, self.errors
        );
    }
}

/// Fetch and process URLs concurrently, bounded by `concurrent_requests`.
/// Results come back in input order; a task that dies contributes a failure
/// record for its URL instead of aborting the batch.
pub async fn scrape_urls(urls: Vec<String>, settings: &Settings) -> Result<Vec<BusinessRecord>> {
    let client = Arc::new(build_client(settings)?);
    let concurrency = settings.concurrent_requests.max(1);
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let total = urls.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    // Channel: workers send indexed records, the main loop collects them.
    let (tx, mut rx) = tokio::sync::mpsc::channel::<(usize, BusinessRecord)>(concurrency * 2);

    for (idx, url) in urls.iter().cloned().enumerate() {
        let client = Arc::clone(&client);
        let sem = Arc::clone(&semaphore);
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let (body, status) = fetcher::fetch_html(&client, &url).await;
            let record = parser::process_page(body.as_deref(), status, &url, &current_timestamp());
            let _ = tx.send((idx, record)).await;
        });
    }

    // Drop our copy of tx so rx closes when all spawned tasks finish.
    drop(tx);

    let mut slots: Vec<Option<BusinessRecord>> = vec![None; total];
    while let Some((idx, record)) = rx.recv().await {
        slots[idx] = Some(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let records: Vec<BusinessRecord> = slots
        .into_iter()
        .zip(urls)
        .map(|(slot, url)| {
            slot.unwrap_or_else(|| {
                warn!("Task for {} produced no record", url);
                BusinessRecord::failure(&url, &current_timestamp(), "processing task failed")
            })
        })
        .collect();

    let stats = RunStats::collect(&records);
    info!(
        "Processed {} pages ({} ok, {} not found, {} errors)",
        stats.total, stats.ok, stats.not_found, stats.errors
    );

    Ok(records)
}
