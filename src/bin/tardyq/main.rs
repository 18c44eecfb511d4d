mod args;
mod util;

use std::fs::File;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use serde::Deserialize;
use tardy::types::job::Job;
use tardy::types::queue::JobQueue;
use tracing::{debug, error, info, Level};

use crate::args::Args;
use crate::util::duration_to_human_str;

/// A job file entry. Due times are seconds relative to load time, so a
/// file keeps its meaning no matter when it is loaded.
#[derive(Debug, Deserialize)]
struct JobEntry {
    id: u64,
    name: String,
    /// seconds from load time until the job is due
    delay: u64,
    /// acceptable scheduling slack, in seconds
    #[serde(default)]
    tolerance: u64,
    /// command line the job would run; reported, never executed
    #[serde(default)]
    command: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging
    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .init();
    } else {
        tracing_subscriber::fmt().json().init();
    }

    if let Err(error) = begin(args) {
        error!(%error, "encountered runtime error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn begin(args: Args) -> Result<()> {
    let file = File::open(&args.jobs)
        .with_context(|| format!("opening {}", args.jobs.display()))?;
    let entries: Vec<JobEntry> =
        serde_yaml::from_reader(file).context("parsing job file")?;
    info!(jobs = entries.len(), "loaded job file");

    let t0 = Instant::now();
    let mut queue: JobQueue<String> = entries
        .into_iter()
        .map(|e| {
            Job::new(
                e.id,
                e.name,
                t0 + Duration::from_secs(e.delay),
                Duration::from_secs(e.tolerance),
                e.command,
            )
        })
        .collect();

    // Drain in priority order, reporting rather than waiting: the due
    // times say how far out each job is, not how long to sleep here.
    let limit = args.limit.unwrap_or(queue.len());
    let mut order = Vec::new();
    while order.len() < limit {
        let job = match queue.pop() {
            Some(job) => job,
            None => break,
        };
        debug!(id = job.id, name = %job.name, command = %job.payload,
            "popped");
        println!(
            "{:>3}. {} (id {}, due +{}, tolerance {})",
            order.len() + 1,
            job.name,
            job.id,
            duration_to_human_str(job.scheduled_at.duration_since(t0)),
            duration_to_human_str(job.tolerance),
        );
        order.push(job.name);
    }

    if !queue.is_empty() {
        info!(remaining = queue.len(), "stopped before the queue drained");
    }

    println!("dispatch order: {}", order.iter().join(", "));
    print!("{}", serde_yaml::to_string(&queue.stats())?);

    Ok(())
}
