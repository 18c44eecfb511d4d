use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub(crate) struct Args {
    /// Job file to load (YAML).
    #[arg(short, long, default_value = "jobs.yaml")]
    pub(crate) jobs: PathBuf,
    /// Stops after reporting this many jobs.
    #[arg(short = 'n', long)]
    pub(crate) limit: Option<usize>,
    /// Enables human-friendly logging.
    #[arg(short, long, default_value_t)]
    pub(crate) debug: bool,
}
