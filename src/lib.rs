/*! Runs the queries of an input file and writes their results to an output file.

The evaluation itself lives in `relq-core`; this crate reads the input, formats the
outcomes and handles the command line.
*/
pub mod config;
pub mod format;
pub mod loader;

use anyhow::{Context, Result};
use config::Config;
use format::Report;
use std::{fmt, fs, path::PathBuf};
use tracing::info;

/// Is what a run did, reported once it is done.
#[derive(Clone, PartialEq, Debug)]
pub struct Summary {
    pub queries: usize,
    pub failed: usize,
    pub output: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Executed {} queries", self.queries)?;
        if self.failed > 0 {
            write!(f, " ({} failed)", self.failed)?;
        }
        write!(f, ". Results written to {}", self.output.display())
    }
}

/// Reads the relations and queries of `config.input`, evaluates every query and
/// writes the report to `config.output`. Failing queries are reported in the output;
/// only unreadable input, malformed relations and unwritable output fail the run.
pub fn run(config: &Config) -> Result<Summary> {
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read input file {}", config.input.display()))?;
    let input = loader::parse(&text)
        .with_context(|| format!("failed to parse input file {}", config.input.display()))?;
    let database = loader::load(&input)?;

    let outcomes = relq_core::run(&database, &input.queries);
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(queries = outcomes.len(), failed, "ran queries");

    fs::write(&config.output, Report(&outcomes).to_string())
        .with_context(|| format!("failed to write output file {}", config.output.display()))?;

    Ok(Summary {
        queries: outcomes.len(),
        failed,
        output: config.output.clone(),
    })
}
