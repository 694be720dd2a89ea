//! Ingest a TSPSuite result tree and print the model as JSON.
//!
//! Usage:
//!
//! ```text
//! cargo run --example ingest_tree -- <results-dir>
//! RUST_LOG=tspsuite_ingest=debug cargo run --example ingest_tree -- <results-dir>
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tspsuite_ingest::model::ExperimentStore;
use tspsuite_ingest::TspSuiteLoader;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(root) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: ingest_tree <results-dir>");
    };

    let mut store = ExperimentStore::new();
    let stats = TspSuiteLoader::new()
        .load(&root, &mut store)
        .with_context(|| format!("ingesting {}", root.display()))?;

    eprintln!(
        "{} runs from {} files in {} directories ({} files skipped), {} experiments",
        stats.runs_loaded,
        stats.files_loaded,
        stats.directories_visited,
        stats.files_skipped,
        store.experiment_count()
    );
    println!("{}", store.to_json()?);
    Ok(())
}
