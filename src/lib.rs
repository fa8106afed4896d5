//! Report pipeline for the Iris dataset.
//!
//! One strictly sequential run: load the embedded 150-record table, export
//! it to `iris.csv`, write the descriptive-statistics report `summary.txt`,
//! then render the fixed catalogue of chart images. Any stage failure is
//! fatal; nothing is retried and already-written files are left in place.

pub mod charts;
pub mod color;
pub mod data;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};

/// Run the whole pipeline, writing every output file into `out_dir`.
/// Stages run in fixed order and each depends only on the loaded table.
pub fn run(out_dir: &Path) -> Result<()> {
    let table = data::loader::load_embedded().context("loader: embedded dataset")?;
    log::info!("loaded {} records", table.len());

    let csv_path = out_dir.join("iris.csv");
    data::export::write_csv(&table, &csv_path).context("exporter: iris.csv")?;
    log::info!("wrote {}", csv_path.display());

    let summary_path = out_dir.join("summary.txt");
    stats::write_summary_report(&table, &summary_path).context("summarizer: summary.txt")?;
    log::info!("wrote {}", summary_path.display());

    charts::render_all(&table, out_dir).context("visualizer: chart catalogue")?;
    log::info!("rendered {} charts", charts::catalogue().len());

    Ok(())
}
