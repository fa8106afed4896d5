use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::data::model::{Feature, IrisTable};

/// Fixed bin count for every per-feature histogram.
pub const BIN_COUNT: usize = 15;

/// Render one per-feature histogram: 15 equal-width bins over the observed
/// [min, max], filled bars with a black edge stroke.
pub fn render(table: &IrisTable, feature: Feature, path: &Path) -> Result<()> {
    let values = table.column(feature);
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let counts = bin_counts(&values, lo, hi, BIN_COUNT);
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let width = (hi - lo) / BIN_COUNT as f64;

    let root = BitMapBackend::new(path, super::IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Histogram of {}", feature.label()), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(lo..hi, 0u32..max_count + 1)?;

    chart
        .configure_mesh()
        .x_desc(feature.label())
        .y_desc("frequency")
        .draw()?;

    // Filled bars first, then the edge stroke on top.
    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = lo + i as f64 * width;
        Rectangle::new([(x0, 0), (x0 + width, count)], BLUE.mix(0.4).filled())
    }))?;
    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = lo + i as f64 * width;
        Rectangle::new([(x0, 0), (x0 + width, count)], BLACK.stroke_width(1))
    }))?;

    root.present()?;
    Ok(())
}

/// Histogram counts over `bins` equal-width bins spanning [lo, hi]. Values
/// equal to `hi` land in the last bin.
pub(crate) fn bin_counts(values: &[f64], lo: f64, hi: f64, bins: usize) -> Vec<u32> {
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}
