use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::charts::histogram::{bin_counts, BIN_COUNT};
use crate::color::class_color;
use crate::data::model::{Feature, IrisTable, Species};

/// Render the combined 4×4 pairwise-relationship grid: per-class histograms
/// on the diagonal, class-coloured scatters everywhere else.
pub fn render(table: &IrisTable, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 1200)).into_drawing_area();
    root.fill(&WHITE)?;

    let cells = root.split_evenly((4, 4));
    for (idx, cell) in cells.iter().enumerate() {
        let row = Feature::ALL[idx / 4];
        let col = Feature::ALL[idx % 4];
        if row == col {
            diagonal_histogram(table, row, cell)?;
        } else {
            scatter_cell(table, col, row, cell)?;
        }
    }

    root.present()?;
    Ok(())
}

/// One diagonal cell: overlaid per-class histograms of a single feature.
fn diagonal_histogram<DB: DrawingBackend>(
    table: &IrisTable,
    feature: Feature,
    cell: &DrawingArea<DB, plotters::coord::Shift>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let values = table.column(feature);
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (hi - lo) / BIN_COUNT as f64;

    let per_class: Vec<(Species, Vec<u32>)> = Species::ALL
        .iter()
        .map(|&species| {
            let column = table.column_of(feature, species);
            (species, bin_counts(&column, lo, hi, BIN_COUNT))
        })
        .collect();
    let max_count = per_class
        .iter()
        .flat_map(|(_, counts)| counts.iter().copied())
        .max()
        .unwrap_or(0);

    let mut chart = ChartBuilder::on(cell)
        .caption(feature.label(), ("sans-serif", 16))
        .margin(5)
        .x_label_area_size(25)
        .y_label_area_size(30)
        .build_cartesian_2d(lo..hi, 0u32..max_count + 1)?;
    chart.configure_mesh().disable_mesh().draw()?;

    for (species, counts) in &per_class {
        let color = class_color(*species);
        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = lo + i as f64 * width;
            Rectangle::new([(x0, 0), (x0 + width, count)], color.mix(0.5).filled())
        }))?;
    }
    Ok(())
}

/// One off-diagonal cell: scatter of `x` against `y`, coloured by class.
fn scatter_cell<DB: DrawingBackend>(
    table: &IrisTable,
    x: Feature,
    y: Feature,
    cell: &DrawingArea<DB, plotters::coord::Shift>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_lo, x_hi) = super::padded_range(&table.column(x));
    let (y_lo, y_hi) = super::padded_range(&table.column(y));

    let mut chart = ChartBuilder::on(cell)
        .caption(
            format!("{} / {}", x.stem(), y.stem()),
            ("sans-serif", 16),
        )
        .margin(5)
        .x_label_area_size(25)
        .y_label_area_size(30)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart.configure_mesh().disable_mesh().draw()?;

    for species in Species::ALL {
        let color = class_color(species);
        chart.draw_series(
            table
                .records()
                .iter()
                .filter(|r| r.species == species)
                .map(|r| Circle::new((x.of(r), y.of(r)), 2, color.filled())),
        )?;
    }
    Ok(())
}
