use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::color::class_color;
use crate::data::model::{Feature, IrisTable, Species};

/// Render one per-feature box plot: three boxes grouped by species, each in
/// its class colour. `Quartiles`/`Boxplot` draw in `f32`, so the y range is
/// built in `f32` as well.
pub fn render(table: &IrisTable, feature: Feature, path: &Path) -> Result<()> {
    let labels: Vec<&str> = Species::ALL.iter().map(|s| s.name()).collect();
    let dataset: Vec<(Species, Quartiles)> = Species::ALL
        .iter()
        .map(|&species| (species, Quartiles::new(&table.column_of(feature, species))))
        .collect();

    let (y_lo, y_hi) = super::padded_range(&table.column(feature));

    let root = BitMapBackend::new(path, super::IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} by species", feature.label()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(labels[..].into_segmented(), (y_lo as f32)..(y_hi as f32))?;

    chart
        .configure_mesh()
        .x_desc("species")
        .y_desc(feature.label())
        .draw()?;

    chart.draw_series(dataset.iter().enumerate().map(|(i, (species, quartiles))| {
        Boxplot::new_vertical(SegmentValue::CenterOf(&labels[i]), quartiles)
            .width(25)
            .whisker_width(0.5)
            .style(class_color(*species).stroke_width(2))
    }))?;

    root.present()?;
    Ok(())
}
