use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::color::class_color;
use crate::data::model::{Feature, IrisTable, Species};

/// Render one feature-pair scatter plot, points coloured by species with
/// one legend entry per species.
pub fn render(table: &IrisTable, x: Feature, y: Feature, path: &Path) -> Result<()> {
    let (x_lo, x_hi) = super::padded_range(&table.column(x));
    let (y_lo, y_hi) = super::padded_range(&table.column(y));

    let root = BitMapBackend::new(path, super::IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} vs {}", x.label(), y.label()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(x.label())
        .y_desc(y.label())
        .draw()?;

    for species in Species::ALL {
        let color = class_color(species);
        chart
            .draw_series(
                table
                    .records()
                    .iter()
                    .filter(|r| r.species == species)
                    .map(|r| Circle::new((x.of(r), y.of(r)), 4, color.filled())),
            )?
            .label(species.name())
            .legend(move |(cx, cy)| Circle::new((cx, cy), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
