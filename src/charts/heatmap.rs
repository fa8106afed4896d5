use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::correlation_color;
use crate::data::model::{Feature, IrisTable, Species};
use crate::stats::correlation_matrix;

/// Render the 4×4 Pearson correlation matrix of one species as a heatmap
/// with numeric annotations in every cell.
pub fn render(table: &IrisTable, species: Species, path: &Path) -> Result<()> {
    let matrix = correlation_matrix(table, species);

    let root = BitMapBackend::new(path, (680, 560)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Feature correlation ({species})"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(120)
        .build_cartesian_2d((0i32..4i32).into_segmented(), (0i32..4i32).into_segmented())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(4)
        .y_labels(4)
        .x_label_formatter(&feature_tick)
        .y_label_formatter(&feature_tick)
        .draw()?;

    let mut cells = Vec::with_capacity(16);
    let mut annotations = Vec::with_capacity(16);
    let annotation_style =
        TextStyle::from(("sans-serif", 16).into_font()).pos(Pos::new(HPos::Center, VPos::Center));

    for i in 0..4i32 {
        for j in 0..4i32 {
            let r = matrix[i as usize][j as usize];
            cells.push(Rectangle::new(
                [
                    (SegmentValue::Exact(i), SegmentValue::Exact(j)),
                    (SegmentValue::Exact(i + 1), SegmentValue::Exact(j + 1)),
                ],
                correlation_color(r).filled(),
            ));
            annotations.push(Text::new(
                format!("{r:.2}"),
                (SegmentValue::CenterOf(i), SegmentValue::CenterOf(j)),
                annotation_style.clone(),
            ));
        }
    }
    chart.draw_series(cells)?;
    chart.draw_series(annotations)?;

    root.present()?;
    Ok(())
}

/// Axis tick labels: feature names at segment centres, nothing at the edges.
fn feature_tick(seg: &SegmentValue<i32>) -> String {
    match seg {
        SegmentValue::CenterOf(i) if (0..4).contains(i) => {
            Feature::ALL[*i as usize].label().to_string()
        }
        _ => String::new(),
    }
}
