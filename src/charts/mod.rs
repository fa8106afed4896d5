/// Chart layer: renders the fixed catalogue of PNG images, one independent
/// sub-step per chart family. Every renderer owns its drawing area for the
/// duration of one file and finalizes it before returning, so no chart
/// state leaks into the next chart.
pub mod boxplot;
pub mod heatmap;
pub mod histogram;
pub mod pairgrid;
pub mod scatter;

use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::data::model::{Feature, IrisTable, Species};

/// Common canvas size for the single-panel charts.
pub(crate) const IMAGE_SIZE: (u32, u32) = (640, 480);

/// The two fixed scatter-plot feature pairs.
const SCATTER_PAIRS: [(Feature, Feature, &str); 2] = [
    (Feature::SepalLength, Feature::SepalWidth, "scatter_sepal.png"),
    (Feature::PetalLength, Feature::PetalWidth, "scatter_petal.png"),
];

/// Filenames of every chart the pipeline produces, in render order.
/// 4 histograms + 2 scatters + 4 box plots + 3 heatmaps + 1 pair grid.
pub fn catalogue() -> Vec<String> {
    let mut files = Vec::new();
    for feature in Feature::ALL {
        files.push(format!("hist_{}.png", feature.stem()));
    }
    for (_, _, name) in SCATTER_PAIRS {
        files.push(name.to_string());
    }
    for feature in Feature::ALL {
        files.push(format!("box_{}.png", feature.stem()));
    }
    for species in Species::ALL {
        files.push(format!("heatmap_{}.png", species.name()));
    }
    files.push("pairplot.png".to_string());
    files
}

/// Render the whole catalogue into `out_dir`, in fixed order. The first
/// failing chart aborts the run; charts already written stay on disk.
pub fn render_all(table: &IrisTable, out_dir: &Path) -> Result<()> {
    ensure!(!table.is_empty(), "cannot render charts from an empty table");

    for feature in Feature::ALL {
        let path = out_dir.join(format!("hist_{}.png", feature.stem()));
        log::debug!("rendering {}", path.display());
        histogram::render(table, feature, &path)
            .with_context(|| format!("histogram for {}", feature.label()))?;
    }

    for (x, y, name) in SCATTER_PAIRS {
        let path = out_dir.join(name);
        log::debug!("rendering {}", path.display());
        scatter::render(table, x, y, &path)
            .with_context(|| format!("scatter plot {name}"))?;
    }

    for feature in Feature::ALL {
        let path = out_dir.join(format!("box_{}.png", feature.stem()));
        log::debug!("rendering {}", path.display());
        boxplot::render(table, feature, &path)
            .with_context(|| format!("box plot for {}", feature.label()))?;
    }

    for species in Species::ALL {
        let path = out_dir.join(format!("heatmap_{}.png", species.name()));
        log::debug!("rendering {}", path.display());
        heatmap::render(table, species, &path)
            .with_context(|| format!("correlation heatmap for {species}"))?;
    }

    let path = out_dir.join("pairplot.png");
    log::debug!("rendering {}", path.display());
    pairgrid::render(table, &path).context("pairwise grid")?;

    Ok(())
}

/// Min and max of a column, padded a little so points never sit on the
/// chart border.
pub(crate) fn padded_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((hi - lo) * 0.05).max(0.1);
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_lists_fourteen_fixed_names() {
        let files = catalogue();
        assert_eq!(files.len(), 14);
        assert!(files.contains(&"hist_sepal_length.png".to_string()));
        assert!(files.contains(&"scatter_petal.png".to_string()));
        assert!(files.contains(&"box_petal_width.png".to_string()));
        assert!(files.contains(&"heatmap_versicolor.png".to_string()));
        assert_eq!(files.last().unwrap(), "pairplot.png");
    }

    #[test]
    fn padded_range_contains_the_data() {
        let (lo, hi) = padded_range(&[1.0, 2.0, 3.0]);
        assert!(lo < 1.0);
        assert!(hi > 3.0);
    }
}
