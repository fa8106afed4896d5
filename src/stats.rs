use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::{Feature, IrisTable, Species};

/// Title line of `summary.txt`. Kept byte-for-byte stable; the end-to-end
/// test greps for it.
pub const SUMMARY_TITLE: &str = "Summary of Each Variable in the Iris Dataset";

// ---------------------------------------------------------------------------
// FeatureSummary — the 8 descriptive statistics for one column
// ---------------------------------------------------------------------------

/// Descriptive statistics of one numeric column: count, mean, sample
/// standard deviation (n − 1 denominator), min, quartiles with linear
/// interpolation, max. Computed once from the full column, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl FeatureSummary {
    /// Describe a non-empty column.
    pub fn describe(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "cannot summarize an empty column");

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        FeatureSummary {
            count,
            mean,
            std_dev,
            min: sorted[0],
            p25: percentile(&sorted, 0.25),
            p50: percentile(&sorted, 0.50),
            p75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

/// Percentile of a sorted slice with linear interpolation between the two
/// nearest ranks (the same method pandas and numpy default to).
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Summaries for all four features, in column order.
pub fn summarize(table: &IrisTable) -> [(Feature, FeatureSummary); 4] {
    Feature::ALL.map(|f| (f, FeatureSummary::describe(&table.column(f))))
}

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Pearson correlation coefficient of two equal-length columns.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    cov / (vx.sqrt() * vy.sqrt())
}

/// 4×4 Pearson correlation matrix over the feature columns of one species.
/// Row/column order follows [`Feature::ALL`].
pub fn correlation_matrix(table: &IrisTable, species: Species) -> [[f64; 4]; 4] {
    let columns: Vec<Vec<f64>> = Feature::ALL
        .iter()
        .map(|&f| table.column_of(f, species))
        .collect();

    let mut matrix = [[0.0; 4]; 4];
    for (i, ci) in columns.iter().enumerate() {
        for (j, cj) in columns.iter().enumerate() {
            matrix[i][j] = if i == j { 1.0 } else { pearson(ci, cj) };
        }
    }
    matrix
}

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

/// Render the summary as the fixed-layout text report. Statistics are rows
/// and features are columns, mirroring the layout of the original report.
/// Formatting is fully fixed so the output bytes are identical across runs.
pub fn render_summary_report(table: &IrisTable) -> String {
    let summaries = summarize(table);

    let mut out = String::new();
    out.push_str(SUMMARY_TITLE);
    out.push_str("\n\n");

    out.push_str(&format!("{:<6}", ""));
    for (feature, _) in &summaries {
        out.push_str(&format!("{:>20}", feature.label()));
    }
    out.push('\n');

    let rows: [(&str, fn(&FeatureSummary) -> f64); 8] = [
        ("count", |s| s.count as f64),
        ("mean", |s| s.mean),
        ("std", |s| s.std_dev),
        ("min", |s| s.min),
        ("25%", |s| s.p25),
        ("50%", |s| s.p50),
        ("75%", |s| s.p75),
        ("max", |s| s.max),
    ];
    for (name, project) in rows {
        out.push_str(&format!("{name:<6}"));
        for (_, summary) in &summaries {
            out.push_str(&format!("{:>20.6}", project(summary)));
        }
        out.push('\n');
    }
    out
}

/// Write the summary report to `path`, overwriting any existing file.
pub fn write_summary_report(table: &IrisTable, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    file.write_all(render_summary_report(table).as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 0.25), 1.75);
        assert_eq!(percentile(&sorted, 0.5), 2.5);
        assert_eq!(percentile(&sorted, 0.75), 3.25);
        assert_eq!(percentile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn describe_matches_hand_computed_values() {
        let summary = FeatureSummary::describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(summary.count, 8);
        assert_eq!(summary.mean, 5.0);
        // Sample variance: sum of squared deviations 32, / 7.
        assert!((summary.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
    }

    #[test]
    fn summary_counts_and_ordering_hold_for_every_feature() {
        let table = load_embedded().unwrap();
        for (feature, s) in summarize(&table) {
            assert_eq!(s.count, 150, "{feature:?}");
            assert!(s.min <= s.p25, "{feature:?}");
            assert!(s.p25 <= s.p50, "{feature:?}");
            assert!(s.p50 <= s.p75, "{feature:?}");
            assert!(s.p75 <= s.max, "{feature:?}");
        }
    }

    #[test]
    fn pearson_is_one_for_identical_columns() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
        let y = [4.0, 3.0, 2.0, 1.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let table = load_embedded().unwrap();
        for species in Species::ALL {
            let m = correlation_matrix(&table, species);
            for i in 0..4 {
                assert_eq!(m[i][i], 1.0);
                for j in 0..4 {
                    assert!((m[i][j] - m[j][i]).abs() < 1e-12);
                    assert!(m[i][j] >= -1.0 - 1e-12 && m[i][j] <= 1.0 + 1e-12);
                }
            }
        }
    }

    #[test]
    fn report_is_deterministic_and_carries_the_title() {
        let table = load_embedded().unwrap();
        let a = render_summary_report(&table);
        let b = render_summary_report(&table);
        assert_eq!(a, b);
        assert!(a.starts_with(SUMMARY_TITLE));
        // 1 title + 1 blank + 1 header + 8 statistic rows.
        assert_eq!(a.lines().count(), 11);
    }

    #[test]
    fn reported_petal_length_min_matches_the_raw_column() {
        let table = load_embedded().unwrap();
        let raw_min = table
            .column(Feature::PetalLength)
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        let summary = FeatureSummary::describe(&table.column(Feature::PetalLength));
        assert_eq!(summary.min, raw_min);
        assert_eq!(raw_min, 1.0);
    }
}
