use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Violations of the fixed 150×5 Iris schema. All of these are fatal: every
/// downstream stage assumes the invariants checked by the loader.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("row {row}: unknown class code {code} (expected 0, 1 or 2)")]
    UnknownClassCode { row: usize, code: i64 },

    #[error("row {row}: {feature} = {value} is outside the plausible range (0, 10) cm")]
    ImplausibleMeasurement {
        row: usize,
        feature: &'static str,
        value: f64,
    },

    #[error("expected 150 records, found {0}")]
    WrongRecordCount(usize),

    #[error("expected 50 records per species, found {count} for {species}")]
    UnbalancedClasses { species: Species, count: usize },
}

// ---------------------------------------------------------------------------
// Species — the categorical class label
// ---------------------------------------------------------------------------

/// One of the three fixed Iris species. The embedded dataset stores these as
/// integer codes; the loader remaps them to names immediately after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// All species, in class-code order.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Fixed lookup from the dataset's integer class codes.
    pub fn from_code(row: usize, code: i64) -> Result<Self, SchemaError> {
        match code {
            0 => Ok(Species::Setosa),
            1 => Ok(Species::Versicolor),
            2 => Ok(Species::Virginica),
            _ => Err(SchemaError::UnknownClassCode { row, code }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Feature — the four numeric measurement columns
// ---------------------------------------------------------------------------

/// One of the four numeric measurement columns, all in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    /// All features, in dataset column order.
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    /// Column label used in `iris.csv` and the summary report. Matches the
    /// upstream dataset's column names.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }

    /// Snake-case stem used in chart filenames (`hist_sepal_length.png`).
    pub fn stem(&self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal_length",
            Feature::SepalWidth => "sepal_width",
            Feature::PetalLength => "petal_length",
            Feature::PetalWidth => "petal_width",
        }
    }

    /// Read this feature's value out of a record.
    pub fn of(&self, record: &IrisRecord) -> f64 {
        match self {
            Feature::SepalLength => record.sepal_length,
            Feature::SepalWidth => record.sepal_width,
            Feature::PetalLength => record.petal_length,
            Feature::PetalWidth => record.petal_width,
        }
    }
}

// ---------------------------------------------------------------------------
// IrisRecord — one row of the table
// ---------------------------------------------------------------------------

/// A single measured flower: four measurements plus the class label.
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrisRecord {
    #[serde(rename = "sepal length (cm)")]
    pub sepal_length: f64,
    #[serde(rename = "sepal width (cm)")]
    pub sepal_width: f64,
    #[serde(rename = "petal length (cm)")]
    pub petal_length: f64,
    #[serde(rename = "petal width (cm)")]
    pub petal_width: f64,
    pub species: Species,
}

// ---------------------------------------------------------------------------
// IrisTable — the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full ordered table. Built once by the loader (which validates the
/// fixed schema) and read-only afterwards.
#[derive(Debug, Clone)]
pub struct IrisTable {
    records: Vec<IrisRecord>,
}

impl IrisTable {
    /// Wrap validated records. The loader is the only production caller;
    /// schema checks happen there, so a constructed table always holds the
    /// 150-record / 50-per-class invariant.
    pub(crate) fn new(records: Vec<IrisRecord>) -> Self {
        IrisTable { records }
    }

    pub fn records(&self) -> &[IrisRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One feature column as a dense vector, in table order.
    pub fn column(&self, feature: Feature) -> Vec<f64> {
        self.records.iter().map(|r| feature.of(r)).collect()
    }

    /// One feature column restricted to a single species.
    pub fn column_of(&self, feature: Feature, species: Species) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.species == species)
            .map(|r| feature.of(r))
            .collect()
    }

    /// Number of records carrying the given label.
    pub fn class_count(&self, species: Species) -> usize {
        self.records.iter().filter(|r| r.species == species).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_codes_map_to_fixed_names() {
        assert_eq!(Species::from_code(0, 0), Ok(Species::Setosa));
        assert_eq!(Species::from_code(1, 1), Ok(Species::Versicolor));
        assert_eq!(Species::from_code(2, 2), Ok(Species::Virginica));
        assert_eq!(
            Species::from_code(7, 3),
            Err(SchemaError::UnknownClassCode { row: 7, code: 3 })
        );
    }

    #[test]
    fn feature_accessor_matches_fields() {
        let rec = IrisRecord {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        };
        assert_eq!(Feature::SepalLength.of(&rec), 5.1);
        assert_eq!(Feature::SepalWidth.of(&rec), 3.5);
        assert_eq!(Feature::PetalLength.of(&rec), 1.4);
        assert_eq!(Feature::PetalWidth.of(&rec), 0.2);
    }
}
