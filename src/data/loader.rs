use anyhow::{Context, Result};

use super::model::{Feature, IrisRecord, IrisTable, SchemaError, Species};

/// The embedded dataset: 150 rows of `sepal length, sepal width, petal
/// length, petal width, class code`. This is the table as shipped by
/// scikit-learn's `load_iris()` (rows 35 and 38 carry Fisher's corrected
/// values, not the erroneous ones in the UCI archive), so downstream
/// numbers match the original report.
const IRIS_DATA: &str = include_str!("iris.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse the embedded dataset into a validated [`IrisTable`], remapping the
/// integer class codes to species names.
///
/// This is the only constructor of the table used by the pipeline. Any parse
/// or schema failure here is fatal and happens before a single output file
/// is created.
pub fn load_embedded() -> Result<IrisTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(IRIS_DATA.as_bytes());

    let mut records = Vec::with_capacity(150);

    for (row, result) in reader.records().enumerate() {
        let raw = result.with_context(|| format!("embedded dataset row {row}"))?;

        let field = |idx: usize| -> Result<f64> {
            raw.get(idx)
                .with_context(|| format!("row {row}: missing field {idx}"))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("row {row}, field {idx}: not a number"))
        };

        let sepal_length = field(0)?;
        let sepal_width = field(1)?;
        let petal_length = field(2)?;
        let petal_width = field(3)?;

        let code: i64 = raw
            .get(4)
            .with_context(|| format!("row {row}: missing class code"))?
            .trim()
            .parse()
            .with_context(|| format!("row {row}: class code is not an integer"))?;

        let record = IrisRecord {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
            species: Species::from_code(row, code)?,
        };
        validate_measurements(row, &record)?;
        records.push(record);
    }

    validate_shape(&records)?;
    Ok(IrisTable::new(records))
}

// ---------------------------------------------------------------------------
// Schema validation
// ---------------------------------------------------------------------------

/// Every measurement must be finite and within (0, 10) cm.
fn validate_measurements(row: usize, record: &IrisRecord) -> Result<(), SchemaError> {
    for feature in Feature::ALL {
        let value = feature.of(record);
        if !value.is_finite() || value <= 0.0 || value >= 10.0 {
            return Err(SchemaError::ImplausibleMeasurement {
                row,
                feature: feature.label(),
                value,
            });
        }
    }
    Ok(())
}

/// 150 records total, 50 per species.
fn validate_shape(records: &[IrisRecord]) -> Result<(), SchemaError> {
    if records.len() != 150 {
        return Err(SchemaError::WrongRecordCount(records.len()));
    }
    for species in Species::ALL {
        let count = records.iter().filter(|r| r.species == species).count();
        if count != 50 {
            return Err(SchemaError::UnbalancedClasses { species, count });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_150_records_50_per_species() {
        let table = load_embedded().unwrap();
        assert_eq!(table.len(), 150);
        for species in Species::ALL {
            assert_eq!(table.class_count(species), 50, "{species}");
        }
    }

    #[test]
    fn all_measurements_are_plausible() {
        let table = load_embedded().unwrap();
        for record in table.records() {
            for feature in Feature::ALL {
                let v = feature.of(record);
                assert!(v.is_finite(), "{feature:?} is not finite");
                assert!(v > 0.0 && v < 10.0, "{feature:?} = {v} out of range");
            }
        }
    }

    #[test]
    fn first_and_last_rows_match_the_upstream_table() {
        let table = load_embedded().unwrap();
        let first = &table.records()[0];
        assert_eq!(
            first,
            &IrisRecord {
                sepal_length: 5.1,
                sepal_width: 3.5,
                petal_length: 1.4,
                petal_width: 0.2,
                species: Species::Setosa,
            }
        );
        let last = &table.records()[149];
        assert_eq!(last.species, Species::Virginica);
        assert_eq!(last.petal_length, 5.1);
    }

    #[test]
    fn rows_35_and_38_carry_the_corrected_values() {
        // These two rows are wrong in the UCI archive; scikit-learn ships
        // Fisher's values and so does the embedded table.
        let table = load_embedded().unwrap();
        let row35 = &table.records()[34];
        assert_eq!(
            (
                row35.sepal_length,
                row35.sepal_width,
                row35.petal_length,
                row35.petal_width
            ),
            (4.9, 3.1, 1.5, 0.2)
        );
        let row38 = &table.records()[37];
        assert_eq!(
            (
                row38.sepal_length,
                row38.sepal_width,
                row38.petal_length,
                row38.petal_width
            ),
            (4.9, 3.6, 1.4, 0.1)
        );
    }

    #[test]
    fn column_means_match_the_upstream_table() {
        let table = load_embedded().unwrap();
        let expected = [
            (Feature::SepalLength, 5.843333),
            (Feature::SepalWidth, 3.057333),
            (Feature::PetalLength, 3.758000),
            (Feature::PetalWidth, 1.199333),
        ];
        for (feature, mean) in expected {
            let column = table.column(feature);
            let actual = column.iter().sum::<f64>() / column.len() as f64;
            assert!((actual - mean).abs() < 5e-7, "{feature:?}: {actual}");
        }
    }

    #[test]
    fn rejects_out_of_range_measurements() {
        let record = IrisRecord {
            sepal_length: -1.0,
            sepal_width: 3.0,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        };
        assert!(matches!(
            validate_measurements(0, &record),
            Err(SchemaError::ImplausibleMeasurement { row: 0, .. })
        ));
    }
}
