use std::path::Path;

use anyhow::{Context, Result};

use super::model::{IrisRecord, IrisTable};

/// Write the full table to `path` as comma-delimited text: one header row
/// (the four feature labels plus `species`), then one row per record in
/// table order. An existing file is overwritten. Any write failure is fatal
/// to the pipeline.
pub fn write_csv(table: &IrisTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for record in table.records() {
        writer
            .serialize(record)
            .with_context(|| format!("writing record to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Read a table back from a file written by [`write_csv`]. Only used by
/// tests to check the round-trip, but kept here so the reader and writer
/// share the record type.
pub fn read_csv(path: &Path) -> Result<Vec<IrisRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<IrisRecord>().enumerate() {
        records.push(result.with_context(|| format!("{} row {row}", path.display()))?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    #[test]
    fn round_trip_reproduces_the_table() {
        let table = load_embedded().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.csv");

        write_csv(&table, &path).unwrap();
        let reread = read_csv(&path).unwrap();

        assert_eq!(reread.len(), table.len());
        assert_eq!(reread, table.records());
    }

    #[test]
    fn header_plus_one_line_per_record() {
        let table = load_embedded().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.csv");
        write_csv(&table, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 151);
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),species"
        );
    }

    #[test]
    fn overwrites_an_existing_file() {
        let table = load_embedded().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iris.csv");

        std::fs::write(&path, "stale contents").unwrap();
        write_csv(&table, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale contents"));
        assert_eq!(text.lines().count(), 151);
    }
}
