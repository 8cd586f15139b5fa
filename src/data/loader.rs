use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::error::ReferenceError;
use super::model::{FunctionalGroupRecord, ReferenceTable, SpectralType};
use super::spectrum::Upload;

// ---------------------------------------------------------------------------
// Reference table loader
// ---------------------------------------------------------------------------

/// Load the reference table for `spectral_type` from `path`.
pub fn load_reference_table(
    path: &Path,
    spectral_type: SpectralType,
) -> Result<ReferenceTable, ReferenceError> {
    let file = std::fs::File::open(path).map_err(|source| ReferenceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = ReferenceTable::from_reader(file, spectral_type)?;
    log::info!(
        "Loaded {} {} reference groups from {}",
        table.len(),
        spectral_type,
        path.display()
    );
    Ok(table)
}

impl ReferenceTable {
    /// Parse a reference table from comma-delimited text.
    ///
    /// Layout: header row, first column is the row key, and the columns
    /// `Group`, `Name`, `min {unit}`, `max {unit}` must be present in any
    /// order.  Extra columns are ignored.
    pub fn from_reader<R: Read>(
        reader: R,
        spectral_type: SpectralType,
    ) -> Result<Self, ReferenceError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let unit = spectral_type.unit();
        let min_column = format!("min {unit}");
        let max_column = format!("max {unit}");
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReferenceError::MissingColumn(name.to_string()))
        };
        let group_idx = column("Group")?;
        let name_idx = column("Name")?;
        let min_idx = column(min_column.as_str())?;
        let max_idx = column(max_column.as_str())?;

        let mut records = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let row = i + 1;
            let record = result?;
            let field = |idx: usize| record.get(idx).unwrap_or("");
            let bound = |idx: usize, column: &str| {
                let value = field(idx);
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ReferenceError::InvalidBound {
                        row,
                        column: column.to_string(),
                        value: value.to_string(),
                    })
            };

            let key = field(0).to_string();
            let min_bound = bound(min_idx, min_column.as_str())?;
            let max_bound = bound(max_idx, max_column.as_str())?;
            if min_bound > max_bound {
                return Err(ReferenceError::InvertedBounds {
                    row,
                    key,
                    min: min_bound,
                    max: max_bound,
                });
            }

            records.push(FunctionalGroupRecord {
                key,
                group: field(group_idx).to_string(),
                name: field(name_idx).to_string(),
                min_bound,
                max_bound,
            });
        }

        Ok(ReferenceTable::new(spectral_type, records))
    }
}

// ---------------------------------------------------------------------------
// Uploaded spectrum files
// ---------------------------------------------------------------------------

/// Read a spectrum file from disk.  The file name becomes the sample label.
pub fn load_upload(path: &Path) -> Result<Upload> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading spectrum file {}", path.display()))?;
    Ok(Upload {
        name,
        contents: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const IR_TABLE: &str = "\
,Group,Name,min cm-1,max cm-1
0,O-H,Alcohol,3200,3550
1,C=O,Ketone,1650,1750
2,C#N,Nitrile,2250,2250
";

    #[test]
    fn parses_and_sorts_ir_table() {
        let table = ReferenceTable::from_reader(IR_TABLE.as_bytes(), SpectralType::Ir).unwrap();
        assert_eq!(table.len(), 3);
        let groups: Vec<&str> = table.records().iter().map(|r| r.group.as_str()).collect();
        assert_eq!(groups, vec!["C=O", "C#N", "O-H"]);
        assert_eq!(table.records()[0].key, "1");
        assert!(table.records()[1].is_point_feature());
    }

    #[test]
    fn wrong_unit_columns_are_rejected() {
        let err = ReferenceTable::from_reader(IR_TABLE.as_bytes(), SpectralType::Xanes).unwrap_err();
        assert!(matches!(err, ReferenceError::MissingColumn(ref c) if c == "min eV"));
    }

    #[test]
    fn non_numeric_bound_names_the_row() {
        let text = ",Group,Name,min eV,max eV\n0,C=C,Alkene,285.0,abc\n";
        let err = ReferenceTable::from_reader(text.as_bytes(), SpectralType::Xanes).unwrap_err();
        match err {
            ReferenceError::InvalidBound { row, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        for bad in ["nan", "NaN", "inf", "-inf"] {
            let text = format!(
                ",Group,Name,min cm-1,max cm-1\n0,C=O,Ketone,1650,1750\n1,O-H,Alcohol,{bad},3550\n"
            );
            let err = ReferenceTable::from_reader(text.as_bytes(), SpectralType::Ir).unwrap_err();
            match err {
                ReferenceError::InvalidBound { row, column, value } => {
                    assert_eq!(row, 2);
                    assert_eq!(column, "min cm-1");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for {bad}: {other}"),
            }
        }
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let text = ",Group,Name,min eV,max eV\n7,C=O,Carbonyl,290.0,286.0\n";
        let err = ReferenceTable::from_reader(text.as_bytes(), SpectralType::Xanes).unwrap_err();
        assert!(matches!(err, ReferenceError::InvertedBounds { ref key, .. } if key == "7"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            load_reference_table(&dir.path().join("absent.csv"), SpectralType::Ir).unwrap_err();
        assert!(matches!(err, ReferenceError::Io { .. }));
    }

    #[test]
    fn shipped_tables_load() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        for spectral_type in SpectralType::ALL {
            let path = data_dir.join(spectral_type.reference_file());
            let table = load_reference_table(&path, spectral_type).unwrap();
            assert!(!table.is_empty());
            assert!(table
                .records()
                .windows(2)
                .all(|w| w[0].min_bound <= w[1].min_bound));
        }
    }

    #[test]
    fn upload_uses_file_name_as_label() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "eV I\n285.0 0.5").unwrap();
        let upload = load_upload(file.path()).unwrap();
        let expected = file.path().file_name().unwrap().to_str().unwrap();
        assert_eq!(upload.name, expected);
        assert!(upload.contents.starts_with("eV I"));
    }
}
