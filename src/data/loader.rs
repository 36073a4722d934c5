use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{LaunchRecord, LaunchTable};

// ---------------------------------------------------------------------------
// DataLoadError
// ---------------------------------------------------------------------------

/// Fatal dataset-loading failure.  There is no partial or degraded mode:
/// if the table cannot be loaded in full, the dashboard must not start.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read dataset file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("unsupported dataset extension: .{0}")]
    UnsupportedFormat(String),

    #[error("malformed dataset row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("failed to parse dataset: {0}")]
    Parse(String),
}

/// Columns the dashboard requires; any other columns in the file are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the required column names (primary format)
/// * `.json` – records-oriented array, the default `df.to_json(orient='records')`
pub fn load_file(path: &Path) -> Result<LaunchTable, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataLoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchTable, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataLoadError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.map_err(|e| DataLoadError::MalformedRow {
            row,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "Launch Site": "KSC LC-39A",
///     "Payload Mass (kg)": 3696.65,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchTable, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<LaunchRecord> =
        serde_json::from_str(&text).map_err(|e| DataLoadError::Parse(e.to_string()))?;

    Ok(LaunchTable::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        (dir, path)
    }

    #[test]
    fn loads_csv_with_extra_columns() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0 B0003,v1.0
2,VAFB SLC-4E,1,500,F9 v1.1 B1003,v1.1
3,KSC LC-39A,1,9600,F9 FT B1029.2,FT
";
        let (_dir, path) = write_temp("launches.csv", csv);
        let table = load_file(&path).expect("load csv");

        assert_eq!(table.len(), 3);
        assert_eq!(table.records[0].site, "CCAFS LC-40");
        assert_eq!(table.records[1].outcome, Outcome::Success);
        assert_eq!(table.records[2].payload_mass_kg, 9600.0);
        assert_eq!(table.records[2].booster_category, "FT");

        let bounds = table.payload_bounds();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 9600.0);
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "\
Launch Site,class,Booster Version Category
CCAFS LC-40,1,v1.0
";
        let (_dir, path) = write_temp("launches.csv", csv);
        match load_file(&path) {
            Err(DataLoadError::MissingColumn(col)) => assert_eq!(col, "Payload Mass (kg)"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = load_file(Path::new("/nonexistent/launches.csv"));
        assert!(matches!(result, Err(DataLoadError::Io { .. })));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let (_dir, path) = write_temp("launches.parquet", "");
        assert!(matches!(
            load_file(&path),
            Err(DataLoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn outcome_class_outside_binary_is_malformed() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,2,500,v1.0
";
        let (_dir, path) = write_temp("launches.csv", csv);
        assert!(matches!(
            load_file(&path),
            Err(DataLoadError::MalformedRow { row: 0, .. })
        ));
    }

    #[test]
    fn loads_records_oriented_json() {
        let json = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3696.65, "class": 1, "Booster Version Category": "FT"},
            {"Launch Site": "CCAFS SLC-40", "Payload Mass (kg)": 2490.0, "class": 0, "Booster Version Category": "B4"}
        ]"#;
        let (_dir, path) = write_temp("launches.json", json);
        let table = load_file(&path).expect("load json");

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].outcome, Outcome::Success);
        assert_eq!(table.records[1].site, "CCAFS SLC-40");
    }

    // The range control displays a fixed [0, 10000] domain; data outside it
    // still drives the data-derived bounds (the default value is not clamped).
    #[test]
    fn bounds_preserve_data_outside_display_domain() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS SLC-40,1,15600,B5
CCAFS SLC-40,1,362,FT
";
        let (_dir, path) = write_temp("launches.csv", csv);
        let table = load_file(&path).expect("load csv");
        let bounds = table.payload_bounds();
        assert_eq!(bounds.min, 362.0);
        assert_eq!(bounds.max, 15600.0);
    }
}
