//! CSV result writer, one row per finished session

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;
use truckchat_domain::repository::ConversationRecordRepository;
use truckchat_types::{ConversationRecord, Error, IdentityMode, Result, VehicleIdentity};

use crate::csv_table;

/// Written for fields the session never reached
pub const NULL_MARKER: &str = "NaN";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const SINGLE_HEADER: [&str; 10] = [
    "id",
    "started",
    "finished",
    "occupation",
    "truck_name",
    "fleet_number",
    "year",
    "cylinders",
    "horsepower",
    "weight",
];

const MANUFACTURER_MODEL_HEADER: [&str; 10] = [
    "id",
    "started",
    "finished",
    "occupation",
    "manufacturer",
    "model",
    "fleet_number",
    "cylinders",
    "horsepower",
    "weight",
];

/// Column layout for a new result file
pub fn result_header(mode: IdentityMode) -> &'static [&'static str] {
    match mode {
        IdentityMode::Single => &SINGLE_HEADER,
        IdentityMode::ManufacturerModel => &MANUFACTURER_MODEL_HEADER,
    }
}

pub struct FileConversationRecordRepository {
    csv_path: PathBuf,
    mode: IdentityMode,
}

impl FileConversationRecordRepository {
    pub fn new(csv_path: PathBuf, mode: IdentityMode) -> Self {
        Self { csv_path, mode }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

fn timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn record_values(record: &ConversationRecord) -> HashMap<&'static str, String> {
    let mut values = HashMap::new();
    values.insert("id", record.id.clone());
    values.insert("started", timestamp(&record.started));
    values.insert("finished", timestamp(&record.finished));
    values.insert("occupation", record.occupation.as_str().to_string());

    match &record.identity {
        Some(VehicleIdentity::Single { name }) => {
            values.insert("truck_name", name.to_lowercase());
        }
        Some(VehicleIdentity::ManufacturerModel {
            manufacturer,
            model,
        }) => {
            values.insert("manufacturer", manufacturer.to_lowercase());
            values.insert("model", model.to_lowercase());
        }
        None => {}
    }

    let specs = [
        ("fleet_number", record.specs.fleet_number),
        ("year", record.specs.year),
        ("cylinders", record.specs.cylinders),
        ("horsepower", record.specs.horsepower),
        ("weight", record.specs.weight),
    ];
    for (column, value) in specs {
        if let Some(v) = value {
            values.insert(column, v.to_string());
        }
    }

    values
}

impl ConversationRecordRepository for FileConversationRecordRepository {
    fn store(&mut self, record: &ConversationRecord) -> Result<()> {
        csv_table::append_row(
            &self.csv_path,
            result_header(self.mode),
            &record_values(record),
            NULL_MARKER,
        )
        .map_err(|e| Error::ResultWrite(e.to_string()))?;
        debug!(path = %self.csv_path.display(), id = %record.id, "conversation record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use truckchat_types::{Occupation, SpecValues};

    fn completed() -> ConversationRecord {
        ConversationRecord::completed(
            Local::now(),
            Occupation::Owner,
            VehicleIdentity::Single {
                name: "Volvo".to_string(),
            },
            SpecValues {
                fleet_number: Some(12),
                year: Some(2015),
                cylinders: Some(6),
                horsepower: Some(500),
                weight: Some(18000),
            },
        )
    }

    fn rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_completed_record_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("captured data").join("final_data.csv");
        let mut repo = FileConversationRecordRepository::new(path.clone(), IdentityMode::Single);
        let record = completed();
        repo.store(&record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&SINGLE_HEADER.join(",")));

        let rows = rows(&path);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row[0], record.id);
        assert!(uuid::Uuid::parse_str(&row[0]).is_ok());
        assert_eq!(row[3], "owner");
        assert_eq!(row[4], "volvo");
        assert_eq!(&row[5..], &["12", "2015", "6", "500", "18000"]);
    }

    #[test]
    fn test_early_exit_writes_null_markers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("final_data.csv");
        let mut repo = FileConversationRecordRepository::new(path.clone(), IdentityMode::Single);
        repo.store(&ConversationRecord::early_exit(Local::now(), Occupation::Other))
            .unwrap();

        let rows = rows(&path);
        assert_eq!(rows[0][3], "other");
        for field in &rows[0][4..] {
            assert_eq!(field, NULL_MARKER);
        }
    }

    #[test]
    fn test_records_append_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("final_data.csv");
        let mut repo = FileConversationRecordRepository::new(path.clone(), IdentityMode::Single);
        let first = completed();
        let second = ConversationRecord::early_exit(Local::now(), Occupation::Other);
        repo.store(&first).unwrap();
        repo.store(&second).unwrap();

        let rows = rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], first.id);
        assert_eq!(rows[1][0], second.id);
    }

    #[test]
    fn test_manufacturer_model_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("final_data.csv");
        let mut repo =
            FileConversationRecordRepository::new(path.clone(), IdentityMode::ManufacturerModel);
        let record = ConversationRecord::completed(
            Local::now(),
            Occupation::Manager,
            VehicleIdentity::ManufacturerModel {
                manufacturer: "Scania".to_string(),
                model: "R 500".to_string(),
            },
            SpecValues {
                fleet_number: Some(4),
                year: None,
                cylinders: Some(8),
                horsepower: Some(500),
                weight: Some(19000),
            },
        );
        repo.store(&record).unwrap();

        let rows = rows(&path);
        assert_eq!(&rows[0][3..], &["manager", "scania", "r 500", "4", "8", "500", "19000"]);
    }

    #[test]
    fn test_timestamp_format() {
        let at = Local::now();
        let formatted = timestamp(&at);
        assert!(chrono::NaiveDateTime::parse_from_str(&formatted, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(formatted.len(), "2024-01-15 10:30:45.123456".len());
    }
}
