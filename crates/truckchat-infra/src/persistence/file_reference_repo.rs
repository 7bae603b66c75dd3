//! CSV-backed reference store of known trucks
//!
//! Single-name files use `truck_name,truck_name_lower`. Manufacturer/model
//! files use `manufacturer,manufacturer_lower,model,model_lower,class,cabin,country`.
//! The `_lower` columns are written for compatibility but recomputed on load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use truckchat_domain::model::{ReferenceEntry, ReferenceTable, UNKNOWN};
use truckchat_domain::repository::ReferenceRepository;
use truckchat_types::{Error, IdentityMode, Result};

use crate::csv_table::{self, column_index};

const SINGLE_HEADER: [&str; 2] = ["truck_name", "truck_name_lower"];
const MANUFACTURER_MODEL_HEADER: [&str; 7] = [
    "manufacturer",
    "manufacturer_lower",
    "model",
    "model_lower",
    "class",
    "cabin",
    "country",
];

/// Column layout for a new reference file
pub fn reference_header(mode: IdentityMode) -> &'static [&'static str] {
    match mode {
        IdentityMode::Single => &SINGLE_HEADER,
        IdentityMode::ManufacturerModel => &MANUFACTURER_MODEL_HEADER,
    }
}

pub struct FileReferenceRepository {
    csv_path: PathBuf,
    mode: IdentityMode,
}

impl FileReferenceRepository {
    pub fn new(csv_path: PathBuf, mode: IdentityMode) -> Self {
        Self { csv_path, mode }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Create the file with its header if it does not exist yet.
    /// Returns `true` when a file was created.
    pub fn init(&self) -> Result<bool> {
        Ok(csv_table::ensure_header(
            &self.csv_path,
            reference_header(self.mode),
        )?)
    }

    fn unavailable(&self, reason: impl Into<String>) -> Error {
        Error::StorageUnavailable {
            path: self.csv_path.clone(),
            reason: reason.into(),
        }
    }

    fn read_table(&self) -> std::result::Result<ReferenceTable, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.csv_path)
            .map_err(|e| e.to_string())?;

        let header: Vec<String> = reader
            .headers()
            .map_err(|e| e.to_string())?
            .iter()
            .map(str::to_string)
            .collect();

        let name_col = column_index(&header, "truck_name")
            .or_else(|| column_index(&header, "manufacturer"))
            .ok_or_else(|| "missing truck_name or manufacturer column".to_string())?;
        let model_col = column_index(&header, "model");
        let class_col = column_index(&header, "class");
        let cabin_col = column_index(&header, "cabin");
        let country_col = column_index(&header, "country");

        let mut entries = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| e.to_string())?;
            let row_num = row_idx + 2;

            let name = record.get(name_col).unwrap_or("");
            if name.is_empty() {
                warn!(row = row_num, "skipping reference row without a name");
                continue;
            }

            let field = |col: Option<usize>| {
                col.and_then(|c| record.get(c))
                    .filter(|v| !v.is_empty())
                    .unwrap_or(UNKNOWN)
                    .to_string()
            };

            let model = model_col
                .and_then(|c| record.get(c))
                .filter(|m| !m.is_empty() && *m != UNKNOWN);
            let entry = match model {
                Some(model) => ReferenceEntry::manufacturer_model(name, model),
                None => ReferenceEntry::truck(name),
            };
            entries.push(entry.with_metadata(
                field(class_col),
                field(cabin_col),
                field(country_col),
            ));
        }

        Ok(ReferenceTable::new(entries))
    }
}

impl ReferenceRepository for FileReferenceRepository {
    fn load(&self) -> Result<ReferenceTable> {
        if !self.csv_path.exists() {
            return Err(self.unavailable("file not found"));
        }
        let table = self.read_table().map_err(|reason| self.unavailable(reason))?;
        debug!(path = %self.csv_path.display(), entries = table.len(), "reference table loaded");
        Ok(table)
    }

    fn append(&mut self, entry: &ReferenceEntry) -> Result<()> {
        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("truck_name", entry.name().to_string());
        values.insert("truck_name_lower", entry.name_lower().to_string());
        values.insert("manufacturer", entry.name().to_string());
        values.insert("manufacturer_lower", entry.name_lower().to_string());
        if let (Some(model), Some(model_lower)) = (entry.model(), entry.model_lower()) {
            values.insert("model", model.to_string());
            values.insert("model_lower", model_lower.to_string());
        }
        values.insert("class", entry.class.clone());
        values.insert("cabin", entry.cabin.clone());
        values.insert("country", entry.country.clone());

        csv_table::append_row(&self.csv_path, reference_header(self.mode), &values, UNKNOWN)?;
        debug!(path = %self.csv_path.display(), name = entry.name(), "reference entry appended");
        Ok(())
    }
}
