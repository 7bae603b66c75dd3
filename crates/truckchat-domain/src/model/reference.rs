//! Known truck identities loaded from the reference store

use serde::Serialize;
use truckchat_types::VehicleIdentity;

/// Metadata value for entries added at runtime
pub const UNKNOWN: &str = "Unknown";

/// One known vehicle identity.
///
/// The lowercase keys are derived in the constructors and cannot be set
/// independently of the display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    name: String,
    name_lower: String,
    model: Option<String>,
    model_lower: Option<String>,
    /// Truck class (e.g. "Heavy")
    pub class: String,
    /// Cabin type (e.g. "Sleeper")
    pub cabin: String,
    /// Country of origin
    pub country: String,
}

impl ReferenceEntry {
    /// Single-name identity (e.g. "Volvo FH16")
    pub fn truck(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name_lower: name.to_lowercase(),
            name,
            model: None,
            model_lower: None,
            class: UNKNOWN.to_string(),
            cabin: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
        }
    }

    /// Two-part identity; the manufacturer is the primary name
    pub fn manufacturer_model(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            model_lower: Some(model.to_lowercase()),
            model: Some(model),
            ..Self::truck(manufacturer)
        }
    }

    pub fn with_metadata(
        mut self,
        class: impl Into<String>,
        cabin: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.class = class.into();
        self.cabin = cabin.into();
        self.country = country.into();
        self
    }

    /// Display form of the primary name (truck name or manufacturer)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn model_lower(&self) -> Option<&str> {
        self.model_lower.as_deref()
    }

    pub fn identity(&self) -> VehicleIdentity {
        match &self.model {
            Some(model) => VehicleIdentity::ManufacturerModel {
                manufacturer: self.name.clone(),
                model: model.clone(),
            },
            None => VehicleIdentity::Single {
                name: self.name.clone(),
            },
        }
    }
}

/// In-memory snapshot of the reference store, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry for each distinct primary name, in table order
    pub fn distinct_primary(&self) -> Vec<&ReferenceEntry> {
        let mut seen: Vec<&str> = Vec::new();
        let mut distinct = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.name()) {
                seen.push(entry.name());
                distinct.push(entry);
            }
        }
        distinct
    }

    /// Entries carrying a model for the given manufacturer, one per distinct model
    pub fn models_of(&self, manufacturer: &str) -> Vec<&ReferenceEntry> {
        let manufacturer_lower = manufacturer.to_lowercase();
        let mut seen: Vec<&str> = Vec::new();
        let mut models = Vec::new();
        for entry in &self.entries {
            if entry.name_lower() != manufacturer_lower {
                continue;
            }
            if let Some(model_lower) = entry.model_lower() {
                if !seen.contains(&model_lower) {
                    seen.push(model_lower);
                    models.push(entry);
                }
            }
        }
        models
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_table() -> ReferenceTable {
        ReferenceTable::new(vec![
            ReferenceEntry::manufacturer_model("Volvo", "FH16"),
            ReferenceEntry::manufacturer_model("Scania", "R 500"),
            ReferenceEntry::manufacturer_model("Volvo", "FM"),
            ReferenceEntry::manufacturer_model("volvo", "fh16"),
        ])
    }

    #[test]
    fn test_truck_entry_normalizes_name() {
        let entry = ReferenceEntry::truck("Kenworth W900");
        assert_eq!(entry.name(), "Kenworth W900");
        assert_eq!(entry.name_lower(), "kenworth w900");
        assert_eq!(entry.model(), None);
        assert_eq!(entry.class, UNKNOWN);
        assert_eq!(entry.country, UNKNOWN);
    }

    #[test]
    fn test_manufacturer_model_entry_normalizes_both_names() {
        let entry = ReferenceEntry::manufacturer_model("DAF", "XF")
            .with_metadata("Heavy", "Sleeper", "Netherlands");
        assert_eq!(entry.name_lower(), "daf");
        assert_eq!(entry.model_lower(), Some("xf"));
        assert_eq!(entry.cabin, "Sleeper");
        assert_eq!(
            entry.identity(),
            VehicleIdentity::ManufacturerModel {
                manufacturer: "DAF".to_string(),
                model: "XF".to_string(),
            }
        );
    }

    #[test]
    fn test_distinct_primary_keeps_table_order() {
        let table = mixed_table();
        let names: Vec<&str> = table.distinct_primary().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Volvo", "Scania", "volvo"]);
    }

    #[test]
    fn test_models_of_is_case_insensitive_and_deduplicated() {
        let table = mixed_table();
        let models: Vec<&str> = table
            .models_of("VOLVO")
            .iter()
            .filter_map(|e| e.model())
            .collect();
        assert_eq!(models, vec!["FH16", "FM"]);
        assert!(table.models_of("MAN").is_empty());
    }
}
