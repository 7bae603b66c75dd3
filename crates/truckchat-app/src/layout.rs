//! On-disk layout of the data directory

use std::path::{Path, PathBuf};

use truckchat_types::IdentityMode;

/// Paths of the reference store, result file and transcript directory.
///
/// Each identity mode has its own reference and result files since their
/// columns differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
    mode: IdentityMode,
}

impl DataLayout {
    pub fn new(root: PathBuf, mode: IdentityMode) -> Self {
        Self { root, mode }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mode(&self) -> IdentityMode {
        self.mode
    }

    pub fn reference_file(&self) -> PathBuf {
        let name = match self.mode {
            IdentityMode::Single => "trucks.csv",
            IdentityMode::ManufacturerModel => "manufacturers.csv",
        };
        self.root.join("input data").join(name)
    }

    pub fn results_file(&self) -> PathBuf {
        let name = match self.mode {
            IdentityMode::Single => "final_data.csv",
            IdentityMode::ManufacturerModel => "final_data_manufacturer.csv",
        };
        self.root.join("captured data").join(name)
    }

    pub fn transcript_dir(&self) -> PathBuf {
        self.root.join("transcript logs")
    }
}
