use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::split::{TestSize, TrainTestSplit};

/// Directory, relative to the working directory, that receives the outputs.
pub const ARTIFACT_DIR: &str = "artifact";

// ---------------------------------------------------------------------------
// IngestionConfig
// ---------------------------------------------------------------------------

/// Where the ingestion step writes its three files and how it splits.
///
/// Missing JSON fields take their defaults:
///
/// ```json
/// {
///   "train_data_path": "artifact/train.csv",
///   "test_data_path": "artifact/test.csv",
///   "raw_data_path": "artifact/data.csv",
///   "test_size": 0.2,
///   "random_state": 42,
///   "shuffle": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    pub train_data_path: PathBuf,
    pub test_data_path: PathBuf,
    pub raw_data_path: PathBuf,
    pub test_size: TestSize,
    pub random_state: u64,
    pub shuffle: bool,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        let split = TrainTestSplit::default();
        Self::with_artifact_dir(ARTIFACT_DIR, split)
    }
}

impl IngestionConfig {
    /// Place `train.csv`, `test.csv` and `data.csv` under `dir`.
    pub fn with_artifact_dir(dir: impl AsRef<Path>, split: TrainTestSplit) -> Self {
        let dir = dir.as_ref();
        IngestionConfig {
            train_data_path: dir.join("train.csv"),
            test_data_path: dir.join("test.csv"),
            raw_data_path: dir.join("data.csv"),
            test_size: split.test_size,
            random_state: split.random_state,
            shuffle: split.shuffle,
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config '{}'", path.display()))
    }

    pub fn split(&self) -> TrainTestSplit {
        TrainTestSplit {
            test_size: self.test_size,
            random_state: self.random_state,
            shuffle: self.shuffle,
        }
    }

    /// Distinct parent directories of the three output paths.
    pub fn output_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for path in [&self.raw_data_path, &self.train_data_path, &self.test_data_path] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !dirs.contains(&parent) {
                    dirs.push(parent);
                }
            }
        }
        dirs
    }
}
