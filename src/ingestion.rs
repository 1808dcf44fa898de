use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::IngestionConfig;
use crate::data::{loader, writer};
use crate::error::{PipelineError, PipelineResultExt};

const STAGE: &str = "data ingestion";

// ---------------------------------------------------------------------------
// Ingestion output handed to the next stage
// ---------------------------------------------------------------------------

/// Paths of the written subsets, plus their row counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionArtifacts {
    pub train_data_path: PathBuf,
    pub test_data_path: PathBuf,
    pub train_rows: usize,
    pub test_rows: usize,
}

impl From<IngestionArtifacts> for (PathBuf, PathBuf) {
    fn from(artifacts: IngestionArtifacts) -> Self {
        (artifacts.train_data_path, artifacts.test_data_path)
    }
}

// ---------------------------------------------------------------------------
// DataIngestion
// ---------------------------------------------------------------------------

/// Reads a raw dataset and leaves `data.csv`, `train.csv` and `test.csv`
/// behind for the transformation stage.
#[derive(Debug, Clone, Default)]
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Read `data_path`, persist a raw copy, split it and persist both
    /// subsets. Output files are overwritten. Split parameters that do not
    /// fit the row count are rejected before anything is written.
    pub fn initiate_data_ingestion(
        &self,
        data_path: impl AsRef<Path>,
    ) -> Result<IngestionArtifacts, PipelineError> {
        info!("Entered the data ingestion method or component");

        self.ingest(data_path.as_ref()).inspect_err(|e| {
            error!("Encountered an error while ingesting the data: {e}: {:#}", e.source);
        })
    }

    fn ingest(&self, data_path: &Path) -> Result<IngestionArtifacts, PipelineError> {
        let cfg = &self.config;

        let dataset = loader::load_file(data_path).in_stage(STAGE)?;
        info!(
            "Read the dataset '{}' ({} rows, {} columns)",
            data_path.display(),
            dataset.len(),
            dataset.column_count()
        );

        let split = cfg.split();
        split.sizes(dataset.len()).in_stage(STAGE)?;

        for dir in cfg.output_dirs() {
            std::fs::create_dir_all(dir).in_stage(STAGE)?;
        }

        writer::write_csv(&dataset, &cfg.raw_data_path).in_stage(STAGE)?;

        info!("Initiate the split into train and test data");
        let (train_set, test_set) = split.split(&dataset).in_stage(STAGE)?;

        writer::write_csv(&train_set, &cfg.train_data_path).in_stage(STAGE)?;
        writer::write_csv(&test_set, &cfg.test_data_path).in_stage(STAGE)?;

        info!(
            "Ingestion of the dataset is completed: {} train rows -> '{}', {} test rows -> '{}'",
            train_set.len(),
            cfg.train_data_path.display(),
            test_set.len(),
            cfg.test_data_path.display()
        );

        Ok(IngestionArtifacts {
            train_data_path: cfg.train_data_path.clone(),
            test_data_path: cfg.test_data_path.clone(),
            train_rows: train_set.len(),
            test_rows: test_set.len(),
        })
    }
}
