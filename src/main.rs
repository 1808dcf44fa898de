mod config;
mod data;
mod error;
mod ingestion;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::IngestionConfig;
use data::split::TestSize;
use ingestion::DataIngestion;

/// Read a CSV dataset, save a raw copy and a seeded train/test split.
///
/// Prints the train and test paths, one per line, for the transformation
/// stage.
#[derive(Parser, Debug)]
#[command(name = "stud-ingest", version)]
struct Cli {
    /// Delimited dataset with a header row
    #[arg(default_value = "notebook/data/stud.csv")]
    data_path: PathBuf,

    /// JSON file with an ingestion config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write data.csv, train.csv and test.csv into this directory
    #[arg(long)]
    artifact_dir: Option<PathBuf>,

    /// Test subset size: a fraction in (0, 1) such as 0.2, or a row count such as 50
    #[arg(long, value_parser = parse_test_size)]
    test_size: Option<TestSize>,

    /// Seed for the shuffle
    #[arg(long)]
    random_state: Option<u64>,
}

/// Integers are row counts, anything else must be a fraction.
fn parse_test_size(s: &str) -> Result<TestSize, String> {
    if let Ok(count) = s.parse::<usize>() {
        return Ok(TestSize::Count(count));
    }
    s.parse::<f64>()
        .map(TestSize::Fraction)
        .map_err(|_| format!("'{s}' is neither a row count nor a fraction"))
}

impl Cli {
    fn ingestion_config(&self) -> Result<IngestionConfig> {
        let mut cfg = match &self.config {
            Some(path) => IngestionConfig::from_json_file(path)?,
            None => IngestionConfig::default(),
        };
        if let Some(dir) = &self.artifact_dir {
            cfg = IngestionConfig::with_artifact_dir(dir, cfg.split());
        }
        if let Some(test_size) = self.test_size {
            cfg.test_size = test_size;
        }
        if let Some(seed) = self.random_state {
            cfg.random_state = seed;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let ingestion = DataIngestion::new(cli.ingestion_config()?);
    let artifacts = ingestion.initiate_data_ingestion(&cli.data_path)?;
    log::debug!(
        "handing off {} train / {} test rows",
        artifacts.train_rows,
        artifacts.test_rows
    );

    let (train_data, test_data): (PathBuf, PathBuf) = artifacts.into();

    println!("{}", train_data.display());
    println!("{}", test_data.display());
    Ok(())
}
