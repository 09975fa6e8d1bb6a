//! Runtime configuration utilities for dx-assistant.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder holding the reference CSV tables.
    pub data_dir: PathBuf,
    /// Disease-to-symptom training records.
    pub dataset_file: String,
    /// Symptom base-weight records.
    pub severity_file: String,
    /// Disease description records.
    pub description_file: String,
    /// Disease precaution records.
    pub precaution_file: String,
    /// Number of predictions returned when a request does not ask for more.
    pub default_top_n: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let dataset_file =
            env::var("DATASET_FILE").unwrap_or_else(|_| "dataset.csv".to_string());
        let severity_file =
            env::var("SEVERITY_FILE").unwrap_or_else(|_| "Symptom-severity.csv".to_string());
        let description_file = env::var("DESCRIPTION_FILE")
            .unwrap_or_else(|_| "symptom_Description.csv".to_string());
        let precaution_file = env::var("PRECAUTION_FILE")
            .unwrap_or_else(|_| "symptom_precaution.csv".to_string());
        let default_top_n = env::var("DEFAULT_TOP_N")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            data_dir,
            dataset_file,
            severity_file,
            description_file,
            precaution_file,
            default_top_n,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Path of the training dataset CSV.
    pub fn dataset_path(&self) -> PathBuf {
        self.join_data(&self.dataset_file)
    }

    /// Path of the symptom base-weight CSV.
    pub fn severity_path(&self) -> PathBuf {
        self.join_data(&self.severity_file)
    }

    /// Path of the disease description CSV.
    pub fn description_path(&self) -> PathBuf {
        self.join_data(&self.description_file)
    }

    /// Path of the disease precaution CSV.
    pub fn precaution_path(&self) -> PathBuf {
        self.join_data(&self.precaution_file)
    }
}
