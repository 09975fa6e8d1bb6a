//! Reference-table ingestion layer.

pub mod dataset;
pub mod tables;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the reference CSV tables.
///
/// All of these are fatal at startup: a missing or unusable table means the
/// engine cannot be trained and the process must not serve requests.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("training dataset {} has no records", path.display())]
    EmptyDataset { path: PathBuf },
    #[error("{} is missing a Disease column", path.display())]
    MissingDiseaseColumn { path: PathBuf },
    #[error("training dataset {} has no symptom columns", path.display())]
    NoSymptomColumns { path: PathBuf },
}
