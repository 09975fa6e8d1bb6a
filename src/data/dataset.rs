//! Training-record ingestion from the disease↔symptom dataset.

use std::path::Path;

use tracing::info;

use super::DataError;

/// One dataset row: a disease label and the symptoms reported with it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub disease: String,
    pub symptoms: Vec<String>,
}

/// Load training records from the dataset CSV.
///
/// Symptom columns are located by header prefix (`Symptom*`); cells are
/// trimmed and empty cells dropped. A dataset without a `Disease` column,
/// without symptom columns, or without any usable record is fatal.
pub fn load_records(path: &Path) -> Result<Vec<TrainingRecord>, DataError> {
    let csv_err = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let disease_idx = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case("disease"))
        .ok_or_else(|| DataError::MissingDiseaseColumn {
            path: path.to_path_buf(),
        })?;
    let symptom_cols: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.trim().to_lowercase().starts_with("symptom"))
        .map(|(idx, _)| idx)
        .collect();
    if symptom_cols.is_empty() {
        return Err(DataError::NoSymptomColumns {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let disease = record.get(disease_idx).unwrap_or("").trim().to_string();
        if disease.is_empty() {
            continue;
        }
        let symptoms: Vec<String> = symptom_cols
            .iter()
            .filter_map(|&idx| record.get(idx))
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(ToString::to_string)
            .collect();
        records.push(TrainingRecord { disease, symptoms });
    }
    if records.is_empty() {
        return Err(DataError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    info!(records = records.len(), "loaded training records");
    Ok(records)
}
