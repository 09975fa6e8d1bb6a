//! Symptom base weights and per-disease metadata loaded from CSV tables.

use std::{collections::HashMap, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use super::DataError;

/// Description served for diseases absent from the description table.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
/// Precaution list served for diseases absent from the precaution table.
pub const DEFAULT_PRECAUTION: &str = "No precautions available.";
/// Base weight assumed for symptoms absent from the severity table.
pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Deserialize)]
struct SeverityRow {
    #[serde(rename = "Symptom")]
    symptom: String,
    #[serde(rename = "weight")]
    weight: String,
}

#[derive(Debug, Deserialize)]
struct DescriptionRow {
    #[serde(rename = "Disease")]
    disease: String,
    #[serde(rename = "Description")]
    description: String,
}

/// Intrinsic clinical weight per symptom, keyed on the case-folded name.
#[derive(Debug, Clone, Default)]
pub struct SeverityTable {
    weights: HashMap<String, f64>,
}

impl SeverityTable {
    /// Load the symptom↔weight table. Rows with a malformed weight cell are
    /// skipped with a warning and fall back to [`DEFAULT_WEIGHT`] on lookup.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let csv_err = |source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
        let mut weights = HashMap::new();
        for result in reader.deserialize::<SeverityRow>() {
            let row = result.map_err(csv_err)?;
            let symptom = row.symptom.trim().to_lowercase();
            match parse_weight(&row.weight) {
                Some(weight) => {
                    weights.insert(symptom, weight);
                }
                None => warn!(%symptom, raw = %row.weight, "malformed weight cell; skipping"),
            }
        }
        info!(symptoms = weights.len(), "loaded severity weights");
        Ok(Self { weights })
    }

    /// Build a table directly from symptom/weight pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let weights = entries
            .into_iter()
            .map(|(symptom, weight)| (symptom.trim().to_lowercase(), weight))
            .collect();
        Self { weights }
    }

    /// Base weight for a symptom, matched case-insensitively after trimming.
    ///
    /// The [`DEFAULT_WEIGHT`] fallback for unknown symptoms is applied here
    /// and nowhere else.
    pub fn weight_or_default(&self, symptom: &str) -> f64 {
        self.weights
            .get(&symptom.trim().to_lowercase())
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }
}

/// Parse a weight cell, accepting only finite numbers.
fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|w| w.is_finite())
}

/// Per-disease description and precaution lookups.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    descriptions: HashMap<String, String>,
    precautions: HashMap<String, Vec<String>>,
}

impl MetadataTable {
    /// Load the description and precaution tables. The precaution file has a
    /// variable number of columns per row; trailing empty cells are dropped.
    pub fn load(description_path: &Path, precaution_path: &Path) -> Result<Self, DataError> {
        let descriptions = load_descriptions(description_path)?;
        let precautions = load_precautions(precaution_path)?;
        info!(
            descriptions = descriptions.len(),
            precautions = precautions.len(),
            "loaded disease metadata"
        );
        Ok(Self {
            descriptions,
            precautions,
        })
    }

    /// Build a table directly from in-memory maps.
    pub fn from_parts(
        descriptions: HashMap<String, String>,
        precautions: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            descriptions,
            precautions,
        }
    }

    /// Description and precautions for a disease. Unknown diseases get the
    /// documented defaults; this lookup never fails.
    pub fn disease_info(&self, disease: &str) -> (String, Vec<String>) {
        let description = self
            .descriptions
            .get(disease)
            .cloned()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let precautions = self
            .precautions
            .get(disease)
            .cloned()
            .unwrap_or_else(|| vec![DEFAULT_PRECAUTION.to_string()]);
        (description, precautions)
    }
}

fn load_descriptions(path: &Path) -> Result<HashMap<String, String>, DataError> {
    let csv_err = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let mut descriptions = HashMap::new();
    for result in reader.deserialize::<DescriptionRow>() {
        let row = result.map_err(csv_err)?;
        descriptions.insert(
            row.disease.trim().to_string(),
            row.description.trim().to_string(),
        );
    }
    Ok(descriptions)
}

fn load_precautions(path: &Path) -> Result<HashMap<String, Vec<String>>, DataError> {
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

    let mut precautions = HashMap::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let disease = record.get(disease_idx).unwrap_or("").trim().to_string();
        if disease.is_empty() {
            continue;
        }
        let steps: Vec<String> = record
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != disease_idx)
            .map(|(_, cell)| cell.trim())
            .filter(|cell| !cell.is_empty())
            .map(ToString::to_string)
            .collect();
        precautions.insert(disease, steps);
    }
    Ok(precautions)
}
