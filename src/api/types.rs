//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::engine::{encode::SymptomReport, Prediction};

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomEntry {
    pub symptom: String,
    pub severity: f64,
}

impl From<SymptomEntry> for SymptomReport {
    fn from(value: SymptomEntry) -> Self {
        SymptomReport {
            symptom: value.symptom,
            severity: value.severity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<SymptomEntry>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionDto {
    pub predicted_disease: String,
    pub probability: f64,
    pub description: String,
    pub precautions: Vec<String>,
}

impl From<Prediction> for PredictionDto {
    fn from(value: Prediction) -> Self {
        PredictionDto {
            predicted_disease: value.disease,
            probability: value.probability,
            description: value.description,
            precautions: value.precautions,
        }
    }
}
