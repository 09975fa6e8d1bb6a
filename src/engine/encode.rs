//! Weighted feature-vector encoding shared by the training and query paths.

use ndarray::Array1;
use tracing::warn;

use crate::data::tables::SeverityTable;

use super::vocab::FeatureVocabulary;

/// One user-reported symptom with its self-rated severity.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomReport {
    pub symptom: String,
    pub severity: f64,
}

/// Encode a training record's symptoms into the feature space.
///
/// A present symptom contributes its base weight; per-row severity plays no
/// part on this path, whereas [`encode_query`] scales by the user's rating.
/// Callers relying on that asymmetry should not "fix" it here.
pub fn encode_training(
    vocabulary: &FeatureVocabulary,
    severity: &SeverityTable,
    symptoms: &[String],
) -> Array1<f64> {
    let mut features = Array1::zeros(vocabulary.len());
    for symptom in symptoms {
        if let Some(slot) = vocabulary.slot(symptom) {
            features[slot] = severity.weight_or_default(symptom);
        }
    }
    features
}

/// Encode user-reported symptoms into the feature space.
///
/// Matched slots carry `severity * base_weight`. Reports that match no
/// vocabulary entry are skipped with a warning and returned to the caller;
/// an unrecognised symptom never aborts the encoding.
pub fn encode_query(
    vocabulary: &FeatureVocabulary,
    severity: &SeverityTable,
    reports: &[SymptomReport],
) -> (Array1<f64>, Vec<String>) {
    let mut features = Array1::zeros(vocabulary.len());
    let mut unrecognised = Vec::new();
    for report in reports {
        match vocabulary.slot(&report.symptom) {
            Some(slot) => {
                let base = severity.weight_or_default(&report.symptom);
                features[slot] = report.severity * base;
            }
            None => {
                warn!(symptom = %report.symptom, "symptom not recognised; skipping");
                unrecognised.push(report.symptom.clone());
            }
        }
    }
    (features, unrecognised)
}
