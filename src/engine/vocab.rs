//! Feature-space construction from the training corpus.

use std::collections::{BTreeSet, HashMap};

use crate::data::dataset::TrainingRecord;

use super::EngineError;

/// Fixed, lexicographically sorted symptom vocabulary defining the
/// feature-vector layout. The ordering is built once and shared by every
/// encoded vector, training and query alike.
#[derive(Debug, Clone)]
pub struct FeatureVocabulary {
    symptoms: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureVocabulary {
    /// Collect every distinct trimmed symptom in the corpus, sorted on the
    /// raw trimmed string.
    pub fn build(records: &[TrainingRecord]) -> Result<Self, EngineError> {
        if records.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }
        let mut unique = BTreeSet::new();
        for record in records {
            for symptom in &record.symptoms {
                let trimmed = symptom.trim();
                if !trimmed.is_empty() {
                    unique.insert(trimmed.to_string());
                }
            }
        }
        if unique.is_empty() {
            return Err(EngineError::NoSymptoms);
        }
        let symptoms: Vec<String> = unique.into_iter().collect();
        let index = symptoms
            .iter()
            .enumerate()
            .map(|(slot, symptom)| (symptom.to_lowercase(), slot))
            .collect();
        Ok(Self { symptoms, index })
    }

    /// Number of feature slots.
    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Vocabulary entries in slot order.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Slot for a raw symptom, matched case-insensitively after trimming.
    pub fn slot(&self, raw: &str) -> Option<usize> {
        self.index.get(&raw.trim().to_lowercase()).copied()
    }
}
