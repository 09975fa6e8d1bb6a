//! Triage engine: one-shot initialization and the per-request pipeline.

pub mod encode;
pub mod rank;
pub mod tree;
pub mod vocab;

use ndarray::Array2;
use thiserror::Error;
use tracing::info;

use crate::{
    config::Settings,
    data::{
        dataset::{self, TrainingRecord},
        tables::{MetadataTable, SeverityTable},
    },
};

use encode::SymptomReport;
use rank::RankedLabel;
use tree::{Classifier, DecisionTree, TrainError};
use vocab::FeatureVocabulary;

/// Errors raised while initialising the engine. All of them abort startup.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("training corpus is empty")]
    EmptyCorpus,
    #[error("training corpus contains no symptoms")]
    NoSymptoms,
    #[error(transparent)]
    Train(#[from] TrainError),
}

/// One enriched prediction row returned to callers.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub disease: String,
    pub probability: f64,
    pub description: String,
    pub precautions: Vec<String>,
}

/// Outcome of a prediction call: ranked rows plus the reported symptoms that
/// matched no vocabulary entry.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub predictions: Vec<Prediction>,
    pub unrecognised: Vec<String>,
}

/// Immutable trained state shared read-only across requests.
///
/// Built once via [`Engine::initialize`] before any request is served; the
/// per-request pipeline (encode → predict_proba → rank → metadata join) is
/// synchronous and allocates only request-local state.
#[derive(Debug)]
pub struct Engine {
    vocabulary: FeatureVocabulary,
    severity: SeverityTable,
    metadata: MetadataTable,
    classifier: DecisionTree,
}

impl Engine {
    /// Build the vocabulary, encode the corpus and fit the classifier.
    pub fn initialize(
        records: &[TrainingRecord],
        severity: SeverityTable,
        metadata: MetadataTable,
    ) -> Result<Self, EngineError> {
        let vocabulary = FeatureVocabulary::build(records)?;

        let mut matrix = Array2::zeros((records.len(), vocabulary.len()));
        let mut labels = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let vector = encode::encode_training(&vocabulary, &severity, &record.symptoms);
            matrix.row_mut(row).assign(&vector);
            labels.push(record.disease.clone());
        }

        let mut classifier = DecisionTree::default();
        classifier.fit(&matrix, &labels)?;
        info!(
            symptoms = vocabulary.len(),
            records = records.len(),
            classes = classifier.classes().len(),
            "engine initialised"
        );

        Ok(Self {
            vocabulary,
            severity,
            metadata,
            classifier,
        })
    }

    /// Run the full pipeline for a set of symptom reports.
    pub fn predict(&self, reports: &[SymptomReport], top_n: usize) -> PredictionOutcome {
        let (vector, unrecognised) =
            encode::encode_query(&self.vocabulary, &self.severity, reports);
        let distribution = self.classifier.predict_proba(vector.view());
        let predictions = rank::rank(&distribution, top_n)
            .into_iter()
            .map(|ranked| self.enrich(ranked))
            .collect();
        PredictionOutcome {
            predictions,
            unrecognised,
        }
    }

    fn enrich(&self, ranked: RankedLabel) -> Prediction {
        let (description, precautions) = self.metadata.disease_info(&ranked.disease);
        Prediction {
            disease: ranked.disease,
            probability: ranked.probability,
            description,
            precautions,
        }
    }

    /// Description and precautions for a disease, with documented defaults
    /// for unknown labels.
    pub fn disease_info(&self, disease: &str) -> (String, Vec<String>) {
        self.metadata.disease_info(disease)
    }

    /// The fixed feature space this engine was trained on.
    pub fn vocabulary(&self) -> &FeatureVocabulary {
        &self.vocabulary
    }
}

/// Load the reference tables from disk and initialise an engine.
pub fn bootstrap(settings: &Settings) -> anyhow::Result<Engine> {
    let records = dataset::load_records(&settings.dataset_path())?;
    let severity = SeverityTable::load(&settings.severity_path())?;
    let metadata = MetadataTable::load(&settings.description_path(), &settings.precaution_path())?;
    let engine = Engine::initialize(&records, severity, metadata)?;
    Ok(engine)
}
