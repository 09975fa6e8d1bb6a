use dx_assistant::{
    data::{dataset::TrainingRecord, tables::SeverityTable},
    engine::{
        encode::{encode_query, encode_training, SymptomReport},
        vocab::FeatureVocabulary,
    },
};
use proptest::prelude::*;

fn fixture() -> (FeatureVocabulary, SeverityTable) {
    let records = vec![
        TrainingRecord {
            disease: "Flu".into(),
            symptoms: vec!["fever".into(), "headache".into()],
        },
        TrainingRecord {
            disease: "Migraine".into(),
            symptoms: vec!["headache".into(), "nausea".into()],
        },
    ];
    let vocabulary = FeatureVocabulary::build(&records).expect("vocabulary builds");
    let severity = SeverityTable::from_entries([
        ("fever".to_string(), 8.0),
        ("headache".to_string(), 5.0),
        ("nausea".to_string(), 4.0),
    ]);
    (vocabulary, severity)
}

fn report(symptom: &str, severity: f64) -> SymptomReport {
    SymptomReport {
        symptom: symptom.to_string(),
        severity,
    }
}

#[test]
fn vector_length_equals_vocabulary_size() {
    let (vocabulary, severity) = fixture();
    let (vector, _) = encode_query(&vocabulary, &severity, &[report("fever", 1.0)]);
    assert_eq!(vector.len(), vocabulary.len());
}

#[test]
fn empty_reports_yield_the_zero_vector() {
    let (vocabulary, severity) = fixture();
    let (vector, unrecognised) = encode_query(&vocabulary, &severity, &[]);
    assert!(vector.iter().all(|&value| value == 0.0));
    assert!(unrecognised.is_empty());
}

#[test]
fn unknown_symptom_is_skipped_not_fatal() {
    let (vocabulary, severity) = fixture();
    let with_unknown = vec![report("fever", 1.0), report("unicorn_bite", 10.0)];
    let without = vec![report("fever", 1.0)];
    let (a, unrecognised) = encode_query(&vocabulary, &severity, &with_unknown);
    let (b, _) = encode_query(&vocabulary, &severity, &without);
    assert_eq!(a, b);
    assert_eq!(unrecognised, vec!["unicorn_bite".to_string()]);
}

#[test]
fn matching_is_case_insensitive() {
    let (vocabulary, severity) = fixture();
    let (upper, _) = encode_query(&vocabulary, &severity, &[report("FEVER", 1.0)]);
    let (lower, _) = encode_query(&vocabulary, &severity, &[report("fever", 1.0)]);
    assert_eq!(upper, lower);
}

#[test]
fn query_scales_severity_by_base_weight() {
    let (vocabulary, severity) = fixture();
    let (vector, _) = encode_query(&vocabulary, &severity, &[report("fever", 2.0)]);
    let slot = vocabulary.slot("fever").expect("fever is in the vocabulary");
    assert_eq!(vector[slot], 16.0);
}

#[test]
fn training_row_uses_base_weight_only() {
    let (vocabulary, severity) = fixture();
    let vector = encode_training(&vocabulary, &severity, &["fever".to_string()]);
    let slot = vocabulary.slot("fever").expect("fever is in the vocabulary");
    assert_eq!(vector[slot], 8.0);
}

#[test]
fn symptom_without_weight_entry_defaults_to_one() {
    let (vocabulary, _) = fixture();
    let severity = SeverityTable::from_entries([("fever".to_string(), 8.0)]);
    let vector = encode_training(&vocabulary, &severity, &["headache".to_string()]);
    let slot = vocabulary.slot("headache").expect("headache is in the vocabulary");
    assert_eq!(vector[slot], 1.0);
}

fn distinct_reports() -> impl Strategy<Value = Vec<SymptomReport>> {
    proptest::sample::subsequence(
        vec!["fever", "headache", "nausea", "chills", "unicorn_bite"],
        0..=5,
    )
    .prop_flat_map(|names| {
        let len = names.len();
        (Just(names), proptest::collection::vec(0.0f64..10.0, len))
    })
    .prop_map(|(names, severities)| {
        names
            .into_iter()
            .zip(severities)
            .map(|(symptom, severity)| SymptomReport {
                symptom: symptom.to_string(),
                severity,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn encoding_is_order_independent(reports in distinct_reports()) {
        let (vocabulary, severity) = fixture();
        let (forward, _) = encode_query(&vocabulary, &severity, &reports);
        let mut reversed = reports.clone();
        reversed.reverse();
        let (backward, _) = encode_query(&vocabulary, &severity, &reversed);
        prop_assert_eq!(forward.len(), vocabulary.len());
        prop_assert_eq!(forward, backward);
    }
}
