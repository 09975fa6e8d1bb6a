//! Top-N selection over a predicted probability distribution.

use std::cmp::Ordering;

use indexmap::IndexMap;

/// One ranked disease label with its predicted probability.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLabel {
    pub disease: String,
    pub probability: f64,
}

/// Select the `top_n` most probable labels, descending.
///
/// The sort is stable, so labels with equal probability keep the
/// distribution's iteration order. `top_n` values below 1 are clamped to 1;
/// the result length is `min(top_n, |labels|)`.
pub fn rank(distribution: &IndexMap<String, f64>, top_n: usize) -> Vec<RankedLabel> {
    let top_n = top_n.max(1);
    let mut ranked: Vec<RankedLabel> = distribution
        .iter()
        .map(|(disease, &probability)| RankedLabel {
            disease: disease.clone(),
            probability,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}
