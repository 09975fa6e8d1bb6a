//! Decision-tree classifier over dense feature vectors.

use std::cmp::Ordering;

use indexmap::IndexMap;
use ndarray::{Array2, ArrayView1};
use thiserror::Error;

/// Errors raised while fitting a classifier.
#[derive(Debug, Error)]
pub enum TrainError {
    #[error("no training rows")]
    NoRows,
    #[error("{rows} feature rows but {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },
}

/// Multi-class model contract: fit once on dense rows, then emit a complete
/// probability distribution over the fitted labels for any feature vector.
pub trait Classifier {
    fn fit(&mut self, features: &Array2<f64>, labels: &[String]) -> Result<(), TrainError>;
    fn predict_proba(&self, features: ArrayView1<f64>) -> IndexMap<String, f64>;
}

/// Greedy CART-style tree: Gini splits, no depth or pruning limit, leaves
/// holding the training-label frequency distribution. It will happily overfit
/// small corpora down to 0/1 probabilities.
///
/// Construction is deterministic: features are scanned in slot order,
/// candidate thresholds in ascending order, and a candidate replaces the
/// incumbent split only on strict improvement.
#[derive(Debug, Default)]
pub struct DecisionTree {
    classes: Vec<String>,
    root: Option<Node>,
}

#[derive(Debug)]
enum Node {
    Leaf {
        probabilities: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl DecisionTree {
    /// Fitted class labels in first-seen training order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl Classifier for DecisionTree {
    fn fit(&mut self, features: &Array2<f64>, labels: &[String]) -> Result<(), TrainError> {
        if features.nrows() == 0 {
            return Err(TrainError::NoRows);
        }
        if features.nrows() != labels.len() {
            return Err(TrainError::LabelMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }

        let mut classes: IndexMap<&str, usize> = IndexMap::new();
        let class_ids: Vec<usize> = labels
            .iter()
            .map(|label| {
                let next = classes.len();
                *classes.entry(label.as_str()).or_insert(next)
            })
            .collect();
        self.classes = classes.keys().map(|label| (*label).to_string()).collect();

        let samples: Vec<usize> = (0..features.nrows()).collect();
        self.root = Some(grow(features, &class_ids, self.classes.len(), samples));
        Ok(())
    }

    fn predict_proba(&self, features: ArrayView1<f64>) -> IndexMap<String, f64> {
        let Some(mut node) = self.root.as_ref() else {
            return IndexMap::new();
        };
        loop {
            match node {
                Node::Leaf { probabilities } => {
                    return self
                        .classes
                        .iter()
                        .cloned()
                        .zip(probabilities.iter().copied())
                        .collect();
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }
}

fn grow(features: &Array2<f64>, class_ids: &[usize], n_classes: usize, samples: Vec<usize>) -> Node {
    let counts = class_counts(class_ids, n_classes, &samples);
    let populated = counts.iter().filter(|&&count| count > 0).count();
    if populated <= 1 {
        return leaf(&counts, samples.len());
    }
    match best_split(features, class_ids, n_classes, &samples) {
        Some((feature, threshold)) => {
            let (left, right): (Vec<usize>, Vec<usize>) = samples
                .into_iter()
                .partition(|&row| features[[row, feature]] <= threshold);
            Node::Split {
                feature,
                threshold,
                left: Box::new(grow(features, class_ids, n_classes, left)),
                right: Box::new(grow(features, class_ids, n_classes, right)),
            }
        }
        None => leaf(&counts, samples.len()),
    }
}

fn leaf(counts: &[usize], total: usize) -> Node {
    let probabilities = counts
        .iter()
        .map(|&count| count as f64 / total as f64)
        .collect();
    Node::Leaf { probabilities }
}

fn class_counts(class_ids: &[usize], n_classes: usize, samples: &[usize]) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &row in samples {
        counts[class_ids[row]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let sum_squared: f64 = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total as f64;
            p * p
        })
        .sum();
    1.0 - sum_squared
}

/// Pick the (feature, threshold) pair minimising weighted child impurity.
/// Returns `None` when no candidate strictly improves on the parent, which
/// turns mixed samples with identical features into a frequency leaf.
fn best_split(
    features: &Array2<f64>,
    class_ids: &[usize],
    n_classes: usize,
    samples: &[usize],
) -> Option<(usize, f64)> {
    let parent = gini(&class_counts(class_ids, n_classes, samples), samples.len());
    let total = samples.len() as f64;
    let mut best: Option<(usize, f64, f64)> = None;

    for feature in 0..features.ncols() {
        let mut values: Vec<f64> = samples
            .iter()
            .map(|&row| features[[row, feature]])
            .collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        values.dedup();

        for pair in values.windows(2) {
            let threshold = (pair[0] + pair[1]) / 2.0;
            let mut left = vec![0usize; n_classes];
            let mut right = vec![0usize; n_classes];
            let mut left_total = 0usize;
            for &row in samples {
                if features[[row, feature]] <= threshold {
                    left[class_ids[row]] += 1;
                    left_total += 1;
                } else {
                    right[class_ids[row]] += 1;
                }
            }
            let right_total = samples.len() - left_total;
            let weighted = (left_total as f64 / total) * gini(&left, left_total)
                + (right_total as f64 / total) * gini(&right, right_total);
            if weighted < parent && best.map_or(true, |(_, _, score)| weighted < score) {
                best = Some((feature, threshold, weighted));
            }
        }
    }

    best.map(|(feature, threshold, _)| (feature, threshold))
}
