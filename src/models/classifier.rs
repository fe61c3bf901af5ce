use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizerModel {
    pub max_features: usize,
    pub vocab: BTreeMap<String, usize>,
    pub idf_diag: Vec<f32>,
}

/// Multinomial logistic regression parameters.
///
/// `coeffs` has one row per class and one column per feature, rows follow the order of
/// `classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRegModel<L> {
    pub classes: Vec<L>,
    pub intercept: Vec<f32>,
    pub coeffs: Vec<Vec<f32>>,
}
