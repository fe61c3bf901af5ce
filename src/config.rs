use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Maximum size of the tf-idf vocabulary
    pub max_features: usize,
    /// Proportion of the dataset held out for evaluation
    pub test_size: f64,
    /// Seed of the train/test split
    pub random_state: u64,
    pub logreg: LogRegConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_features: 5000,
            test_size: 0.2,
            random_state: 42,
            logreg: LogRegConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogRegConfig {
    /// Inverse of the L2 regularization strength
    pub c: f32,
    pub max_iter: usize,
    pub tolerance: f32,
    pub learning_rate: f32,
}

impl Default for LogRegConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            max_iter: 1000,
            tolerance: 1e-5,
            learning_rate: 1.0,
        }
    }
}
