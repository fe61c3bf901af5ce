mod dual_classifier;
mod featurizer;
mod log_reg_classifier;
mod logreg;
mod metrics;
mod split;

use std::collections::BTreeMap;

use crate::errors::*;
use crate::labels::Label;

pub use self::dual_classifier::{DualClassifier, DualPrediction};
pub use self::featurizer::{FeatureVector, TfidfVectorizer, Vocabulary};
pub use self::log_reg_classifier::LogRegClassifier;
pub use self::metrics::{evaluate, AxisMetrics, ClassMetrics, ClassificationReport, TrainingMetrics};
pub use self::split::{stratified_split, TrainTestSplit};

pub trait Classifier<L: Label>: Send + Sync {
    /// Probability of each known class, summing to 1
    fn predict_distribution(&self, features: &FeatureVector) -> Result<BTreeMap<L, f32>>;

    /// Most probable class, ties are resolved in favor of the first class in label order
    fn predict_label(&self, features: &FeatureVector) -> Result<L> {
        let distribution = self.predict_distribution(features)?;
        distribution
            .into_iter()
            .fold(None, |best: Option<(L, f32)>, (label, proba)| match best {
                Some((_, best_proba)) if best_proba >= proba => best,
                _ => Some((label, proba)),
            })
            .map(|(label, _)| label)
            .ok_or_else(|| {
                NeuronError::UninitializedModel("Classifier without any class").into()
            })
    }
}
