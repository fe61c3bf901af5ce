use serde_derive::{Deserialize, Serialize};

use crate::classifier::TrainingMetrics;
use crate::labels::{Emotion, Sentiment};
use crate::models::{LogRegModel, TfidfVectorizerModel};

#[derive(Debug, Deserialize)]
pub struct ModelVersion {
    pub model_version: String,
}

/// Serialized form of a trained vectorizer and its two classifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactModel {
    pub model_version: String,
    pub vectorizer: TfidfVectorizerModel,
    pub emotion_classifier: LogRegModel<Emotion>,
    pub sentiment_classifier: LogRegModel<Sentiment>,
    pub metrics: TrainingMetrics,
}
