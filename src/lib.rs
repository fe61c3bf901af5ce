mod artifacts;
mod classifier;
pub mod config;
mod conversation;
mod dataset;
mod engine;
pub mod errors;
mod labels;
pub mod models;
mod normalizer;
pub mod ontology;
pub mod requests;
pub mod resources;
#[cfg(test)]
mod testutils;

pub const MODEL_VERSION: &str = "0.1.0";

pub use crate::artifacts::NeuronArtifacts;
pub use crate::classifier::{
    stratified_split, AxisMetrics, ClassMetrics, ClassificationReport, Classifier,
    DualClassifier, DualPrediction, FeatureVector, LogRegClassifier, TfidfVectorizer,
    TrainTestSplit, TrainingMetrics, Vocabulary,
};
pub use crate::config::{LogRegConfig, TrainingConfig};
pub use crate::conversation::{
    resolve_date, ConversationAggregator, DateResolution, TextClassifier,
};
pub use crate::dataset::{load_dataset, Dataset, LabeledExample};
pub use crate::engine::NeuronEngine;
pub use crate::errors::*;
pub use crate::labels::{Emotion, Label, Sentiment};
pub use crate::normalizer::TextNormalizer;
pub use crate::ontology::*;
pub use crate::requests::{ClassificationRequest, ConversationRequest};
pub use crate::resources::loading::load_shared_resources;
pub use crate::resources::{ResourceCache, SharedResources};
