use std::path::Path;
use std::sync::Arc;

use failure::format_err;
use itertools::Itertools;

use crate::artifacts::NeuronArtifacts;
use crate::classifier::TrainingMetrics;
use crate::conversation::{ConversationAggregator, TextClassifier};
use crate::errors::*;
use crate::normalizer::TextNormalizer;
use crate::ontology::{ClassificationResult, ConversationAnalysis, Message};
use crate::resources::SharedResources;

/// Serves classifications out of trained artifacts, immutable once built
pub struct NeuronEngine {
    normalizer: TextNormalizer,
    artifacts: NeuronArtifacts,
}

impl NeuronEngine {
    pub fn new(artifacts: NeuronArtifacts, shared_resources: Arc<SharedResources>) -> Self {
        Self {
            normalizer: TextNormalizer::new(shared_resources),
            artifacts,
        }
    }

    /// Builds an engine with the built-in Portuguese resources
    pub fn from_artifacts(artifacts: NeuronArtifacts) -> Result<Self> {
        let shared_resources = Arc::new(SharedResources::portuguese()?);
        Ok(Self::new(artifacts, shared_resources))
    }

    pub fn from_path<P: AsRef<Path>>(
        path: P,
        shared_resources: Arc<SharedResources>,
    ) -> Result<Self> {
        let artifacts = NeuronArtifacts::from_path(path)?;
        Ok(Self::new(artifacts, shared_resources))
    }

    pub fn metrics(&self) -> &TrainingMetrics {
        &self.artifacts.metrics
    }

    pub fn artifacts(&self) -> &NeuronArtifacts {
        &self.artifacts
    }

    pub fn classify(&self, text: &str) -> Result<ClassificationResult> {
        self.classify_batch(&[text])?
            .pop()
            .ok_or_else(|| format_err!("No classification result for '{}'", text))
    }

    pub fn classify_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Result<Vec<ClassificationResult>> {
        let normalized_texts = texts
            .iter()
            .map(|text| self.normalizer.normalize(text.as_ref(), None))
            .collect_vec();
        let features = self.artifacts.vectorizer.transform(&normalized_texts)?;
        let predictions = self.artifacts.classifier.predict(&features)?;
        Ok(texts
            .iter()
            .zip(predictions.into_iter())
            .map(|(text, prediction)| ClassificationResult {
                text: text.as_ref().to_string(),
                emotion: prediction.emotion,
                sentiment: prediction.sentiment,
                emotion_scores: prediction.emotion_probabilities,
                sentiment_scores: prediction.sentiment_probabilities,
            })
            .collect())
    }

    pub fn analyze_conversation(&self, messages: &[Message]) -> Result<ConversationAnalysis> {
        ConversationAggregator::aggregate(messages, self)
    }
}

impl TextClassifier for NeuronEngine {
    fn classify_batch(&self, texts: &[&str]) -> Result<Vec<ClassificationResult>> {
        NeuronEngine::classify_batch(self, texts)
    }
}
