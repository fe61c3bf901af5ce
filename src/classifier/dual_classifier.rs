use std::collections::BTreeMap;

use itertools::Itertools;
use log::info;

use crate::artifacts::NeuronArtifacts;
use crate::classifier::{
    evaluate, stratified_split, Classifier, FeatureVector, LogRegClassifier, TfidfVectorizer,
    TrainTestSplit, TrainingMetrics,
};
use crate::config::{LogRegConfig, TrainingConfig};
use crate::dataset::LabeledExample;
use crate::errors::*;
use crate::labels::{Emotion, Sentiment};
use crate::normalizer::TextNormalizer;

/// Labels and probability distributions predicted on both axes for one feature vector
#[derive(Debug, Clone, PartialEq)]
pub struct DualPrediction {
    pub emotion: Emotion,
    pub sentiment: Sentiment,
    pub emotion_probabilities: BTreeMap<Emotion, f32>,
    pub sentiment_probabilities: BTreeMap<Sentiment, f32>,
}

/// Emotion and sentiment classifiers trained independently on the same rows
#[derive(Debug, Clone, Default)]
pub struct DualClassifier {
    emotion_classifier: LogRegClassifier<Emotion>,
    sentiment_classifier: LogRegClassifier<Sentiment>,
}

impl DualClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_models(
        emotion_classifier: LogRegClassifier<Emotion>,
        sentiment_classifier: LogRegClassifier<Sentiment>,
    ) -> Result<Self> {
        let emotion_features = emotion_classifier.nb_features()?;
        let sentiment_features = sentiment_classifier.nb_features()?;
        if emotion_features != sentiment_features {
            return Err(NeuronError::ModelLoad(format!(
                "emotion classifier expects {} features but sentiment classifier expects {}",
                emotion_features, sentiment_features
            ))
            .into());
        }
        Ok(Self {
            emotion_classifier,
            sentiment_classifier,
        })
    }

    pub fn emotion_classifier(&self) -> &LogRegClassifier<Emotion> {
        &self.emotion_classifier
    }

    pub fn sentiment_classifier(&self) -> &LogRegClassifier<Sentiment> {
        &self.sentiment_classifier
    }

    pub fn fit(
        &mut self,
        features: &[FeatureVector],
        emotions: &[Emotion],
        sentiments: &[Sentiment],
        nb_features: usize,
        config: &LogRegConfig,
    ) -> Result<()> {
        info!("Fitting emotion classifier on {} examples", features.len());
        self.emotion_classifier
            .fit(features, emotions, nb_features, config)?;
        info!("Fitting sentiment classifier on {} examples", features.len());
        self.sentiment_classifier
            .fit(features, sentiments, nb_features, config)?;
        Ok(())
    }

    pub fn predict(&self, features: &[FeatureVector]) -> Result<Vec<DualPrediction>> {
        features
            .iter()
            .map(|vector| {
                let emotion_probabilities = self.emotion_classifier.predict_distribution(vector)?;
                let sentiment_probabilities =
                    self.sentiment_classifier.predict_distribution(vector)?;
                Ok(DualPrediction {
                    emotion: self.emotion_classifier.predict_label(vector)?,
                    sentiment: self.sentiment_classifier.predict_label(vector)?,
                    emotion_probabilities,
                    sentiment_probabilities,
                })
            })
            .collect()
    }

    pub fn evaluate(
        &self,
        features: &[FeatureVector],
        emotions: &[Emotion],
        sentiments: &[Sentiment],
    ) -> Result<TrainingMetrics> {
        let predictions = self.predict(features)?;
        let predicted_emotions = predictions.iter().map(|p| p.emotion).collect_vec();
        let predicted_sentiments = predictions.iter().map(|p| p.sentiment).collect_vec();
        Ok(TrainingMetrics {
            emotion: evaluate(emotions, &predicted_emotions),
            sentiment: evaluate(sentiments, &predicted_sentiments),
        })
    }

    /// Trains the vectorizer and both classifiers.
    ///
    /// A single split stratified on emotions is computed and its rows are reused for the
    /// sentiment axis, so that both classifiers are evaluated on the same held out examples.
    pub fn train(
        examples: &[LabeledExample],
        normalizer: &TextNormalizer,
        config: &TrainingConfig,
    ) -> Result<NeuronArtifacts> {
        info!("Training on {} examples", examples.len());
        let texts = examples
            .iter()
            .map(|example| normalizer.normalize(&example.raw_text, None))
            .collect_vec();
        let emotions = examples.iter().map(|example| example.emotion).collect_vec();
        let sentiments = examples
            .iter()
            .map(|example| example.sentiment)
            .collect_vec();

        let split = stratified_split(&emotions, config.test_size, config.random_state)?;
        info!(
            "Split dataset into {} train and {} test examples",
            split.train_indices.len(),
            split.test_indices.len()
        );
        let train_texts = TrainTestSplit::select(&texts, &split.train_indices);
        let test_texts = TrainTestSplit::select(&texts, &split.test_indices);

        let mut vectorizer = TfidfVectorizer::new(config.max_features);
        let train_features = vectorizer.fit_transform(&train_texts)?;
        let test_features = vectorizer.transform(&test_texts)?;
        let nb_features = vectorizer.nb_features()?;

        let mut classifier = DualClassifier::new();
        classifier.fit(
            &train_features,
            &TrainTestSplit::select(&emotions, &split.train_indices),
            &TrainTestSplit::select(&sentiments, &split.train_indices),
            nb_features,
            &config.logreg,
        )?;

        let metrics = classifier.evaluate(
            &test_features,
            &TrainTestSplit::select(&emotions, &split.test_indices),
            &TrainTestSplit::select(&sentiments, &split.test_indices),
        )?;
        info!(
            "Emotion accuracy: {:.3}, sentiment accuracy: {:.3}",
            metrics.emotion.accuracy, metrics.sentiment.accuracy
        );

        Ok(NeuronArtifacts::new(vectorizer, classifier, metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Label;
    use crate::models::LogRegModel;
    use crate::testutils::{portuguese_normalizer, synthetic_examples};

    #[test]
    fn train_produces_both_models_and_metrics() {
        // Given
        let examples = synthetic_examples();
        let normalizer = portuguese_normalizer();

        // When
        let artifacts = DualClassifier::train(&examples, &normalizer, &TrainingConfig::default())
            .unwrap();

        // Then
        let emotion_accuracy = artifacts.metrics.emotion.accuracy;
        let sentiment_accuracy = artifacts.metrics.sentiment.accuracy;
        assert!(emotion_accuracy >= 0. && emotion_accuracy <= 1.);
        assert!(sentiment_accuracy >= 0. && sentiment_accuracy <= 1.);
        assert_eq!(
            Emotion::all(),
            artifacts.classifier.emotion_classifier().classes()
        );
        assert_eq!(
            Sentiment::all(),
            artifacts.classifier.sentiment_classifier().classes()
        );
        let emotion_support: usize = artifacts
            .metrics
            .emotion
            .classification_report
            .classes
            .values()
            .map(|m| m.support)
            .sum();
        let sentiment_support: usize = artifacts
            .metrics
            .sentiment
            .classification_report
            .classes
            .values()
            .map(|m| m.support)
            .sum();
        assert_eq!(10, emotion_support);
        assert_eq!(emotion_support, sentiment_support);
    }

    #[test]
    fn train_fails_on_rare_emotions() {
        // Given
        let mut examples = synthetic_examples();
        examples.retain(|example| example.emotion != Emotion::Amor);
        examples.push(LabeledExample::new("sinto amor pela equipe", Emotion::Amor));

        // When
        let result = DualClassifier::train(
            &examples,
            &portuguese_normalizer(),
            &TrainingConfig::default(),
        );

        // Then
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<NeuronError>().map_or(false, |e| match e {
            NeuronError::InsufficientClassSamples(_) => true,
            _ => false,
        }));
    }

    #[test]
    fn predict_returns_distributions_summing_to_one() {
        // Given
        let emotion_classifier = LogRegClassifier::from_model(LogRegModel {
            classes: vec![Emotion::Alegria, Emotion::Medo, Emotion::Tristeza],
            intercept: vec![0.1, 0.2, -0.3],
            coeffs: vec![vec![1.0, -1.0], vec![-1.0, 1.0], vec![0.5, 0.5]],
        })
        .unwrap();
        let sentiment_classifier = LogRegClassifier::from_model(LogRegModel {
            classes: vec![Sentiment::Negativo, Sentiment::Positivo],
            intercept: vec![0.0, 0.0],
            coeffs: vec![vec![-1.0, 1.0], vec![1.0, -1.0]],
        })
        .unwrap();
        let classifier =
            DualClassifier::from_models(emotion_classifier, sentiment_classifier).unwrap();
        let features = vec![
            FeatureVector::new(2, vec![(0, 1.0)]).unwrap(),
            FeatureVector::new(2, vec![(1, 1.0)]).unwrap(),
            FeatureVector::new(2, vec![]).unwrap(),
        ];

        // When
        let predictions = classifier.predict(&features).unwrap();

        // Then
        assert_eq!(3, predictions.len());
        assert_eq!(Emotion::Alegria, predictions[0].emotion);
        assert_eq!(Sentiment::Positivo, predictions[0].sentiment);
        assert_eq!(Emotion::Medo, predictions[1].emotion);
        assert_eq!(Sentiment::Negativo, predictions[1].sentiment);
        for prediction in predictions {
            let emotion_sum: f32 = prediction.emotion_probabilities.values().sum();
            let sentiment_sum: f32 = prediction.sentiment_probabilities.values().sum();
            assert!((emotion_sum - 1.).abs() < 1e-5);
            assert!((sentiment_sum - 1.).abs() < 1e-5);
        }
    }

    #[test]
    fn from_models_rejects_mismatching_dimensions() {
        let emotion_classifier = LogRegClassifier::from_model(LogRegModel {
            classes: vec![Emotion::Alegria, Emotion::Medo],
            intercept: vec![0.0, 0.0],
            coeffs: vec![vec![1.0], vec![-1.0]],
        })
        .unwrap();
        let sentiment_classifier = LogRegClassifier::from_model(LogRegModel {
            classes: vec![Sentiment::Negativo, Sentiment::Positivo],
            intercept: vec![0.0, 0.0],
            coeffs: vec![vec![1.0, 0.0], vec![-1.0, 0.0]],
        })
        .unwrap();
        assert!(DualClassifier::from_models(emotion_classifier, sentiment_classifier).is_err());
    }
}
