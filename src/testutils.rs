use std::collections::BTreeMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use ndarray::prelude::*;

use crate::artifacts::NeuronArtifacts;
use crate::classifier::DualClassifier;
use crate::config::TrainingConfig;
use crate::conversation::TextClassifier;
use crate::dataset::LabeledExample;
use crate::engine::NeuronEngine;
use crate::errors::*;
use crate::labels::{Emotion, Label};
use crate::normalizer::TextNormalizer;
use crate::ontology::ClassificationResult;
use crate::resources::SharedResources;

pub fn assert_epsilon_eq_array1(a: &Array1<f32>, b: &Array1<f32>, epsilon: f32) {
    assert_eq!(a.dim(), b.dim());
    for (index, elem_a) in a.indexed_iter() {
        assert!(epsilon_eq(*elem_a, b[index], epsilon))
    }
}

pub fn epsilon_eq(a: f32, b: f32, epsilon: f32) -> bool {
    let diff = a - b;
    diff < epsilon && diff > -epsilon
}

lazy_static! {
    static ref PORTUGUESE_RESOURCES: Arc<SharedResources> =
        Arc::new(SharedResources::portuguese().unwrap());
    static ref TRAINED_ARTIFACTS: NeuronArtifacts = DualClassifier::train(
        &synthetic_examples(),
        &portuguese_normalizer(),
        &TrainingConfig::default()
    )
    .unwrap();
}

pub fn portuguese_resources() -> Arc<SharedResources> {
    PORTUGUESE_RESOURCES.clone()
}

pub fn portuguese_normalizer() -> TextNormalizer {
    TextNormalizer::new(portuguese_resources())
}

/// Balanced corpus of 6 sentences, one per emotion, repeated 8 times
pub fn synthetic_examples() -> Vec<LabeledExample> {
    let sentences = vec![
        ("estou muito feliz com o time", Emotion::Alegria),
        ("sinto amor pela equipe", Emotion::Amor),
        ("estou com medo do prazo", Emotion::Medo),
        ("sinto raiva do atraso", Emotion::Raiva),
        ("fiquei triste com o resultado", Emotion::Tristeza),
        ("fiquei surpreso com a entrega", Emotion::Surpresa),
    ];
    (0..8)
        .flat_map(|_| sentences.iter())
        .map(|(text, emotion)| LabeledExample::new(*text, *emotion))
        .collect()
}

pub fn trained_artifacts() -> NeuronArtifacts {
    TRAINED_ARTIFACTS.clone()
}

pub fn trained_engine() -> NeuronEngine {
    NeuronEngine::new(trained_artifacts(), portuguese_resources())
}

/// Classifies texts by looking for emotion keywords, falls back to `surpresa`
#[derive(Default)]
pub struct MockedTextClassifier {
    pub keywords: Vec<(&'static str, Emotion)>,
}

impl MockedTextClassifier {
    fn keywords(&self) -> Vec<(&'static str, Emotion)> {
        if self.keywords.is_empty() {
            vec![
                ("feliz", Emotion::Alegria),
                ("amor", Emotion::Amor),
                ("medo", Emotion::Medo),
                ("preocupado", Emotion::Medo),
                ("raiva", Emotion::Raiva),
                ("triste", Emotion::Tristeza),
            ]
        } else {
            self.keywords.clone()
        }
    }
}

impl TextClassifier for MockedTextClassifier {
    fn classify_batch(&self, texts: &[&str]) -> Result<Vec<ClassificationResult>> {
        let keywords = self.keywords();
        Ok(texts
            .iter()
            .map(|text| {
                let emotion = keywords
                    .iter()
                    .find(|(keyword, _)| text.contains(keyword))
                    .map(|(_, emotion)| *emotion)
                    .unwrap_or(Emotion::Surpresa);
                let sentiment = emotion.sentiment();
                ClassificationResult {
                    text: text.to_string(),
                    emotion,
                    sentiment,
                    emotion_scores: one_hot_scores(emotion),
                    sentiment_scores: one_hot_scores(sentiment),
                }
            })
            .collect())
    }
}

fn one_hot_scores<L: Label>(label: L) -> BTreeMap<L, f32> {
    L::all()
        .iter()
        .map(|l| (*l, if *l == label { 1.0 } else { 0.0 }))
        .collect()
}

