#[macro_use]
extern crate bencher;

use std::env;
use std::sync::Arc;

use bencher::Bencher;
use neuron_nlu::{
    load_dataset, DualClassifier, LabeledExample, NeuronEngine, SharedResources, TextNormalizer,
    TrainingConfig,
};

const DATASET_ENV: &str = "NEURON_BENCH_DATASET";
const SENTENCE_ENV: &str = "NEURON_BENCH_SENTENCE";

fn training_examples() -> Vec<LabeledExample> {
    if let Ok(dataset_path) = env::var(DATASET_ENV) {
        return load_dataset(dataset_path).unwrap().examples;
    }
    let sentences = vec![
        ("estou muito feliz com o time", "alegria"),
        ("sinto amor pela equipe", "amor"),
        ("estou com medo do prazo", "medo"),
        ("sinto raiva do atraso", "raiva"),
        ("fiquei triste com o resultado", "tristeza"),
        ("fiquei surpreso com a entrega", "surpresa"),
    ];
    (0..8)
        .flat_map(|_| sentences.iter())
        .map(|(text, emotion)| LabeledExample::new(*text, emotion.parse().unwrap()))
        .collect()
}

fn load_engine() -> NeuronEngine {
    let resources = Arc::new(SharedResources::portuguese().unwrap());
    let normalizer = TextNormalizer::new(resources.clone());
    let artifacts = DualClassifier::train(
        &training_examples(),
        &normalizer,
        &TrainingConfig::default(),
    )
    .unwrap();
    NeuronEngine::new(artifacts, resources)
}

fn training(b: &mut Bencher) {
    let examples = training_examples();
    let normalizer = TextNormalizer::new(Arc::new(SharedResources::portuguese().unwrap()));
    let config = TrainingConfig::default();

    b.iter(|| {
        let _ = DualClassifier::train(&examples, &normalizer, &config);
    });
}

fn classification(b: &mut Bencher) {
    let engine = load_engine();
    let sentence = env::var(SENTENCE_ENV)
        .unwrap_or_else(|_| "Estou muito feliz com este projeto!".to_string());

    b.iter(|| {
        let _ = engine.classify(&sentence);
    });
}

benchmark_group!(train, training);
benchmark_group!(run, classification);

benchmark_main!(train, run);
