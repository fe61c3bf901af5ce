use std::io;
use std::io::Write;
use std::sync::Arc;

use clap::{App, Arg};
use neuron_nlu::{
    load_dataset, load_shared_resources, DualClassifier, NeuronEngine, SharedResources,
    TextNormalizer, TrainingConfig,
};

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let matches = App::new("neuron-classify")
        .about("Neuron interactive CLI for classifying emotions and sentiments")
        .arg(
            Arg::with_name("ARTIFACT_PATH")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("path to the trained artifact file"),
        )
        .arg(
            Arg::with_name("train")
                .short("t")
                .long("--train")
                .takes_value(true)
                .help("CSV dataset to train on, the artifact is written before classifying"),
        )
        .arg(
            Arg::with_name("resources")
                .short("r")
                .long("--resources")
                .takes_value(true)
                .help("directory of the stemming and stop words resources"),
        )
        .get_matches();
    let artifact_path = matches.value_of("ARTIFACT_PATH").unwrap();
    let resources = Arc::new(
        matches
            .value_of("resources")
            .map(|dir| load_shared_resources(dir).unwrap())
            .unwrap_or_else(|| SharedResources::portuguese().unwrap()),
    );

    if let Some(dataset_path) = matches.value_of("train") {
        println!("\nTraining the models...");
        let dataset = load_dataset(dataset_path).unwrap();
        let normalizer = TextNormalizer::new(resources.clone());
        let artifacts =
            DualClassifier::train(&dataset.examples, &normalizer, &TrainingConfig::default())
                .unwrap();
        println!(
            "{}",
            serde_json::to_string_pretty(&artifacts.metrics).unwrap()
        );
        artifacts.persist(artifact_path).unwrap();
    }

    println!("\nLoading the models...");
    let engine = NeuronEngine::from_path(artifact_path, resources).unwrap();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut query = String::new();
        io::stdin().read_line(&mut query).unwrap();
        let result = engine.classify(query.trim()).unwrap();
        let result_json = serde_json::to_string_pretty(&result).unwrap();
        println!("{}", result_json);
    }
}
