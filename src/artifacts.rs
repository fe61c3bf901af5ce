use std::fs;
use std::path::Path;

use failure::{bail, ResultExt};
use log::info;

use crate::classifier::{DualClassifier, LogRegClassifier, TfidfVectorizer, TrainingMetrics};
use crate::errors::*;
use crate::models::{ArtifactModel, ModelVersion};

/// Everything produced by a training run, read-only once built
#[derive(Debug, Clone)]
pub struct NeuronArtifacts {
    pub vectorizer: TfidfVectorizer,
    pub classifier: DualClassifier,
    pub metrics: TrainingMetrics,
}

impl NeuronArtifacts {
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: DualClassifier,
        metrics: TrainingMetrics,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            metrics,
        }
    }

    pub fn from_model(model: ArtifactModel) -> Result<Self> {
        let vectorizer = TfidfVectorizer::from_model(model.vectorizer)?;
        let classifier = DualClassifier::from_models(
            LogRegClassifier::from_model(model.emotion_classifier)?,
            LogRegClassifier::from_model(model.sentiment_classifier)?,
        )?;
        let nb_features = vectorizer.nb_features()?;
        let classifier_features = classifier.emotion_classifier().nb_features()?;
        if nb_features != classifier_features {
            bail!(NeuronError::ModelLoad(format!(
                "vectorizer produces {} features but classifiers expect {}",
                nb_features, classifier_features
            )));
        }
        Ok(Self::new(vectorizer, classifier, model.metrics))
    }

    pub fn to_model(&self) -> Result<ArtifactModel> {
        Ok(ArtifactModel {
            model_version: crate::MODEL_VERSION.to_string(),
            vectorizer: self.vectorizer.to_model()?,
            emotion_classifier: self.classifier.emotion_classifier().to_model()?,
            sentiment_classifier: self.classifier.sentiment_classifier().to_model()?,
            metrics: self.metrics.clone(),
        })
    }

    /// Writes the artifact as a versioned JSON file
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let model = self.to_model()?;
        let file = fs::File::create(path)
            .with_context(|_| format!("Cannot create artifact file {:?}", path))?;
        serde_json::to_writer(file, &model)
            .with_context(|_| format!("Cannot serialize artifact to {:?}", path))?;
        info!("Artifact persisted in {:?}", path);
        Ok(())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading artifact from {:?} ...", path);
        Self::check_model_version(path)
            .with_context(|_| NeuronError::ModelLoad(path.to_string_lossy().to_string()))?;
        let model_file = fs::File::open(path)
            .with_context(|_| format!("Could not open artifact file {:?}", path))?;
        let model: ArtifactModel = serde_json::from_reader(model_file)
            .with_context(|_| format!("Invalid artifact file {:?}", path))?;
        let artifacts = Self::from_model(model)?;
        info!("Artifact loaded");
        Ok(artifacts)
    }

    fn check_model_version(path: &Path) -> Result<()> {
        let model_file = fs::File::open(path)?;
        let model_version: ModelVersion = serde_json::from_reader(model_file)?;
        if model_version.model_version != crate::MODEL_VERSION {
            bail!(NeuronError::WrongModelVersion {
                model: model_version.model_version,
                runner: crate::MODEL_VERSION
            });
        }
        Ok(())
    }
}
