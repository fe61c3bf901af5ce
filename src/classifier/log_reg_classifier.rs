use std::collections::BTreeMap;

use itertools::Itertools;
use ndarray::prelude::*;

use crate::classifier::logreg::MulticlassLogisticRegression;
use crate::classifier::{Classifier, FeatureVector};
use crate::config::LogRegConfig;
use crate::errors::*;
use crate::labels::Label;
use crate::models::LogRegModel;

/// Logistic regression classifier over one label axis
#[derive(Debug, Clone)]
pub struct LogRegClassifier<L: Label> {
    classes: Vec<L>,
    logreg: Option<MulticlassLogisticRegression>,
}

impl<L: Label> Default for LogRegClassifier<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> LogRegClassifier<L> {
    pub fn new() -> Self {
        Self {
            classes: vec![],
            logreg: None,
        }
    }

    pub fn from_model(model: LogRegModel<L>) -> Result<Self> {
        let nb_classes = model.classes.len();
        if model.intercept.len() != nb_classes || model.coeffs.len() != nb_classes {
            return Err(NeuronError::ModelLoad(format!(
                "{} classifier has {} classes, {} intercepts and {} coefficient rows",
                L::AXIS,
                nb_classes,
                model.intercept.len(),
                model.coeffs.len()
            ))
            .into());
        }
        let nb_features = model.coeffs.first().map(|row| row.len()).unwrap_or(0);
        if model.coeffs.iter().any(|row| row.len() != nb_features) {
            return Err(NeuronError::ModelLoad(format!(
                "{} classifier has coefficient rows of different lengths",
                L::AXIS
            ))
            .into());
        }
        let coeffs = model.coeffs.into_iter().flatten().collect_vec();
        let weights = Array2::from_shape_vec((nb_classes, nb_features), coeffs)?
            .reversed_axes()
            .as_standard_layout()
            .to_owned();
        let logreg = MulticlassLogisticRegression::new(Array1::from(model.intercept), weights)?;
        Ok(Self {
            classes: model.classes,
            logreg: Some(logreg),
        })
    }

    pub fn to_model(&self) -> Result<LogRegModel<L>> {
        let logreg = self.logreg()?;
        Ok(LogRegModel {
            classes: self.classes.clone(),
            intercept: logreg.intercept().to_vec(),
            coeffs: logreg
                .weights()
                .t()
                .outer_iter()
                .map(|row| row.to_vec())
                .collect(),
        })
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn nb_features(&self) -> Result<usize> {
        Ok(self.logreg()?.nb_features())
    }

    /// Fits the model on `nb_features` dimensional vectors. Classes are the distinct labels found
    /// in `labels`, in label order.
    pub fn fit(
        &mut self,
        features: &[FeatureVector],
        labels: &[L],
        nb_features: usize,
        config: &LogRegConfig,
    ) -> Result<()> {
        if features.len() != labels.len() {
            return Err(NeuronError::InvalidInput(format!(
                "{} feature vectors for {} labels",
                features.len(),
                labels.len()
            ))
            .into());
        }
        let classes = labels.iter().cloned().sorted().dedup().collect_vec();
        if classes.len() < 2 {
            return Err(NeuronError::InsufficientClassSamples(format!(
                "at least 2 distinct {} labels are needed, found {}",
                L::AXIS,
                classes.len()
            ))
            .into());
        }

        let mut matrix = Array2::<f32>::zeros((features.len(), nb_features));
        for (row, vector) in features.iter().enumerate() {
            if vector.dim() != nb_features {
                return Err(NeuronError::DimensionMismatch {
                    expected: nb_features,
                    found: vector.dim(),
                }
                .into());
            }
            for (ix, value) in vector.entries() {
                matrix[[row, *ix]] = *value;
            }
        }
        let targets = labels
            .iter()
            .map(|label| classes.binary_search(label).unwrap_or(0))
            .collect_vec();

        let logreg =
            MulticlassLogisticRegression::fit(matrix.view(), &targets, classes.len(), config)?;
        self.classes = classes;
        self.logreg = Some(logreg);
        Ok(())
    }

    fn logreg(&self) -> Result<&MulticlassLogisticRegression> {
        self.logreg
            .as_ref()
            .ok_or_else(|| NeuronError::UninitializedModel("LogRegClassifier").into())
    }
}

impl<L: Label> Classifier<L> for LogRegClassifier<L> {
    fn predict_distribution(&self, features: &FeatureVector) -> Result<BTreeMap<L, f32>> {
        let probabilities = self.logreg()?.run(features)?;
        Ok(self
            .classes
            .iter()
            .cloned()
            .zip(probabilities.iter().cloned())
            .collect())
    }
}
