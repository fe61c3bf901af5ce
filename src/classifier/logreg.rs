use log::debug;
use ndarray::prelude::*;

use crate::classifier::FeatureVector;
use crate::config::LogRegConfig;
use crate::errors::*;

/// Multinomial logistic regression, class probabilities are the softmax of the linear scores
#[derive(Debug, Clone)]
pub struct MulticlassLogisticRegression {
    /// vector with shape (c)
    intercept: Array1<f32>,
    /// matrix with shape (f, c)
    /// ------------------------
    ///
    /// - f = number of features
    /// - c = number of classes
    weights: Array2<f32>,
}

impl MulticlassLogisticRegression {
    pub fn nb_features(&self) -> usize {
        self.weights.dim().0
    }

    pub fn nb_classes(&self) -> usize {
        self.weights.dim().1
    }

    pub fn intercept(&self) -> ArrayView1<f32> {
        self.intercept.view()
    }

    pub fn weights(&self) -> ArrayView2<f32> {
        self.weights.view()
    }
}

impl MulticlassLogisticRegression {
    pub fn new(intercept: Array1<f32>, weights: Array2<f32>) -> Result<Self> {
        if intercept.dim() != weights.dim().1 {
            return Err(NeuronError::DimensionMismatch {
                expected: weights.dim().1,
                found: intercept.dim(),
            }
            .into());
        }
        Ok(Self { intercept, weights })
    }

    /// Fits the model with full batch gradient descent on the L2 regularized log loss.
    ///
    /// `features` has shape (n, f) and `targets` holds the class index of each of the n rows.
    pub fn fit(
        features: ArrayView2<f32>,
        targets: &[usize],
        nb_classes: usize,
        config: &LogRegConfig,
    ) -> Result<Self> {
        let (nb_samples, nb_features) = features.dim();
        if nb_samples != targets.len() {
            return Err(NeuronError::DimensionMismatch {
                expected: nb_samples,
                found: targets.len(),
            }
            .into());
        }
        if nb_samples == 0 {
            return Err(
                NeuronError::InvalidInput("cannot fit on an empty dataset".to_string()).into(),
            );
        }
        let mut one_hot = Array2::<f32>::zeros((nb_samples, nb_classes));
        for (row, target) in targets.iter().enumerate() {
            if *target >= nb_classes {
                return Err(NeuronError::InvalidInput(format!(
                    "class index {} out of range for {} classes",
                    target, nb_classes
                ))
                .into());
            }
            one_hot[[row, *target]] = 1.;
        }

        let n = nb_samples as f32;
        let alpha = 1. / (config.c * n);
        let mut weights = Array2::<f32>::zeros((nb_features, nb_classes));
        let mut intercept = Array1::<f32>::zeros(nb_classes);
        let mut previous_loss = std::f32::INFINITY;

        for iteration in 0..config.max_iter {
            let scores = features.dot(&weights) + &intercept;
            let probabilities = softmax_rows(scores);

            let log_loss = -(&one_hot * &probabilities.mapv(|p| p.max(1e-15).ln())).sum() / n;
            let penalty = 0.5 * alpha * weights.mapv(|w| w * w).sum();
            let loss = log_loss + penalty;

            let errors = (&probabilities - &one_hot) / n;
            let weights_gradient = features.t().dot(&errors) + &weights * alpha;
            let intercept_gradient = errors.sum_axis(Axis(0));
            weights.scaled_add(-config.learning_rate, &weights_gradient);
            intercept.scaled_add(-config.learning_rate, &intercept_gradient);

            if (previous_loss - loss).abs() < config.tolerance {
                debug!("Converged at iteration {} with loss {}", iteration, loss);
                break;
            }
            previous_loss = loss;
        }

        Self::new(intercept, weights)
    }

    /// Returns the probability of each class, in the same order as the model classes
    pub fn run(&self, features: &FeatureVector) -> Result<Array1<f32>> {
        if features.dim() != self.nb_features() {
            return Err(NeuronError::DimensionMismatch {
                expected: self.nb_features(),
                found: features.dim(),
            }
            .into());
        }
        let mut scores = self.intercept.clone();
        for (ix, value) in features.entries() {
            scores.scaled_add(*value, &self.weights.row(*ix));
        }
        Ok(softmax(scores))
    }
}

fn softmax(mut scores: Array1<f32>) -> Array1<f32> {
    let max_score = scores.fold(std::f32::NEG_INFINITY, |max, s| max.max(*s));
    scores.mapv_inplace(|s| (s - max_score).exp());
    let divider = scores.sum();
    scores /= divider;
    scores
}

fn softmax_rows(mut scores: Array2<f32>) -> Array2<f32> {
    for mut row in scores.outer_iter_mut() {
        let max_score = row.fold(std::f32::NEG_INFINITY, |max, s| max.max(*s));
        row.mapv_inplace(|s| (s - max_score).exp());
        let divider = row.sum();
        row /= divider;
    }
    scores
}
