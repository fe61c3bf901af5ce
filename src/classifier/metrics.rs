use std::collections::BTreeMap;

use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::labels::Label;

/// Held out evaluation of both label axes, computed once at training time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    #[serde(rename = "emocao")]
    pub emotion: AxisMetrics,
    #[serde(rename = "sentimento")]
    pub sentiment: AxisMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMetrics {
    pub accuracy: f32,
    pub classification_report: ClassificationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub classes: BTreeMap<String, ClassMetrics>,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f32,
    pub recall: f32,
    pub f1_score: f32,
    pub support: usize,
}

/// Computes accuracy and per class precision, recall and f1 score.
///
/// Reported classes are those appearing either in `y_true` or in `y_pred`, a ratio with a zero
/// denominator is reported as 0.
pub fn evaluate<L: Label>(y_true: &[L], y_pred: &[L]) -> AxisMetrics {
    let nb_samples = y_true.len();
    let nb_correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, prediction)| truth == prediction)
        .count();
    let accuracy = ratio(nb_correct, nb_samples);

    let labels = y_true.iter().chain(y_pred.iter()).cloned().sorted().dedup();
    let classes: BTreeMap<String, ClassMetrics> = labels
        .map(|label| {
            let true_positives = y_true
                .iter()
                .zip(y_pred.iter())
                .filter(|(truth, prediction)| **truth == label && **prediction == label)
                .count();
            let support = y_true.iter().filter(|truth| **truth == label).count();
            let nb_predicted = y_pred.iter().filter(|prediction| **prediction == label).count();
            let precision = ratio(true_positives, nb_predicted);
            let recall = ratio(true_positives, support);
            let f1_score = if precision + recall > 0. {
                2. * precision * recall / (precision + recall)
            } else {
                0.
            };
            let metrics = ClassMetrics {
                precision,
                recall,
                f1_score,
                support,
            };
            (label.as_str().to_string(), metrics)
        })
        .collect();

    let macro_avg = average(classes.values().map(|m| (1., m)), nb_samples);
    let weighted_avg = average(
        classes.values().map(|m| (m.support as f32, m)),
        nb_samples,
    );

    AxisMetrics {
        accuracy,
        classification_report: ClassificationReport {
            classes,
            macro_avg,
            weighted_avg,
        },
    }
}

/// Weighted mean of the class scores, the support of an average is the number of samples
fn average<'a, I>(weighted_metrics: I, nb_samples: usize) -> ClassMetrics
where
    I: Iterator<Item = (f32, &'a ClassMetrics)>,
{
    let (total_weight, precision, recall, f1_score) = weighted_metrics.fold(
        (0., 0., 0., 0.),
        |(total, precision, recall, f1_score), (weight, metrics)| {
            (
                total + weight,
                precision + weight * metrics.precision,
                recall + weight * metrics.recall,
                f1_score + weight * metrics.f1_score,
            )
        },
    );
    let divider = if total_weight > 0. { total_weight } else { 1. };
    ClassMetrics {
        precision: precision / divider,
        recall: recall / divider,
        f1_score: f1_score / divider,
        support: nb_samples,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.
    } else {
        numerator as f32 / denominator as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{Emotion, Sentiment};
    use crate::testutils::epsilon_eq;

    #[test]
    fn evaluate_works() {
        // Given
        let y_true = vec![
            Sentiment::Positivo,
            Sentiment::Positivo,
            Sentiment::Positivo,
            Sentiment::Negativo,
        ];
        let y_pred = vec![
            Sentiment::Positivo,
            Sentiment::Negativo,
            Sentiment::Positivo,
            Sentiment::Negativo,
        ];

        // When
        let metrics = evaluate(&y_true, &y_pred);

        // Then
        assert!(epsilon_eq(0.75, metrics.accuracy, 1e-6));
        let report = &metrics.classification_report;
        let positive = report.classes["positivo"];
        assert!(epsilon_eq(1.0, positive.precision, 1e-6));
        assert!(epsilon_eq(2. / 3., positive.recall, 1e-6));
        assert!(epsilon_eq(0.8, positive.f1_score, 1e-6));
        assert_eq!(3, positive.support);
        let negative = report.classes["negativo"];
        assert!(epsilon_eq(0.5, negative.precision, 1e-6));
        assert!(epsilon_eq(1.0, negative.recall, 1e-6));
        assert_eq!(1, negative.support);
        assert!(epsilon_eq(0.75, report.macro_avg.precision, 1e-6));
        assert!(epsilon_eq(
            (3. * 0.8 + 2. / 3.) / 4.,
            report.weighted_avg.f1_score,
            1e-6
        ));
        assert_eq!(4, report.weighted_avg.support);
    }

    #[test]
    fn evaluate_reports_predicted_only_classes_with_zero_scores() {
        // Given
        let y_true = vec![Emotion::Alegria, Emotion::Alegria];
        let y_pred = vec![Emotion::Alegria, Emotion::Medo];

        // When
        let metrics = evaluate(&y_true, &y_pred);

        // Then
        let fear = metrics.classification_report.classes["medo"];
        assert_eq!(0, fear.support);
        assert_eq!(0., fear.precision);
        assert_eq!(0., fear.recall);
        assert_eq!(0., fear.f1_score);
    }

    #[test]
    fn evaluate_handles_empty_inputs() {
        let metrics = evaluate::<Emotion>(&[], &[]);
        assert_eq!(0., metrics.accuracy);
        assert!(metrics.classification_report.classes.is_empty());
    }

    #[test]
    fn training_metrics_serialize_with_axis_names() {
        let axis = evaluate(&[Sentiment::Positivo], &[Sentiment::Positivo]);
        let metrics = TrainingMetrics {
            emotion: axis.clone(),
            sentiment: axis,
        };
        let value = serde_json::to_value(&metrics).unwrap();
        assert!(value.get("emocao").is_some());
        assert!(value.get("sentimento").is_some());
    }
}
