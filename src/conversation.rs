use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate};
use itertools::Itertools;

use crate::errors::*;
use crate::ontology::{
    ClassificationResult, ConversationAnalysis, ConversationSummary, EnrichedMessage, Message,
};

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M%z",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H",
    "%Y-%m-%d %H",
    "%Y-%m-%d",
    "%Y%m%d",
];

/// Classification capability consumed by the aggregator
pub trait TextClassifier: Send + Sync {
    /// Classifies each text, results are returned in input order
    fn classify_batch(&self, texts: &[&str]) -> Result<Vec<ClassificationResult>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateResolution {
    Resolved(NaiveDate),
    Unresolved,
}

impl DateResolution {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            DateResolution::Resolved(date) => Some(date),
            DateResolution::Unresolved => None,
        }
    }
}

/// Resolves the calendar date of an ISO 8601 timestamp.
///
/// Timestamps with an offset keep the date of their own offset. Absent, empty and malformed
/// timestamps are `Unresolved`.
pub fn resolve_date(timestamp: Option<&str>) -> DateResolution {
    let timestamp = match timestamp.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return DateResolution::Unresolved,
    };
    if let Ok(date_time) = DateTime::parse_from_rfc3339(timestamp) {
        return DateResolution::Resolved(date_time.date_naive());
    }
    TIMESTAMP_FORMATS
        .iter()
        .filter_map(|format| parse_date(timestamp, format))
        .next()
        .map(DateResolution::Resolved)
        .unwrap_or(DateResolution::Unresolved)
}

/// Only the date fields are kept, the time fields just have to be well formed
fn parse_date(timestamp: &str, format: &str) -> Option<NaiveDate> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, timestamp, StrftimeItems::new(format)).ok()?;
    parsed.to_naive_date().ok()
}

pub struct ConversationAggregator;

impl ConversationAggregator {
    /// Classifies every message and tallies labels per day and over the whole conversation.
    ///
    /// Messages whose date cannot be resolved are counted in the totals only, so that for every
    /// label the sum of its daily counts plus its unresolved count equals its total.
    pub fn aggregate<C: TextClassifier + ?Sized>(
        messages: &[Message],
        classifier: &C,
    ) -> Result<ConversationAnalysis> {
        let texts = messages.iter().map(|m| m.text.as_str()).collect_vec();
        let results = classifier.classify_batch(&texts)?;
        if results.len() != messages.len() {
            return Err(NeuronError::DimensionMismatch {
                expected: messages.len(),
                found: results.len(),
            }
            .into());
        }

        let mut summary = ConversationSummary::default();
        let enriched_messages = messages
            .iter()
            .zip(results.into_iter())
            .map(|(message, result)| {
                let date = resolve_date(message.timestamp.as_deref()).date();
                *summary.emotion_totals.entry(result.emotion).or_insert(0) += 1;
                *summary.sentiment_totals.entry(result.sentiment).or_insert(0) += 1;
                if let Some(day) = date {
                    *summary
                        .emotion_per_day
                        .entry(day)
                        .or_default()
                        .entry(result.emotion)
                        .or_insert(0) += 1;
                    *summary
                        .sentiment_per_day
                        .entry(day)
                        .or_default()
                        .entry(result.sentiment)
                        .or_insert(0) += 1;
                }
                EnrichedMessage {
                    result,
                    timestamp: message.timestamp.clone(),
                    date,
                }
            })
            .collect();

        Ok(ConversationAnalysis {
            messages: enriched_messages,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreemap;

    use super::*;
    use crate::labels::{Emotion, Label, Sentiment};
    use crate::testutils::MockedTextClassifier;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn resolve_date_works() {
        let expected_resolutions = vec![
            (Some("2024-01-01T10:00:00"), DateResolution::Resolved(date(2024, 1, 1))),
            (Some("2024-01-02 09:30:15.250"), DateResolution::Resolved(date(2024, 1, 2))),
            (Some("2024-01-03T23:59"), DateResolution::Resolved(date(2024, 1, 3))),
            (Some("2024-01-04"), DateResolution::Resolved(date(2024, 1, 4))),
            (Some("2024-01-05T23:30:00-03:00"), DateResolution::Resolved(date(2024, 1, 5))),
            (Some("2024-01-06T01:00:00Z"), DateResolution::Resolved(date(2024, 1, 6))),
            (Some("ontem à noite"), DateResolution::Unresolved),
            (Some("2024-13-01"), DateResolution::Unresolved),
            (Some(""), DateResolution::Unresolved),
            (None, DateResolution::Unresolved),
        ];
        for (timestamp, expected_resolution) in expected_resolutions {
            assert_eq!(
                expected_resolution,
                resolve_date(timestamp),
                "wrong resolution for {:?}",
                timestamp
            );
        }
    }

    #[test]
    fn resolve_date_accepts_compact_offsets_and_partial_times() {
        let expected_resolutions = vec![
            ("2024-01-01T10:00:00+0300", DateResolution::Resolved(date(2024, 1, 1))),
            ("2024-01-02 22:15+0100", DateResolution::Resolved(date(2024, 1, 2))),
            ("2024-01-03T10", DateResolution::Resolved(date(2024, 1, 3))),
            ("2024-01-04 08", DateResolution::Resolved(date(2024, 1, 4))),
            ("20240105", DateResolution::Resolved(date(2024, 1, 5))),
            ("2024-01-06T25", DateResolution::Unresolved),
            ("2024-02-30", DateResolution::Unresolved),
            ("202401", DateResolution::Unresolved),
        ];
        for (timestamp, expected_resolution) in expected_resolutions {
            assert_eq!(
                expected_resolution,
                resolve_date(Some(timestamp)),
                "wrong resolution for {:?}",
                timestamp
            );
        }
    }

    #[test]
    fn aggregate_buckets_messages_per_day() {
        // Given
        let messages = vec![
            Message::new("estou feliz com a entrega", Some("2024-01-01T10:00:00")),
            Message::new("estou preocupado com o prazo", Some("2024-01-02T09:00:00")),
        ];
        let classifier = MockedTextClassifier::default();

        // When
        let analysis = ConversationAggregator::aggregate(&messages, &classifier).unwrap();

        // Then
        let expected_summary = ConversationSummary {
            emotion_per_day: btreemap! {
                date(2024, 1, 1) => btreemap! { Emotion::Alegria => 1 },
                date(2024, 1, 2) => btreemap! { Emotion::Medo => 1 },
            },
            sentiment_per_day: btreemap! {
                date(2024, 1, 1) => btreemap! { Sentiment::Positivo => 1 },
                date(2024, 1, 2) => btreemap! { Sentiment::Negativo => 1 },
            },
            emotion_totals: btreemap! { Emotion::Alegria => 1, Emotion::Medo => 1 },
            sentiment_totals: btreemap! { Sentiment::Positivo => 1, Sentiment::Negativo => 1 },
        };
        assert_eq!(expected_summary, analysis.summary);
        assert_eq!(2, analysis.messages.len());
        assert_eq!(Some(date(2024, 1, 2)), analysis.messages[1].date);
        assert_eq!("estou preocupado com o prazo", analysis.messages[1].result.text);
    }

    #[test]
    fn aggregate_counts_unresolved_messages_in_totals_only() {
        // Given
        let messages = vec![
            Message::new("que dia feliz", Some("2024-03-10T08:00:00")),
            Message::new("muito feliz", None),
            Message::new("tenho medo", Some("amanhã")),
            Message::new("medo de novo", Some("2024-03-10")),
            Message::new("tudo triste", Some("2024-03-11T18:45:00+01:00")),
        ];
        let classifier = MockedTextClassifier::default();

        // When
        let analysis = ConversationAggregator::aggregate(&messages, &classifier).unwrap();

        // Then
        let summary = &analysis.summary;
        for emotion in Emotion::all() {
            let daily: usize = summary
                .emotion_per_day
                .values()
                .map(|counts| counts.get(emotion).cloned().unwrap_or(0))
                .sum();
            let unresolved = analysis
                .messages
                .iter()
                .filter(|m| m.date.is_none() && m.result.emotion == *emotion)
                .count();
            let total = summary.emotion_totals.get(emotion).cloned().unwrap_or(0);
            assert_eq!(total, daily + unresolved);
        }
        for sentiment in Sentiment::all() {
            let daily: usize = summary
                .sentiment_per_day
                .values()
                .map(|counts| counts.get(sentiment).cloned().unwrap_or(0))
                .sum();
            let unresolved = analysis
                .messages
                .iter()
                .filter(|m| m.date.is_none() && m.result.sentiment == *sentiment)
                .count();
            let total = summary.sentiment_totals.get(sentiment).cloned().unwrap_or(0);
            assert_eq!(total, daily + unresolved);
        }
        assert_eq!(5, summary.emotion_totals.values().sum::<usize>());
        assert_eq!(2, summary.emotion_per_day.len());
    }

    #[test]
    fn aggregate_handles_empty_conversations() {
        let analysis =
            ConversationAggregator::aggregate(&[], &MockedTextClassifier::default()).unwrap();
        assert!(analysis.messages.is_empty());
        assert_eq!(ConversationSummary::default(), analysis.summary);
    }

    #[test]
    fn conversation_analysis_serializes_with_iso_dates() {
        // Given
        let messages = vec![
            Message::new("estou feliz", Some("2024-01-01T10:00:00")),
            Message::new("estou com medo", None),
        ];
        let analysis =
            ConversationAggregator::aggregate(&messages, &MockedTextClassifier::default()).unwrap();

        // When
        let value = serde_json::to_value(&analysis).unwrap();

        // Then
        assert_eq!("2024-01-01", value["mensagens"][0]["data"]);
        assert!(value["mensagens"][1]["data"].is_null());
        assert_eq!("alegria", value["mensagens"][0]["emocao"]);
        assert_eq!(1, value["resumo"]["emocao_por_dia"]["2024-01-01"]["alegria"]);
        assert_eq!(1, value["resumo"]["emocao_total"]["medo"]);
        assert_eq!(1, value["resumo"]["sentimento_total"]["negativo"]);
    }
}
