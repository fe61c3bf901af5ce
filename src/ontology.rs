use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

use crate::labels::{Emotion, Sentiment};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "emocao")]
    pub emotion: Emotion,
    #[serde(rename = "sentimento")]
    pub sentiment: Sentiment,
    #[serde(rename = "emocao_scores")]
    pub emotion_scores: BTreeMap<Emotion, f32>,
    #[serde(rename = "sentimento_scores")]
    pub sentiment_scores: BTreeMap<Sentiment, f32>,
}

/// A conversation message, the timestamp is kept as sent by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Message {
    pub fn new<S: Into<String>>(text: S, timestamp: Option<&str>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.map(|t| t.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedMessage {
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub timestamp: Option<String>,
    /// Calendar date of the timestamp, `None` when it could not be resolved
    #[serde(rename = "data")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversationSummary {
    #[serde(rename = "emocao_por_dia")]
    pub emotion_per_day: BTreeMap<NaiveDate, BTreeMap<Emotion, usize>>,
    #[serde(rename = "sentimento_por_dia")]
    pub sentiment_per_day: BTreeMap<NaiveDate, BTreeMap<Sentiment, usize>>,
    #[serde(rename = "emocao_total")]
    pub emotion_totals: BTreeMap<Emotion, usize>,
    #[serde(rename = "sentimento_total")]
    pub sentiment_totals: BTreeMap<Sentiment, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationAnalysis {
    #[serde(rename = "mensagens")]
    pub messages: Vec<EnrichedMessage>,
    #[serde(rename = "resumo")]
    pub summary: ConversationSummary,
}
