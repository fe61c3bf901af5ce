use std::fs::File;
use std::io::Read;
use std::path::Path;

use failure::ResultExt;
use log::info;

use crate::errors::*;
use crate::labels::{Emotion, Label, Sentiment};

const TEXT_COLUMN: &str = "texto";
const EMOTION_COLUMN: &str = "emocao";

/// Training example, the sentiment is always the one mapped from the emotion
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledExample {
    pub raw_text: String,
    pub emotion: Emotion,
    pub sentiment: Sentiment,
}

impl LabeledExample {
    pub fn new<S: Into<String>>(raw_text: S, emotion: Emotion) -> Self {
        Self {
            raw_text: raw_text.into(),
            emotion,
            sentiment: emotion.sentiment(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub examples: Vec<LabeledExample>,
}

impl Dataset {
    /// Reads a CSV corpus with a header row, the `texto` and `emocao` columns are required and
    /// any other column is ignored
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let column_index = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| {
                    NeuronError::DatasetSchemaError(format!(
                        "the CSV must contain the '{}' and '{}' columns, missing '{}'",
                        TEXT_COLUMN, EMOTION_COLUMN, name
                    ))
                    .into()
                })
        };
        let text_ix = column_index(TEXT_COLUMN)?;
        let emotion_ix = column_index(EMOTION_COLUMN)?;

        let mut examples = vec![];
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let text = record.get(text_ix).unwrap_or("");
            let emotion_name = record.get(emotion_ix).unwrap_or("").trim();
            let emotion = Emotion::from_name(emotion_name).map_err(|_| {
                NeuronError::InvalidInput(format!(
                    "unknown emotion '{}' at row {}",
                    emotion_name,
                    row + 1
                ))
            })?;
            examples.push(LabeledExample::new(text, emotion));
        }
        Ok(Self { examples })
    }
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    info!("Loading dataset from '{:?}' ...", path);
    let file =
        File::open(path).with_context(|_| format!("Cannot open dataset file '{:?}'", path))?;
    let dataset = Dataset::from_reader(file)?;
    info!("Dataset loaded with {} examples", dataset.examples.len());
    Ok(dataset)
}
