use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;

/// A closed set of class labels that a classifier can be trained on
pub trait Label:
    Copy + Eq + Ord + Hash + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the label axis, as used in the artifact and the metrics
    const AXIS: &'static str;

    fn all() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .iter()
            .find(|label| label.as_str() == name)
            .cloned()
            .ok_or_else(|| {
                NeuronError::InvalidInput(format!("Unknown {} label '{}'", Self::AXIS, name))
                    .into()
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Alegria,
    Amor,
    Medo,
    Raiva,
    Surpresa,
    Tristeza,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negativo,
    Positivo,
}

impl Emotion {
    /// Sentiment polarity of an emotion. This mapping is fixed and never learned.
    pub fn sentiment(self) -> Sentiment {
        match self {
            Emotion::Alegria | Emotion::Amor | Emotion::Surpresa => Sentiment::Positivo,
            Emotion::Tristeza | Emotion::Raiva | Emotion::Medo => Sentiment::Negativo,
        }
    }
}

impl Label for Emotion {
    const AXIS: &'static str = "emocao";

    fn all() -> &'static [Self] {
        &[
            Emotion::Alegria,
            Emotion::Amor,
            Emotion::Medo,
            Emotion::Raiva,
            Emotion::Surpresa,
            Emotion::Tristeza,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Emotion::Alegria => "alegria",
            Emotion::Amor => "amor",
            Emotion::Medo => "medo",
            Emotion::Raiva => "raiva",
            Emotion::Surpresa => "surpresa",
            Emotion::Tristeza => "tristeza",
        }
    }
}

impl Label for Sentiment {
    const AXIS: &'static str = "sentimento";

    fn all() -> &'static [Self] {
        &[Sentiment::Negativo, Sentiment::Positivo]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negativo => "negativo",
            Sentiment::Positivo => "positivo",
        }
    }
}

impl FromStr for Emotion {
    type Err = ::failure::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl FromStr for Sentiment {
    type Err = ::failure::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
