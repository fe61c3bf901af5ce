use std::collections::HashMap;
use std::io::Read;
use std::iter::FromIterator;

use crate::errors::*;
use crate::resources::rslp::{StemmingRule, StemmingStep, RSLP_STEPS};

pub trait Stemmer: Send + Sync {
    fn stem(&self, value: &str) -> String;
}

pub struct HashMapStemmer {
    values: HashMap<String, String>,
}

impl HashMapStemmer {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut values = HashMap::<String, String>::new();
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .quoting(false)
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        for record in csv_reader.records() {
            let elements = record?;
            let stem = &elements[0];
            for value in elements.iter().skip(1) {
                values.insert(value.to_string(), stem.to_string());
            }
        }
        Ok(Self { values })
    }
}

impl FromIterator<(String, String)> for HashMapStemmer {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: HashMap::from_iter(iter),
        }
    }
}

impl Stemmer for HashMapStemmer {
    fn stem(&self, value: &str) -> String {
        self.values
            .get(value)
            .map(|v| v.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}

/// Rule based stemmer for Portuguese (Orengo & Huyck's RSLP suffix stripping)
pub struct RslpStemmer {
    steps: &'static [StemmingStep],
}

impl Default for RslpStemmer {
    fn default() -> Self {
        Self { steps: RSLP_STEPS }
    }
}

impl RslpStemmer {
    fn step(&self, name: &str) -> Option<&StemmingStep> {
        self.steps.iter().find(|step| step.name == name)
    }

    /// Applies the first matching rule of a step, returns `None` when no rule matched
    fn apply_step(&self, name: &str, word: &str) -> Option<String> {
        self.step(name)
            .and_then(|step| step.rules.iter().find(|rule| rule.matches(word)))
            .map(|rule| rule.apply(word))
    }
}

impl StemmingRule {
    fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix)
            && word.chars().count() >= self.suffix.chars().count() + self.min_stem_size
            && !self.exceptions.contains(&word)
    }

    fn apply(&self, word: &str) -> String {
        format!(
            "{}{}",
            &word[..word.len() - self.suffix.len()],
            self.replacement
        )
    }
}

impl Stemmer for RslpStemmer {
    fn stem(&self, value: &str) -> String {
        let mut word = value.to_lowercase();
        if word.ends_with('s') {
            word = self.apply_step("plural", &word).unwrap_or(word);
        }
        if word.ends_with('a') {
            word = self.apply_step("feminine", &word).unwrap_or(word);
        }
        word = self.apply_step("augmentative", &word).unwrap_or(word);
        word = self.apply_step("adverb", &word).unwrap_or(word);
        match self.apply_step("noun", &word) {
            Some(stem) => stem,
            None => match self.apply_step("verb", &word) {
                Some(stem) => stem,
                None => self.apply_step("vowel", &word).unwrap_or(word),
            },
        }
    }
}
