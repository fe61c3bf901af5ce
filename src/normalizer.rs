use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::resources::SharedResources;

lazy_static! {
    static ref NON_LETTERS_REGEX: Regex = Regex::new(r"[^a-záéíóúâêôãõç\s]").unwrap();
}

/// Turns raw Portuguese text into a string of space separated stems
#[derive(Clone)]
pub struct TextNormalizer {
    resources: Arc<SharedResources>,
}

impl TextNormalizer {
    pub fn new(resources: Arc<SharedResources>) -> Self {
        Self { resources }
    }

    /// Lowercases the text, replaces anything which is not a Portuguese letter with a space,
    /// removes stop words (including the optional `extra_stop_words`) and stems what remains.
    /// Stems which are themselves stop words are dropped too, so that normalizing an already
    /// normalized text leaves it unchanged.
    pub fn normalize(&self, text: &str, extra_stop_words: Option<&HashSet<String>>) -> String {
        if text.is_empty() {
            return String::new();
        }
        let lowercased = text.to_lowercase();
        let letters_only = NON_LETTERS_REGEX.replace_all(&lowercased, " ");
        let extra_stop_words: HashSet<String> = extra_stop_words
            .map(|words| words.iter().map(|w| w.to_lowercase()).collect())
            .unwrap_or_default();
        let is_stop_word = |word: &str| {
            self.resources.stop_words.contains(word) || extra_stop_words.contains(word)
        };
        letters_only
            .split_whitespace()
            .filter(|token| !is_stop_word(*token))
            .map(|token| self.resources.stemmer.stem(token))
            .filter(|stem| !is_stop_word(stem.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
