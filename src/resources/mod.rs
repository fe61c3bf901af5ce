pub mod loading;
mod rslp;
pub mod stemmer;

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::sync::{Arc, Mutex};

use failure::format_err;
use log::info;

use crate::errors::*;
use crate::resources::stemmer::{RslpStemmer, Stemmer};

const PORTUGUESE_STOP_WORDS: &str = include_str!("../../resources/pt_br/stop_words.txt");

/// Linguistic resources used by the text normalizer, loaded once and shared read-only
pub struct SharedResources {
    pub stemmer: Arc<dyn Stemmer>,
    pub stop_words: HashSet<String>,
}

impl SharedResources {
    /// Built-in Portuguese resources: RSLP stemmer and the Portuguese stop words list
    pub fn portuguese() -> Result<Self> {
        Ok(Self {
            stemmer: Arc::new(RslpStemmer::default()),
            stop_words: read_stop_words(PORTUGUESE_STOP_WORDS.as_bytes())?,
        })
    }
}

pub fn read_stop_words<R: Read>(reader: R) -> Result<HashSet<String>> {
    let reader = BufReader::new(reader);
    let mut stop_words = HashSet::<String>::new();
    for line in reader.lines() {
        let stop_word = line?;
        let stop_word = stop_word.trim();
        if !stop_word.is_empty() {
            stop_words.insert(stop_word.to_lowercase());
        }
    }
    Ok(stop_words)
}

/// Holds the shared resources of the process once they have been loaded.
///
/// Loading happens at most once: the first call to `get_or_load` runs the loader, subsequent
/// calls hand out the same resources.
#[derive(Default)]
pub struct ResourceCache {
    resources: Mutex<Option<Arc<SharedResources>>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<F>(&self, loader: F) -> Result<Arc<SharedResources>>
    where
        F: FnOnce() -> Result<SharedResources>,
    {
        let mut guard = self
            .resources
            .lock()
            .map_err(|e| format_err!("Poisoned resource cache: {}", e))?;
        if let Some(resources) = guard.as_ref() {
            return Ok(resources.clone());
        }
        info!("Loading shared resources ...");
        let resources = Arc::new(loader()?);
        info!("Shared resources loaded");
        *guard = Some(resources.clone());
        Ok(resources)
    }

    pub fn is_loaded(&self) -> bool {
        self.resources
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
