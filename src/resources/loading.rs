use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use failure::ResultExt;
use log::info;
use serde_derive::Deserialize;

use crate::errors::*;
use crate::resources::stemmer::{HashMapStemmer, RslpStemmer, Stemmer};
use crate::resources::{read_stop_words, SharedResources};

#[derive(Debug, Deserialize, Clone)]
struct ResourcesMetadata {
    language: String,
    stems: Option<String>,
    stop_words: Option<String>,
}

/// Loads resources from a directory containing a `metadata.json` file.
///
/// When the metadata does not reference a stems file, the rule based RSLP stemmer is used, and
/// when it does not reference a stop words file, the built-in Portuguese list is used.
pub fn load_shared_resources<P: AsRef<Path>>(resources_dir: P) -> Result<SharedResources> {
    let metadata_file_path = resources_dir.as_ref().join("metadata.json");
    let metadata_file = File::open(&metadata_file_path).with_context(|_| {
        format!(
            "Cannot open resources metadata file '{:?}'",
            metadata_file_path
        )
    })?;
    let metadata: ResourcesMetadata =
        serde_json::from_reader(metadata_file).with_context(|_| {
            format!(
                "Cannot deserialize resources metadata file '{:?}'",
                metadata_file_path
            )
        })?;
    info!("Loading '{}' resources ...", metadata.language);
    let stemmer = load_stemmer(&resources_dir, &metadata)?;
    let stop_words = match metadata.stop_words.as_ref() {
        Some(stop_words_name) => load_stop_words(&resources_dir, stop_words_name)?,
        None => SharedResources::portuguese()?.stop_words,
    };
    info!("'{}' resources loaded", metadata.language);
    Ok(SharedResources {
        stemmer,
        stop_words,
    })
}

fn load_stemmer<P: AsRef<Path>>(
    resources_dir: &P,
    metadata: &ResourcesMetadata,
) -> Result<Arc<dyn Stemmer>> {
    if let Some(stems) = metadata.stems.as_ref() {
        let stemming_directory = resources_dir.as_ref().join("stemming");
        let stems_path = stemming_directory.join(stems).with_extension("txt");
        info!("Loading stemmer ({:?}) ...", stems_path);
        let stems_reader = File::open(&stems_path)
            .with_context(|_| format!("Cannot open stems file {:?}", stems_path))?;
        let stemmer = HashMapStemmer::from_reader(stems_reader)
            .with_context(|_| format!("Cannot read stems file {:?}", stems_path))?;
        info!("Stemmer loaded");
        Ok(Arc::new(stemmer))
    } else {
        info!("No stems file found, using the RSLP stemmer");
        Ok(Arc::new(RslpStemmer::default()))
    }
}

fn load_stop_words<P: AsRef<Path>>(
    resources_dir: &P,
    stop_words_name: &str,
) -> Result<HashSet<String>> {
    let stop_words_path = resources_dir
        .as_ref()
        .join(stop_words_name)
        .with_extension("txt");
    info!("Loading stop words ({:?}) ...", stop_words_path);
    let file = File::open(&stop_words_path)
        .with_context(|_| format!("Cannot open stop words file {:?}", stop_words_path))?;
    let stop_words = read_stop_words(file)?;
    info!("Stop words loaded");
    Ok(stop_words)
}
