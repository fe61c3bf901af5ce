use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use log::info;
use ndarray::prelude::*;

use crate::errors::*;
use crate::models::TfidfVectorizerModel;

/// Sparse tf-idf representation of a document, entries are sorted by feature index
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f32)>,
}

impl FeatureVector {
    /// Fails when an index is out of `0..dimension` or appears twice
    pub fn new(dimension: usize, mut entries: Vec<(usize, f32)>) -> Result<Self> {
        entries.sort_by_key(|(ix, _)| *ix);
        if let Some((ix, _)) = entries.iter().find(|(ix, _)| *ix >= dimension) {
            return Err(NeuronError::DimensionMismatch {
                expected: dimension,
                found: ix + 1,
            }
            .into());
        }
        let duplicate = entries
            .iter()
            .tuple_windows()
            .find(|((a, _), (b, _))| a == b);
        if let Some(((ix, _), _)) = duplicate {
            return Err(NeuronError::InvalidInput(format!(
                "feature index {} appears more than once",
                ix
            ))
            .into());
        }
        Ok(Self { dimension, entries })
    }

    pub fn dim(&self) -> usize {
        self.dimension
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_dense(&self) -> Array1<f32> {
        let mut dense = Array1::zeros(self.dimension);
        for (ix, value) in &self.entries {
            dense[*ix] = *value;
        }
        dense
    }
}

/// Frozen term to feature index mapping, along with the idf weight of each feature
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: BTreeMap<String, usize>,
    idf_diag: Vec<f32>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.idf_diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf_diag.is_empty()
    }

    pub fn index(&self, term: &str) -> Option<usize> {
        self.terms.get(term).cloned()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.index(term).map(|ix| self.idf_diag[ix])
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|term| term.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
    vocabulary: Option<Vocabulary>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            vocabulary: None,
        }
    }

    pub fn from_model(model: TfidfVectorizerModel) -> Result<Self> {
        let nb_features = model.idf_diag.len();
        let mut seen_indexes = HashSet::new();
        for (term, ix) in model.vocab.iter() {
            if *ix >= nb_features || !seen_indexes.insert(*ix) {
                return Err(NeuronError::ModelLoad(format!(
                    "invalid feature index {} for term '{}' in a vocabulary of size {}",
                    ix, term, nb_features
                ))
                .into());
            }
        }
        if seen_indexes.len() != nb_features {
            return Err(NeuronError::ModelLoad(format!(
                "vocabulary has {} terms but {} idf weights",
                seen_indexes.len(),
                nb_features
            ))
            .into());
        }
        Ok(Self {
            max_features: model.max_features,
            vocabulary: Some(Vocabulary {
                terms: model.vocab,
                idf_diag: model.idf_diag,
            }),
        })
    }

    pub fn to_model(&self) -> Result<TfidfVectorizerModel> {
        let vocabulary = self.vocabulary()?;
        Ok(TfidfVectorizerModel {
            max_features: self.max_features,
            vocab: vocabulary.terms.clone(),
            idf_diag: vocabulary.idf_diag.clone(),
        })
    }

    pub fn vocabulary(&self) -> Result<&Vocabulary> {
        self.vocabulary
            .as_ref()
            .ok_or_else(|| NeuronError::UninitializedModel("TfidfVectorizer").into())
    }

    pub fn nb_features(&self) -> Result<usize> {
        Ok(self.vocabulary()?.len())
    }

    /// Builds the vocabulary out of the `max_features` most frequent terms of the corpus, terms
    /// with the same frequency are ranked lexicographically. Feature indexes follow the
    /// lexicographic order of the selected terms.
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<&Vocabulary> {
        let mut term_frequencies: HashMap<&str, usize> = HashMap::new();
        let mut document_frequencies: HashMap<&str, usize> = HashMap::new();
        for document in corpus {
            let tokens = document.as_ref().split_whitespace().collect_vec();
            for token in tokens.iter() {
                *term_frequencies.entry(*token).or_insert(0) += 1;
            }
            for token in tokens.into_iter().unique() {
                *document_frequencies.entry(token).or_insert(0) += 1;
            }
        }

        let selected_terms: BTreeMap<String, usize> = term_frequencies
            .into_iter()
            .sorted_by(|(term_a, freq_a), (term_b, freq_b)| {
                freq_b.cmp(freq_a).then_with(|| term_a.cmp(term_b))
            })
            .take(self.max_features)
            .map(|(term, _)| term)
            .sorted()
            .enumerate()
            .map(|(ix, term)| (term.to_string(), ix))
            .collect();

        let nb_documents = corpus.len() as f32;
        let mut idf_diag = vec![0.; selected_terms.len()];
        for (term, ix) in selected_terms.iter() {
            let df = document_frequencies[term.as_str()] as f32;
            idf_diag[*ix] = ((1. + nb_documents) / (1. + df)).ln() + 1.;
        }
        info!(
            "Fitted tf-idf vocabulary of {} terms on {} documents",
            idf_diag.len(),
            corpus.len()
        );

        self.vocabulary = Some(Vocabulary {
            terms: selected_terms,
            idf_diag,
        });
        self.vocabulary()
    }

    pub fn transform<S: AsRef<str>>(&self, corpus: &[S]) -> Result<Vec<FeatureVector>> {
        let vocabulary = self.vocabulary()?;
        Ok(corpus
            .iter()
            .map(|document| transform_document(vocabulary, document.as_ref()))
            .collect())
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<Vec<FeatureVector>> {
        self.fit(corpus)?;
        self.transform(corpus)
    }
}

fn transform_document(vocabulary: &Vocabulary, document: &str) -> FeatureVector {
    let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
    for token in document.split_whitespace() {
        if let Some(ix) = vocabulary.index(token) {
            *counts.entry(ix).or_insert(0.) += 1.;
        }
    }
    let weighted = counts
        .into_iter()
        .map(|(ix, count)| (ix, count * vocabulary.idf_diag[ix]))
        .collect_vec();

    // Normalize tf-idf
    let l2_norm: f32 = weighted
        .iter()
        .fold(0., |norm, (_, v)| norm + v * v)
        .sqrt();
    let safe_l2_norm = if l2_norm > 0. { l2_norm } else { 1. };
    FeatureVector {
        dimension: vocabulary.len(),
        entries: weighted
            .into_iter()
            .map(|(ix, v)| (ix, v / safe_l2_norm))
            .collect(),
    }
}
