//! # Bag-of-words vectorizer
//!
//! Maps normalized text to fixed-width token count vectors.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::tokenize;

/// A count vectorizer over whitespace-separated tokens.
///
/// Token indices are assigned in lexicographic order, so two fits over the
/// same corpus always produce identical vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Creates an unfitted vectorizer with an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns the vocabulary from `documents`, replacing any previous one.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let terms: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| tokenize(doc.as_ref()))
            .collect();

        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = self.vocabulary.len(),
            "fitted vectorizer"
        );
    }

    /// Counts known tokens in `document`. Unknown tokens are ignored.
    ///
    /// # Examples
    /// ```
    /// use spamguard_core::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["klik link", "rapat besok"]);
    /// // vocabulary: besok=0, klik=1, link=2, rapat=3
    /// assert_eq!(vectorizer.transform("klik klik hadiah"), vec![0, 2, 0, 0]);
    /// ```
    pub fn transform(&self, document: &str) -> Vec<u32> {
        let mut vector = vec![0u32; self.vocabulary.len()];
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += 1;
            }
        }
        vector
    }

    /// Transforms every document in `documents`.
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Vec<u32>> {
        documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }

    /// Fits on `documents` and returns their count vectors.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<Vec<u32>> {
        self.fit(documents);
        self.transform_batch(documents)
    }

    /// Number of features (known tokens).
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Token to feature index map.
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }

    /// Tokens ordered by feature index.
    pub fn feature_names(&self) -> Vec<&str> {
        let mut names = vec![""; self.vocabulary.len()];
        for (term, &idx) in &self.vocabulary {
            names[idx] = term.as_str();
        }
        names
    }

    /// Indices must be a permutation of `0..len` for `transform` to be sound.
    pub(crate) fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.vocabulary.len()];
        self.vocabulary.values().all(|&idx| {
            idx < seen.len() && !std::mem::replace(&mut seen[idx], true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> CountVectorizer {
        let mut v = CountVectorizer::new();
        v.fit(&["hadiah gratis", "rapat jam sore", "hadiah besar"]);
        v
    }

    #[test]
    fn indices_are_sorted() {
        let v = fitted();
        assert_eq!(
            v.feature_names(),
            vec!["besar", "gratis", "hadiah", "jam", "rapat", "sore"]
        );
        assert_eq!(v.index_of("besar"), Some(0));
        assert_eq!(v.index_of("sore"), Some(5));
        assert_eq!(v.index_of("kopi"), None);
    }

    #[test]
    fn transform_counts_occurrences() {
        let v = fitted();
        assert_eq!(v.transform("hadiah hadiah sore"), vec![0, 0, 2, 0, 0, 1]);
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        let v = fitted();
        let vector = v.transform("kopi nanti");
        assert_eq!(vector.len(), v.vocabulary_len());
        assert!(vector.iter().all(|&c| c == 0));
    }

    #[test]
    fn empty_document_gives_zero_vector() {
        let v = fitted();
        assert_eq!(v.transform(""), vec![0; 6]);
    }

    #[test]
    fn unfitted_vectorizer_yields_empty_vectors() {
        let v = CountVectorizer::new();
        assert!(!v.is_fitted());
        assert!(v.transform("apa saja").is_empty());
    }

    #[test]
    fn consistency_detects_bad_indices() {
        assert!(fitted().is_consistent());

        let broken: CountVectorizer =
            serde_json::from_str(r#"{"vocabulary":{"a":0,"b":0}}"#).unwrap();
        assert!(!broken.is_consistent());

        let out_of_range: CountVectorizer =
            serde_json::from_str(r#"{"vocabulary":{"a":7}}"#).unwrap();
        assert!(!out_of_range.is_consistent());
    }

    #[test]
    fn refit_replaces_vocabulary() {
        let mut v = fitted();
        let rows = v.fit_transform(&["b a", "c"]);
        assert_eq!(v.feature_names(), vec!["a", "b", "c"]);
        assert_eq!(rows, vec![vec![1, 1, 0], vec![0, 0, 1]]);
    }
}
