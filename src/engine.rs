use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;

use crate::corpus::build_corpus;
use crate::document::{Document, RawRecord};
use crate::loader;
use crate::normalizer::Normalizer;
use crate::stats::CorpusStats;
use crate::tfidf::{artist_tfidf, document_tfidf, TermWeights};

/// TF-IDF analysis over one loaded corpus.
///
/// Everything is computed once at construction and cached for the
/// lifetime of the engine; a different corpus means building a new engine
/// value. There is no incremental update path.
pub struct LyricsEngine {
    documents: Vec<Document>,
    document_weights: Vec<TermWeights>,
    artist_weights: IndexMap<String, TermWeights>,
    stats: CorpusStats,
}

impl LyricsEngine {
    /// Build the engine from raw scraped records.
    ///
    /// Initializes the linguistic resources, filters the records into a
    /// corpus and scores it. An empty corpus is not an error: all counts
    /// are zero and all maps are empty.
    pub fn from_records(records: Vec<RawRecord>) -> Result<Self> {
        let normalizer = Normalizer::new()?;
        let documents = build_corpus(&normalizer, records);

        if documents.is_empty() {
            tracing::warn!("corpus is empty after filtering");
        }

        let document_weights = document_tfidf(&documents);
        let artist_weights = artist_tfidf(&documents);
        let stats = CorpusStats::from_corpus(&documents);

        tracing::info!(
            "analyzed {} songs by {} artists ({} words)",
            stats.document_count,
            stats.artist_count,
            stats.total_words
        );

        Ok(Self {
            documents,
            document_weights,
            artist_weights,
            stats,
        })
    }

    /// Load a corpus file and build the engine from it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let records = loader::load_records(path)?;
        Self::from_records(records)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn artist_count(&self) -> usize {
        self.stats.artist_count
    }

    /// Distinct artists, in first-appearance order.
    pub fn artists(&self) -> Vec<&str> {
        self.artist_weights.keys().map(|a| a.as_str()).collect()
    }

    /// TF-IDF weights of one document, by corpus position.
    pub fn document_weights(&self, index: usize) -> Option<&TermWeights> {
        self.document_weights.get(index)
    }

    /// TF-IDF weights of an artist's aggregate vocabulary.
    ///
    /// An unknown artist yields an empty map, not an error.
    pub fn artist_weights(&self, artist: &str) -> TermWeights {
        self.artist_weights.get(artist).cloned().unwrap_or_default()
    }

    /// An artist's documents with their corpus positions.
    pub fn documents_by_artist(&self, artist: &str) -> Vec<(usize, &Document)> {
        self.documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| doc.artist == artist)
            .collect()
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }
}
