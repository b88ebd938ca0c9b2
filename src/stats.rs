use indexmap::IndexMap;
use serde::Serialize;

use crate::document::Document;
use crate::tfidf::{document_frequency, inverse_document_frequency, TermWeights};

/// Corpus-wide statistics for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    /// Raw occurrence count of every token, summed across all documents.
    pub word_frequency: IndexMap<String, usize>,
    /// How many documents each token appears in at least once.
    pub document_frequency: IndexMap<String, usize>,
    /// IDF of every token, exposed for rarity reporting.
    pub word_idf: TermWeights,
    /// Sum of all document lengths.
    pub total_words: usize,
    pub document_count: usize,
    pub artist_count: usize,
}

impl CorpusStats {
    pub fn from_corpus(corpus: &[Document]) -> Self {
        let mut word_frequency: IndexMap<String, usize> = IndexMap::new();
        let mut total_words = 0;
        for doc in corpus {
            total_words += doc.tokens.len();
            for token in &doc.tokens {
                *word_frequency.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let token_seqs: Vec<&[String]> = corpus.iter().map(|d| d.tokens.as_slice()).collect();
        let document_frequency = document_frequency(&token_seqs);
        let word_idf = inverse_document_frequency(&token_seqs);

        let mut artists: Vec<&str> = corpus.iter().map(|d| d.artist.as_str()).collect();
        artists.sort_unstable();
        artists.dedup();

        Self {
            word_frequency,
            document_frequency,
            word_idf,
            total_words,
            document_count: corpus.len(),
            artist_count: artists.len(),
        }
    }

    pub fn distinct_words(&self) -> usize {
        self.word_frequency.len()
    }
}

/// Top `k` entries of a score map, highest score first.
///
/// The sort is stable, so equal scores keep the map's insertion order.
pub fn top_k<V>(map: &IndexMap<String, V>, k: usize) -> Vec<(String, V)>
where
    V: PartialOrd + Copy,
{
    let mut entries: Vec<(String, V)> = map.iter().map(|(t, v)| (t.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(k);
    entries
}
