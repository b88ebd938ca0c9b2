use std::collections::HashSet;

use indexmap::IndexMap;

use crate::document::Document;

/// Token -> weight map. Insertion order is first occurrence in the source
/// text, which keeps top-K tie-breaking deterministic.
pub type TermWeights = IndexMap<String, f64>;

/// Term frequency of one token sequence.
///
/// Each entry is `count(token) / tokens.len()`; tokens absent from the
/// sequence are implicitly zero. An empty sequence yields an empty map.
pub fn term_frequency(tokens: &[String]) -> TermWeights {
    let mut tf = TermWeights::new();
    if tokens.is_empty() {
        return tf;
    }

    let total = tokens.len() as f64;
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    for weight in tf.values_mut() {
        *weight /= total;
    }
    tf
}

/// Number of documents each token appears in at least once.
pub fn document_frequency(corpus: &[&[String]]) -> IndexMap<String, usize> {
    let mut df: IndexMap<String, usize> = IndexMap::new();
    for tokens in corpus {
        let mut seen = HashSet::new();
        for token in *tokens {
            if seen.insert(token.as_str()) {
                *df.entry(token.clone()).or_insert(0) += 1;
            }
        }
    }
    df
}

/// Inverse document frequency across one corpus snapshot.
///
/// `idf(t) = ln(N / df(t))`. A pure function of the corpus: recomputed
/// whenever the corpus changes, never updated incrementally. A zero
/// document frequency maps to 0.0 rather than dividing by zero.
pub fn inverse_document_frequency(corpus: &[&[String]]) -> TermWeights {
    let n = corpus.len() as f64;
    document_frequency(corpus)
        .into_iter()
        .map(|(token, docs)| {
            let idf = if docs == 0 { 0.0 } else { (n / docs as f64).ln() };
            (token, idf)
        })
        .collect()
}

fn weigh(tf: TermWeights, idf: &TermWeights) -> TermWeights {
    tf.into_iter()
        .map(|(token, freq)| {
            let weight = freq * idf.get(&token).copied().unwrap_or(0.0);
            (token, weight)
        })
        .collect()
}

fn token_sequences(corpus: &[Document]) -> Vec<&[String]> {
    corpus.iter().map(|doc| doc.tokens.as_slice()).collect()
}

/// TF-IDF per document, one map per document in corpus order.
///
/// Each map holds exactly the distinct tokens of that document; everything
/// else is implicitly zero.
pub fn document_tfidf(corpus: &[Document]) -> Vec<TermWeights> {
    let idf = inverse_document_frequency(&token_sequences(corpus));
    corpus
        .iter()
        .map(|doc| weigh(term_frequency(&doc.tokens), &idf))
        .collect()
}

/// TF-IDF per artist, keyed in first-appearance order.
///
/// All of an artist's token sequences are concatenated into one
/// pseudo-document and its term frequencies are weighted with the IDF of
/// the individual-song corpus, so the scores measure how distinctive an
/// artist's aggregate vocabulary is against the population of single
/// songs. Deriving IDF from the pseudo-documents instead would change
/// every reported ranking.
pub fn artist_tfidf(corpus: &[Document]) -> IndexMap<String, TermWeights> {
    let idf = inverse_document_frequency(&token_sequences(corpus));

    let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
    for doc in corpus {
        grouped
            .entry(doc.artist.clone())
            .or_default()
            .extend(doc.tokens.iter().cloned());
    }

    grouped
        .into_iter()
        .map(|(artist, tokens)| (artist, weigh(term_frequency(&tokens), &idf)))
        .collect()
}
