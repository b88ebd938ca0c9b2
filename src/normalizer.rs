use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::{Lexicon, ResourceError};

lazy_static::lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = {
        // NLTK-style English list. Contractions appear as bare stems
        // ("don", "aren") because apostrophes never survive the charset
        // filter.
        [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
            "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
            "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
            "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
            "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
            "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
            "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
            "at", "by", "for", "with", "about", "against", "between", "into", "through",
            "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "in", "out", "on", "off", "over", "under", "again", "further", "then",
            "once", "here", "there", "when", "where", "why", "how", "all", "any",
            "both", "each", "few", "more", "most", "other", "some", "such", "no",
            "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s",
            "t", "can", "will", "just", "don", "should", "now", "d", "ll", "m", "o",
            "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn",
            "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn",
            "wasn", "weren", "won", "wouldn",
        ]
        .iter()
        .copied()
        .collect()
    };
}

/// Tokens this short after lemmatization carry no signal for scoring.
const MIN_TOKEN_LEN: usize = 3;

pub struct Normalizer {
    lexicon: Lexicon,
}

impl Normalizer {
    /// Parse the embedded linguistic resources.
    ///
    /// One-shot initialization: construct the normalizer once, before any
    /// corpus work. Failure means the pipeline cannot run at all;
    /// constructing again yields an identical normalizer.
    pub fn new() -> Result<Self, ResourceError> {
        Ok(Self {
            lexicon: Lexicon::load()?,
        })
    }

    /// Keep `[a-z]` and whitespace, collapse everything else into spaces.
    /// Punctuation, digits and diacritics all become separators.
    fn charset_filter(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Split into word tokens along standard word boundaries.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_string()).collect()
    }

    /// Remove stopwords
    fn stopword_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !STOPWORDS.contains(t.as_str()))
            .collect()
    }

    /// Reduce every token to its dictionary base form
    fn lemma_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|t| self.lexicon.lemma(&t))
            .collect()
    }

    /// Drop tokens that are too short after lemmatization
    fn length_filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| t.len() >= MIN_TOKEN_LEN)
            .collect()
    }

    /// Full cleaning pipeline, in order: lowercase, charset filter, word
    /// tokenization, stopword removal, lemmatization, length filter.
    /// Token order is preserved; nothing is deduplicated.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let text = self.charset_filter(&text);
        let tokens = self.tokenize(&text);
        let tokens = self.stopword_filter(tokens);
        let tokens = self.lemma_filter(tokens);
        self.length_filter(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_filter_collapses_everything_else() {
        let normalizer = Normalizer::new().unwrap();
        let tokens = normalizer.normalize("Hearts, 123 hearts... & CHILDREN!");
        assert_eq!(tokens, vec!["heart", "heart", "child"]);
    }

    #[test]
    fn test_stopwords_and_contractions_removed() {
        let normalizer = Normalizer::new().unwrap();
        // "don't" splits into "don" / "t", both stopwords
        let tokens = normalizer.normalize("Don't stop the music");
        assert_eq!(tokens, vec!["stop", "music"]);
    }

    #[test]
    fn test_short_tokens_dropped_after_lemmatization() {
        let normalizer = Normalizer::new().unwrap();
        let tokens = normalizer.normalize("go ox oxen running");
        // "go" and "ox" are too short; "oxen" lemmatizes to "ox", which is
        // then dropped too
        assert_eq!(tokens, vec!["running"]);
    }

    #[test]
    fn test_order_preserved_no_dedup() {
        let normalizer = Normalizer::new().unwrap();
        let tokens = normalizer.normalize("love love heart love");
        assert_eq!(tokens, vec!["love", "love", "heart", "love"]);
    }

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::new().unwrap();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("!!! 42 ???").is_empty());
    }
}
