// Re-export main components
pub mod api;
pub mod corpus;
pub mod document;
pub mod engine;
pub mod lexicon;
pub mod loader;
pub mod normalizer;
pub mod stats;
pub mod tfidf;

// Re-export commonly used types
pub use corpus::build_corpus;
pub use document::{Document, RawRecord, MIN_TOKENS};
pub use engine::LyricsEngine;
pub use lexicon::{Lexicon, ResourceError};
pub use normalizer::Normalizer;
pub use stats::{top_k, CorpusStats};
pub use tfidf::{
    artist_tfidf, document_tfidf, inverse_document_frequency, term_frequency, TermWeights,
};

// Re-export error types
pub use anyhow::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() -> Result<()> {
        let records = vec![
            RawRecord::new(
                "Adele".to_string(),
                "https://genius.com/Adele-hello-lyrics".to_string(),
                "river mountain shadow golden whisper thunder velvet crimson ember garden"
                    .to_string(),
            ),
            RawRecord::new(
                "Queen".to_string(),
                "https://genius.com/Queen-night-lyrics".to_string(),
                "night stars moonlight dream silver echo silence velvet candle flame".to_string(),
            ),
        ];

        let engine = LyricsEngine::from_records(records)?;

        assert_eq!(engine.document_count(), 2);
        assert_eq!(engine.artists(), ["Adele", "Queen"]);

        // "velvet" appears in both songs, so it never characterizes either
        let weights = engine.artist_weights("Adele");
        assert_eq!(weights["velvet"], 0.0);
        assert!(weights["river"] > 0.0);

        let top = top_k(&weights, 3);
        assert_eq!(top.len(), 3);
        assert!(top[0].1 >= top[1].1);

        Ok(())
    }
}
