use crate::document::{Document, RawRecord, MIN_TOKENS};
use crate::normalizer::Normalizer;

/// Build the corpus from raw scraped records.
///
/// Best-effort ingestion: records with a missing artist, missing or empty
/// lyrics, or fewer than `MIN_TOKENS` normalized tokens are dropped
/// without aborting the build. Output order follows input order, and
/// every emitted document keeps its untouched original text alongside the
/// token sequence.
pub fn build_corpus(normalizer: &Normalizer, records: Vec<RawRecord>) -> Vec<Document> {
    let mut documents = Vec::new();

    for record in records {
        if record.artist.is_empty() {
            tracing::debug!("skipping {}: no artist", record.source_id);
            continue;
        }

        let text = match record.text {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::debug!("skipping {}: no lyrics", record.source_id);
                continue;
            }
        };

        let tokens = normalizer.normalize(&text);
        if tokens.len() < MIN_TOKENS {
            tracing::debug!(
                "skipping {}: {} tokens after normalization",
                record.source_id,
                tokens.len()
            );
            continue;
        }

        documents.push(Document::new(record.artist, record.source_id, text, tokens));
    }

    documents
}

#[cfg(test)]
mod tests {
    use super::*;

    // ten words that pass every normalizer filter unchanged
    const TEN_WORDS: &str =
        "river mountain shadow golden whisper thunder velvet crimson ember garden";

    fn record(artist: &str, text: Option<&str>) -> RawRecord {
        RawRecord {
            artist: artist.to_string(),
            source_id: format!("https://example.com/{artist}-song-lyrics"),
            text: text.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_valid_record_becomes_document() {
        let normalizer = Normalizer::new().unwrap();
        let docs = build_corpus(&normalizer, vec![record("adele", Some(TEN_WORDS))]);

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].artist, "adele");
        assert_eq!(docs[0].original_text, TEN_WORDS);
        assert_eq!(docs[0].tokens.len(), 10);
    }

    #[test]
    fn test_missing_and_empty_lyrics_skipped() {
        let normalizer = Normalizer::new().unwrap();
        let docs = build_corpus(
            &normalizer,
            vec![record("a", None), record("b", Some("")), record("c", Some(TEN_WORDS))],
        );

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].artist, "c");
    }

    #[test]
    fn test_empty_artist_skipped() {
        let normalizer = Normalizer::new().unwrap();
        let docs = build_corpus(&normalizer, vec![record("", Some(TEN_WORDS))]);
        assert!(docs.is_empty());
    }

    #[test]
    fn test_token_threshold_is_exactly_ten() {
        let normalizer = Normalizer::new().unwrap();
        let nine_words = TEN_WORDS.rsplit_once(' ').unwrap().0;

        let docs = build_corpus(&normalizer, vec![record("nine", Some(nine_words))]);
        assert!(docs.is_empty());

        let docs = build_corpus(&normalizer, vec![record("ten", Some(TEN_WORDS))]);
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_build_is_idempotent() {
        let normalizer = Normalizer::new().unwrap();
        let records = vec![
            record("a", Some(TEN_WORDS)),
            record("b", None),
            record("c", Some(TEN_WORDS)),
        ];

        let first = build_corpus(&normalizer, records.clone());
        let second = build_corpus(&normalizer, records);
        assert_eq!(first, second);
    }
}
