use serde::{Deserialize, Serialize};

/// A record must normalize to at least this many tokens to enter the corpus.
pub const MIN_TOKENS: usize = 10;

/// One scraped lyric entry, straight from the ingestion pipeline.
///
/// The wire field names follow the scraper's output: `song_url` doubles as
/// the stable identifier, `lyrics` may be absent or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub artist: String,
    #[serde(rename = "song_url")]
    pub source_id: String,
    #[serde(rename = "lyrics", default)]
    pub text: Option<String>,
}

impl RawRecord {
    pub fn new(artist: String, source_id: String, text: String) -> Self {
        Self {
            artist,
            source_id,
            text: Some(text),
        }
    }
}

/// A corpus entry: one song that survived normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub artist: String,
    pub source_id: String,
    pub original_text: String,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(artist: String, source_id: String, original_text: String, tokens: Vec<String>) -> Self {
        Self {
            artist,
            source_id,
            original_text,
            tokens,
        }
    }

    /// Human-readable title derived from the source URL.
    ///
    /// Takes the last path segment, strips a trailing "-lyrics", and
    /// title-cases the remaining dash-separated words. Display only; the
    /// scoring core never looks at this.
    pub fn display_title(&self) -> String {
        let slug = self.source_id.rsplit('/').next().unwrap_or_default();
        let slug = slug.strip_suffix("-lyrics").unwrap_or(slug);

        slug.split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_url(url: &str) -> Document {
        Document::new("artist".to_string(), url.to_string(), String::new(), Vec::new())
    }

    #[test]
    fn test_display_title_from_url() {
        let doc = doc_with_url("https://genius.com/Adele-rolling-in-the-deep-lyrics");
        assert_eq!(doc.display_title(), "Adele Rolling In The Deep");
    }

    #[test]
    fn test_display_title_without_suffix() {
        let doc = doc_with_url("https://example.com/songs/my-heart");
        assert_eq!(doc.display_title(), "My Heart");
    }
}
