use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

use crate::document::RawRecord;

/// Load raw records from a corpus file.
///
/// The file holds one JSON array of scraped records; a `.gz` suffix is
/// decompressed on the fly. Read failures and malformed JSON are fatal --
/// per-record problems are handled later, at corpus build time.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open corpus file {}", path.display()))?;
    let reader = BufReader::new(file);

    let records = if path.extension().map_or(false, |ext| ext == "gz") {
        parse_records(GzDecoder::new(reader))
    } else {
        parse_records(reader)
    };

    records.with_context(|| format!("failed to parse corpus file {}", path.display()))
}

/// Parse a JSON array of scraped records from any reader.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_records() -> Result<()> {
        let json = r#"[
            {"artist": "Adele", "song_url": "https://genius.com/Adele-hello-lyrics", "lyrics": "hello from the other side"},
            {"artist": "Queen", "song_url": "https://genius.com/Queen-39-lyrics"}
        ]"#;

        let records = parse_records(Cursor::new(json))?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].artist, "Adele");
        assert_eq!(records[0].source_id, "https://genius.com/Adele-hello-lyrics");
        assert_eq!(records[0].text.as_deref(), Some("hello from the other side"));
        // missing lyrics field deserializes to None instead of failing
        assert_eq!(records[1].text, None);

        Ok(())
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_records(Cursor::new("{not json")).is_err());
    }
}
