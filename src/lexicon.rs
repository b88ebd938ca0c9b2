use std::collections::HashMap;

use thiserror::Error;

/// Irregular noun forms, compiled into the binary.
const NOUN_EXCEPTIONS: &str = include_str!("../assets/noun_exceptions.txt");

/// Suffix substitutions tried in order after the exception lookup, longest
/// suffix first so sibilant endings win over the bare "s" rule.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("zzes", "zz"),
    ("ies", "y"),
    ("xes", "x"),
    ("s", ""),
];

/// The static linguistic resources could not be initialized.
///
/// Fatal for the whole pipeline: without the lemma table the normalizer
/// cannot produce comparable tokens, so there is no partial fallback.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("malformed lemma exception at line {line}: {entry:?}")]
    MalformedException { line: usize, entry: String },

    #[error("lemma exception table is empty")]
    EmptyExceptionTable,
}

/// Lemmatization data: an irregular-form lookup plus suffix rules.
///
/// `load` parses the embedded table exactly once per value; loading again
/// yields an identical lexicon, so initialization is idempotent.
#[derive(Debug, Clone)]
pub struct Lexicon {
    exceptions: HashMap<String, String>,
}

impl Lexicon {
    pub fn load() -> Result<Self, ResourceError> {
        let mut exceptions = HashMap::new();

        for (idx, raw) in NOUN_EXCEPTIONS.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(inflected), Some(lemma), None) => {
                    exceptions.insert(inflected.to_string(), lemma.to_string());
                }
                _ => {
                    return Err(ResourceError::MalformedException {
                        line: idx + 1,
                        entry: raw.to_string(),
                    });
                }
            }
        }

        if exceptions.is_empty() {
            return Err(ResourceError::EmptyExceptionTable);
        }

        Ok(Self { exceptions })
    }

    /// Reduce a token to its dictionary base form.
    ///
    /// Noun lemmatization: irregular forms first, then one suffix
    /// substitution; tokens matching neither are already their own lemma.
    pub fn lemma(&self, token: &str) -> String {
        if let Some(lemma) = self.exceptions.get(token) {
            return lemma.clone();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if !rule_applies(token, suffix) {
                continue;
            }
            if let Some(stem) = token.strip_suffix(suffix) {
                if !stem.is_empty() {
                    return format!("{stem}{replacement}");
                }
            }
        }

        token.to_string()
    }
}

/// Guards that keep the blanket rules off singular-looking words:
/// "ties"/"pies" end in a consonant-less "ies" and just drop the "s",
/// while "bus", "kiss", "chorus" and "basis" are singular already.
fn rule_applies(token: &str, suffix: &str) -> bool {
    match suffix {
        "ies" => token.len() > 4,
        "s" => {
            token.len() > 3
                && !token.ends_with("ss")
                && !token.ends_with("us")
                && !token.ends_with("is")
        }
        _ => true,
    }
}
