//! Language codes for advisory messages
//!
//! The backend serves farmers in English, Hindi and Marathi. The closed enum
//! keeps the per-language message tables exhaustiveness-checked instead of
//! falling through open string keys.

use serde::{Deserialize, Serialize};

/// Supported advisory languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
    Mr,
}

impl Lang {
    /// Parse a language code, falling back to English for anything unknown
    pub fn from_code(code: &str) -> Lang {
        match code {
            "hi" => Lang::Hi,
            "mr" => Lang::Mr,
            _ => Lang::En,
        }
    }

    /// ISO 639-1 code used on the wire and in TTS requests
    pub fn as_code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Mr => "mr",
        }
    }

    /// Guess a language from the script of `text`, falling back to `fallback`.
    ///
    /// Hindi and Marathi both use the Devanagari block (U+0900..U+097F), so
    /// the script alone cannot tell them apart; Devanagari text maps to
    /// Marathi here and callers that know better should pass an explicit code.
    pub fn detect_hint(text: &str, fallback: Lang) -> Lang {
        if text.is_empty() {
            return fallback;
        }
        let devanagari = text
            .chars()
            .any(|c| ('\u{0900}'..='\u{097F}').contains(&c));
        if devanagari {
            return Lang::Mr;
        }
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(Lang::from_code("hi"), Lang::Hi);
        assert_eq!(Lang::from_code("mr"), Lang::Mr);
        assert_eq!(Lang::from_code("en"), Lang::En);
    }

    #[test]
    fn test_from_code_unknown_falls_back_to_english() {
        assert_eq!(Lang::from_code("fr"), Lang::En);
        assert_eq!(Lang::from_code(""), Lang::En);
    }

    #[test]
    fn test_detect_hint_devanagari() {
        assert_eq!(Lang::detect_hint("गेहूं की फसल", Lang::En), Lang::Mr);
    }

    #[test]
    fn test_detect_hint_latin_uses_fallback() {
        assert_eq!(Lang::detect_hint("wheat crop", Lang::Hi), Lang::Hi);
    }

    #[test]
    fn test_detect_hint_empty_uses_fallback() {
        assert_eq!(Lang::detect_hint("", Lang::Mr), Lang::Mr);
    }

    #[test]
    fn test_serde_lowercase_codes() {
        let l: Lang = serde_json::from_str("\"mr\"").unwrap();
        assert_eq!(l, Lang::Mr);
        assert_eq!(serde_json::to_string(&Lang::Hi).unwrap(), "\"hi\"");
    }
}
