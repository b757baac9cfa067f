//! Supported language codes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language a FAQ can be served in
///
/// `En` is the canonical language: it selects the untranslated text stored on
/// the record and is never looked up in the translations map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
    Bn,
}

impl LanguageCode {
    /// Languages every new FAQ is translated into, in call order
    pub const TARGETS: [LanguageCode; 2] = [LanguageCode::Hi, LanguageCode::Bn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Bn => "bn",
        }
    }

    /// Parses a supported code, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }

    /// Resolves a client-supplied code, falling back to `En` for anything unknown
    pub fn resolve(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Resolves an optional query parameter; absent means `En`
    pub fn from_param(value: Option<&str>) -> Self {
        value.map(Self::resolve).unwrap_or_default()
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::En)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported_codes() {
        assert_eq!(LanguageCode::resolve("hi"), LanguageCode::Hi);
        assert_eq!(LanguageCode::resolve("BN"), LanguageCode::Bn);
        assert_eq!(LanguageCode::resolve(" en "), LanguageCode::En);
    }

    #[test]
    fn test_unknown_code_falls_back_to_canonical() {
        assert_eq!(LanguageCode::resolve("fr"), LanguageCode::En);
        assert_eq!(LanguageCode::resolve(""), LanguageCode::En);
        assert_eq!(LanguageCode::from_param(None), LanguageCode::En);
    }

    #[test]
    fn test_parse_is_strict() {
        assert_eq!(LanguageCode::parse("Hi"), Some(LanguageCode::Hi));
        assert_eq!(LanguageCode::parse("fr"), None);
    }

    #[test]
    fn test_targets_exclude_canonical() {
        assert!(LanguageCode::TARGETS.iter().all(|l| !l.is_canonical()));
        assert_eq!(LanguageCode::TARGETS, [LanguageCode::Hi, LanguageCode::Bn]);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LanguageCode::Hi).unwrap(), "\"hi\"");
        assert_eq!(LanguageCode::Bn.to_string(), "bn");
    }
}
