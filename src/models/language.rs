//! Language tag resolution.
//!
//! ffprobe reports stream languages as ISO 639 codes in the `TAG:language`
//! field (usually three-letter, e.g. "eng", "jpn"). This module resolves a
//! raw code into a (code, display name) pair via the `isolang` registry.

use serde::{Deserialize, Serialize};

/// A resolved stream language: the raw ISO 639 code plus its English name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTag {
    /// Code as found in the stream tags (e.g. "eng", "und").
    pub code: String,
    /// Full language name (e.g. "English", "Undefined").
    pub name: String,
}

impl LanguageTag {
    /// The undefined language, used when a stream carries no usable tag.
    pub fn undefined() -> Self {
        Self {
            code: "und".to_string(),
            name: "Undefined".to_string(),
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Resolve a raw language code from stream tags.
///
/// Absent tags and the literal "und"/"Und" markers resolve to
/// [`LanguageTag::undefined`]. Known codes resolve through the ISO 639
/// registry (three-letter codes first, then two-letter). Lookup is
/// non-strict: an unknown code is echoed back as its own display name
/// rather than failing, so a record with an exotic tag stays queryable.
pub fn resolve(raw: Option<&str>) -> LanguageTag {
    let code = match raw {
        None | Some("und") | Some("Und") => return LanguageTag::undefined(),
        Some(code) => code,
    };

    let name = isolang::Language::from_639_3(code)
        .or_else(|| isolang::Language::from_639_1(code))
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| code.to_string());

    LanguageTag {
        code: code.to_string(),
        name,
    }
}
