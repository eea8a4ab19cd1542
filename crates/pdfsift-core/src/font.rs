//! Font string construction and user-supplied font renaming.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Round a font size to `precision` decimal places.
pub fn round_font_size(size: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (size * factor).round() / factor
}

/// Build the `"<name>,<size>"` font string for an element.
///
/// The size is rounded to `precision` decimals and printed without trailing
/// zeros, e.g. `"Helvetica,10"` or `"Helvetica,1.2"`.
pub fn font_string(name: &str, size: f64, precision: u32) -> String {
    format!("{name},{}", round_font_size(size, precision))
}

/// Maps raw font strings to friendlier names such as `"title"` or `"body"`.
///
/// Unmapped fonts pass through unchanged.
#[derive(Debug, Clone)]
pub enum FontMapping {
    /// Exact lookup, in insertion order.
    Exact(Vec<(String, String)>),
    /// Anchored regular expressions; the first pattern that fully matches wins.
    Regex(Vec<(Regex, String)>),
}

impl FontMapping {
    /// Build an exact mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontMapping`] if the same font string is mapped twice.
    pub fn exact<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            if entries.iter().any(|(existing, _)| *existing == key) {
                return Err(Error::FontMapping(format!("duplicate font key {key:?}")));
            }
            entries.push((key, value.into()));
        }
        Ok(FontMapping::Exact(entries))
    }

    /// Build a regex mapping. Each pattern must match the whole font string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontMapping`] if a pattern does not compile.
    pub fn regex<I, K, V>(pairs: I, case_insensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = Vec::new();
        for (pattern, value) in pairs {
            let pattern = pattern.as_ref();
            let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|e| Error::FontMapping(format!("invalid pattern {pattern:?}: {e}")))?;
            entries.push((regex, value.into()));
        }
        Ok(FontMapping::Regex(entries))
    }

    /// Resolve a raw font string.
    pub fn apply(&self, font: &str) -> String {
        let mapped = match self {
            FontMapping::Exact(entries) => entries
                .iter()
                .find(|(key, _)| key == font)
                .map(|(_, value)| value),
            FontMapping::Regex(entries) => entries
                .iter()
                .find(|(regex, _)| regex.is_match(font))
                .map(|(_, value)| value),
        };
        mapped.map_or_else(|| font.to_string(), Clone::clone)
    }
}
