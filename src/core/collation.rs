//! Ordering strategies for presenting results
//!
//! Results are sorted for people to read, so the default ordering follows
//! locale collation rules rather than byte order. The locale is pinned when
//! the strategy is built and never read from process state.

use icu_collator::{Collator, CollatorOptions};
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Error raised while building a collation strategy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollationError {
    #[error("invalid locale tag '{tag}': {reason}")]
    InvalidLocale { tag: String, reason: String },
    #[error("no collation data for locale '{tag}': {reason}")]
    Unsupported { tag: String, reason: String },
    #[error("unknown collation kind '{0}', expected 'locale' or 'codepoint'")]
    UnknownKind(String),
}

/// A total order on words
pub trait Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Short human-readable description (used in logs)
    fn describe(&self) -> String;
}

/// Locale-aware collation backed by ICU4X
pub struct LocaleCollation {
    tag: String,
    collator: Collator,
}

impl LocaleCollation {
    /// Build a collator for a BCP-47 locale tag such as `en` or `ru`
    ///
    /// # Errors
    ///
    /// Returns `CollationError` if the tag does not parse or the compiled
    /// collation data has nothing for it.
    pub fn new(tag: &str) -> Result<Self, CollationError> {
        let locale: icu_locid::Locale = tag.parse().map_err(|e| CollationError::InvalidLocale {
            tag: tag.to_string(),
            reason: format!("{e:?}"),
        })?;

        let collator = Collator::try_new(&locale.into(), CollatorOptions::new()).map_err(|e| {
            CollationError::Unsupported {
                tag: tag.to_string(),
                reason: format!("{e:?}"),
            }
        })?;

        Ok(Self {
            tag: tag.to_string(),
            collator,
        })
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Collation for LocaleCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    fn describe(&self) -> String {
        format!("locale:{}", self.tag)
    }
}

/// Plain Unicode scalar value order
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointCollation;

impl Collation for CodepointCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    fn describe(&self) -> String {
        "codepoint".to_string()
    }
}

/// Which collation strategy to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollationKind {
    #[default]
    Locale,
    Codepoint,
}

impl FromStr for CollationKind {
    type Err = CollationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "locale" => Ok(Self::Locale),
            "codepoint" => Ok(Self::Codepoint),
            other => Err(CollationError::UnknownKind(other.to_string())),
        }
    }
}

/// Build the configured strategy
///
/// # Errors
///
/// Returns `CollationError` when a locale strategy cannot be built for `tag`.
pub fn build_collation(kind: CollationKind, tag: &str) -> Result<Box<dyn Collation>, CollationError> {
    Ok(match kind {
        CollationKind::Locale => Box::new(LocaleCollation::new(tag)?),
        CollationKind::Codepoint => Box::new(CodepointCollation),
    })
}
