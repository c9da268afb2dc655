//! Positional mask representation
//!
//! A mask fixes the length of the words to look for and, optionally, the
//! characters at some positions. Every other position is a wildcard.

use std::fmt;
use std::str::FromStr;

/// Character that marks a wildcard position in mask syntax
pub const WILDCARD: char = '*';

/// A single mask position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskToken {
    /// Matches any character
    Wildcard,
    /// Matches exactly this character
    Literal(char),
}

impl MaskToken {
    /// Check whether `ch` is acceptable at this position
    #[inline]
    #[must_use]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Literal(expected) => expected == ch,
        }
    }
}

/// Ordered sequence of mask tokens
///
/// # Examples
/// ```
/// use word_finder::core::{Mask, MaskToken};
///
/// let mask: Mask = "*a*".parse().unwrap();
/// assert_eq!(mask.len(), 3);
/// assert_eq!(mask.tokens()[1], MaskToken::Literal('a'));
/// assert!(mask.matches("cat"));
/// assert!(!mask.matches("act"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Mask {
    tokens: Vec<MaskToken>,
}

impl Mask {
    /// Build a mask from already-parsed tokens
    #[must_use]
    pub const fn new(tokens: Vec<MaskToken>) -> Self {
        Self { tokens }
    }

    /// Parse mask syntax
    ///
    /// `*` becomes a wildcard, anything else a lower-cased literal. Parsing
    /// never fails; the interactive field already restricts what can be typed.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let tokens = text
            .chars()
            .flat_map(char::to_lowercase)
            .map(|ch| {
                if ch == WILDCARD {
                    MaskToken::Wildcard
                } else {
                    MaskToken::Literal(ch)
                }
            })
            .collect();
        Self { tokens }
    }

    /// Number of positions (the required word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Check a candidate of matching length position by position
    ///
    /// Stops at the first mismatching literal.
    #[must_use]
    pub fn matches_chars(&self, candidate: &[char]) -> bool {
        candidate.len() == self.tokens.len()
            && self
                .tokens
                .iter()
                .zip(candidate)
                .all(|(token, &ch)| token.accepts(ch))
    }

    /// Check a candidate string against the mask
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        self.matches_chars(&chars)
    }
}

impl FromStr for Mask {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                MaskToken::Wildcard => write!(f, "{WILDCARD}")?,
                MaskToken::Literal(ch) => write!(f, "{ch}")?,
            }
        }
        Ok(())
    }
}
