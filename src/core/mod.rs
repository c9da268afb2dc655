//! Core domain types for word finding
//!
//! The dictionary, the mask, and the ordering used to present results.
//! Nothing here touches the terminal.

pub mod collation;
pub mod dictionary;
mod mask;

pub use collation::{
    Collation, CollationError, CollationKind, CodepointCollation, LocaleCollation, build_collation,
};
pub use dictionary::{Dictionary, DictionaryError};
pub use mask::{Mask, MaskToken, WILDCARD};
