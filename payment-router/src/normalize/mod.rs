//! Rail and currency normalization.
//!
//! Converts free-form rail/currency tokens (any case, aliases such as
//! `ach_push`) into the routing table's canonical vocabulary and back into
//! the upstream API's wire format.

mod aliases;
mod normalizer;

pub use aliases::{AliasTable, AliasTableBuilder, default_aliases};
pub use normalizer::Normalizer;
