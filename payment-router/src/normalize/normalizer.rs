//! Wire ↔ canonical conversion.

use std::sync::Arc;

use crate::domain::{CanonicalCurrency, CanonicalRail, WireCurrency, WireRail};

use super::aliases::{AliasTable, default_aliases};

/// Converts rail and currency tokens between the upstream API's vocabulary
/// and the routing table's.
///
/// All conversions are total: a token with no alias passes through
/// unchanged, so the normalizer is a safe identity for rails it doesn't know.
///
/// # Examples
///
/// ```
/// use payment_router::normalize::Normalizer;
///
/// let n = Normalizer::default();
/// let ach = n.to_canonical_rail("ACH_PUSH");
/// assert_eq!(ach.as_str(), "ACH");
/// assert_eq!(n.to_wire_rail(&ach).as_str(), "ach");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: Arc<AliasTable>,
}

impl Normalizer {
    /// Create a normalizer over the given alias table.
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            aliases: Arc::new(aliases),
        }
    }

    /// The alias table in use.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Map a wire rail to its canonical name.
    ///
    /// Lookup is case-insensitive. Unknown rails are returned unchanged.
    pub fn to_canonical_rail(&self, wire_rail: &str) -> CanonicalRail {
        self.aliases
            .canonical(wire_rail)
            .cloned()
            .unwrap_or_else(|| CanonicalRail::new(wire_rail))
    }

    /// Map a canonical rail to its wire token.
    ///
    /// Rails with no reverse alias are lower-cased with spaces replaced by
    /// underscores.
    pub fn to_wire_rail(&self, rail: &CanonicalRail) -> WireRail {
        self.aliases
            .wire(rail)
            .cloned()
            .unwrap_or_else(|| WireRail::new(rail.as_str().to_lowercase().replace(' ', "_")))
    }

    /// Map a wire currency to its canonical (upper-case) code.
    pub fn to_canonical_currency(&self, wire_currency: &str) -> CanonicalCurrency {
        CanonicalCurrency::new(wire_currency)
    }

    /// Map a canonical currency to the upstream's lower-case code.
    pub fn to_wire_currency(&self, currency: &CanonicalCurrency) -> WireCurrency {
        WireCurrency::new(currency.as_str().to_lowercase())
    }

    /// Whether a wire rail belongs to the given canonical rail family.
    pub fn is_rail(&self, wire_rail: &str, rail: &CanonicalRail) -> bool {
        &self.to_canonical_rail(wire_rail) == rail
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(default_aliases())
    }
}
