//! Rail alias tables.
//!
//! The routing table names rails differently from the upstream API
//! (`"Avalanche C-Chain"` vs `avalanche_c_chain`). An [`AliasTable`] holds
//! both directions of that mapping. It is built once and handed to the
//! normalizer, so tests can swap in a different vocabulary.

use std::collections::HashMap;

use crate::domain::{CanonicalRail, WireRail};

/// Bidirectional wire ↔ canonical rail mapping.
///
/// Forward lookups are keyed by the lower-cased wire token. Several wire
/// tokens may map to one canonical rail; the reverse direction keeps the
/// first wire token registered for each canonical rail.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    to_canonical: HashMap<String, CanonicalRail>,
    to_wire: HashMap<CanonicalRail, WireRail>,
}

impl AliasTable {
    /// Create an empty table. Every rail passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a wire token for a canonical rail, in both directions.
    ///
    /// The reverse entry is only added if the canonical rail has none yet.
    pub fn add(&mut self, wire: &str, canonical: &str) {
        let canonical = CanonicalRail::new(canonical);
        self.to_canonical
            .insert(wire.to_ascii_lowercase(), canonical.clone());
        self.to_wire
            .entry(canonical)
            .or_insert_with(|| WireRail::new(wire));
    }

    /// Register a canonical → wire mapping with no forward entry.
    pub fn add_reverse(&mut self, canonical: &str, wire: &str) {
        self.to_wire
            .insert(CanonicalRail::new(canonical), WireRail::new(wire));
    }

    /// Canonical rail for a wire token (case-insensitive), if aliased.
    pub fn canonical(&self, wire: &str) -> Option<&CanonicalRail> {
        self.to_canonical.get(&wire.to_ascii_lowercase())
    }

    /// Wire token for a canonical rail, if aliased.
    pub fn wire(&self, canonical: &CanonicalRail) -> Option<&WireRail> {
        self.to_wire.get(canonical)
    }

    /// Number of forward aliases.
    pub fn len(&self) -> usize {
        self.to_canonical.len()
    }

    /// Returns true if no aliases are registered in either direction.
    pub fn is_empty(&self) -> bool {
        self.to_canonical.is_empty() && self.to_wire.is_empty()
    }
}

/// Fluent builder for [`AliasTable`].
#[derive(Debug, Default)]
pub struct AliasTableBuilder {
    inner: AliasTable,
}

impl AliasTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wire alias for a canonical rail.
    pub fn alias(mut self, wire: &str, canonical: &str) -> Self {
        self.inner.add(wire, canonical);
        self
    }

    /// Add a reverse-only mapping.
    pub fn reverse(mut self, canonical: &str, wire: &str) -> Self {
        self.inner.add_reverse(canonical, wire);
        self
    }

    /// Build the alias table.
    pub fn build(self) -> AliasTable {
        self.inner
    }
}

/// The alias table matching the upstream payments API's current rail names.
///
/// ACH sub-types all collapse to `ACH`: the routing table only knows rail
/// families, so same-day and standard ACH are indistinguishable here.
// TODO: revisit once the routing table distinguishes ach_same_day routes.
pub fn default_aliases() -> AliasTable {
    AliasTableBuilder::new()
        .alias("ach", "ACH")
        .alias("ach_push", "ACH")
        .alias("ach_same_day", "ACH")
        .alias("arbitrum", "Arbitrum")
        .alias("avalanche_c_chain", "Avalanche C-Chain")
        .alias("base", "Base")
        .alias("bridge_wallet", "Bridge Wallet")
        .alias("ethereum", "Ethereum")
        .alias("optimism", "Optimism")
        .alias("polygon", "Polygon")
        .alias("sepa", "SEPA")
        .alias("solana", "Solana")
        .alias("spei", "SPEI")
        .alias("stellar", "Stellar")
        .alias("swift", "SWIFT")
        .alias("tron", "Tron")
        .alias("wire", "Wire")
        .alias("bitcoin", "Bitcoin")
        .reverse("Pix (Beta)", "pix")
        .build()
}
