//! Routing table rows.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{CanonicalCurrency, CanonicalRail, RailType};

/// One compatible (source, destination) pair from the routing table.
///
/// Rows are immutable facts: the table is loaded once and never edited at
/// runtime, so there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRow {
    pub source_rail: CanonicalRail,
    pub source_currency: CanonicalCurrency,
    pub destination_rail: CanonicalRail,
    pub destination_currency: CanonicalCurrency,
    /// Smallest amount the route accepts, in source currency units.
    pub transaction_minimum: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_rail_type: Option<RailType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_rail_type: Option<RailType>,
}

impl RoutingRow {
    /// Create a row without rail type information.
    pub fn new(
        source_rail: CanonicalRail,
        source_currency: CanonicalCurrency,
        destination_rail: CanonicalRail,
        destination_currency: CanonicalCurrency,
        transaction_minimum: Decimal,
    ) -> Self {
        Self {
            source_rail,
            source_currency,
            destination_rail,
            destination_currency,
            transaction_minimum,
            source_rail_type: None,
            destination_rail_type: None,
        }
    }

    /// Attach rail types for both ends.
    pub fn with_rail_types(mut self, source: Option<RailType>, destination: Option<RailType>) -> Self {
        self.source_rail_type = source;
        self.destination_rail_type = destination;
        self
    }

    /// Whether this row starts at the given canonical source.
    pub fn is_from(&self, rail: &CanonicalRail, currency: &CanonicalCurrency) -> bool {
        &self.source_rail == rail && &self.source_currency == currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(src: &str, cur: &str) -> RoutingRow {
        RoutingRow::new(
            CanonicalRail::new(src),
            CanonicalCurrency::new(cur),
            CanonicalRail::new("Polygon"),
            CanonicalCurrency::new("USDC"),
            Decimal::ONE,
        )
    }

    #[test]
    fn is_from_requires_both_rail_and_currency() {
        let r = row("Ethereum", "USDC");
        let eth = CanonicalRail::new("Ethereum");
        assert!(r.is_from(&eth, &CanonicalCurrency::new("USDC")));
        assert!(!r.is_from(&eth, &CanonicalCurrency::new("USDT")));
        assert!(!r.is_from(&CanonicalRail::new("Base"), &CanonicalCurrency::new("USDC")));
    }

    #[test]
    fn serialize_omits_missing_rail_types() {
        let json = serde_json::to_value(row("Ethereum", "USDC")).unwrap();
        assert_eq!(json["sourceRail"], "Ethereum");
        assert_eq!(json["destinationCurrency"], "USDC");
        assert!(json.get("sourceRailType").is_none());

        let typed = row("Ethereum", "USDC").with_rail_types(Some(RailType::Blockchain), None);
        let json = serde_json::to_value(typed).unwrap();
        assert_eq!(json["sourceRailType"], 1);
        assert!(json.get("destinationRailType").is_none());
    }
}
