//! Route resolution over the routing table.
//!
//! Turns a source (rail, currency) into the cascading option lists a
//! selection flow needs: reachable destination rails, then reachable
//! destination currencies for a chosen rail. Everything here is a pure
//! function of the table and the query; an empty result means "no route",
//! never an error.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    CanonicalCurrency, CanonicalRail, RailType, RoutingRow, WalletHoldings, WireCurrency, WireRail,
};
use crate::normalize::Normalizer;

use super::table::RoutingTable;

/// A source to resolve routes from, in wire vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteQuery {
    pub source_rail: WireRail,
    pub source_currency: WireCurrency,
}

impl RouteQuery {
    /// Create a query from wire tokens.
    pub fn new(source_rail: impl Into<String>, source_currency: impl Into<String>) -> Self {
        Self {
            source_rail: WireRail::new(source_rail),
            source_currency: WireCurrency::new(source_currency),
        }
    }
}

/// Options reachable from a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSet {
    /// Reachable destination rails, sorted and duplicate-free.
    pub destination_rails: Vec<CanonicalRail>,

    /// Reachable currencies on the selected destination rail.
    ///
    /// `None` when no destination rail was selected.
    pub destination_currencies: Option<Vec<CanonicalCurrency>>,
}

impl RouteSet {
    /// Whether the source has no routes at all.
    pub fn is_empty(&self) -> bool {
        self.destination_rails.is_empty()
    }
}

/// Destination options when sending to an existing wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletRoute {
    /// The wallet's chain; the destination rail is fixed to it.
    pub destination_rail: CanonicalRail,

    /// Routable currencies the wallet also holds, sorted.
    pub destination_currencies: Vec<CanonicalCurrency>,
}

impl WalletRoute {
    /// False when the wallet holds nothing the route can deliver.
    ///
    /// Callers must surface this rather than default to some currency.
    pub fn has_compatible_currency(&self) -> bool {
        !self.destination_currencies.is_empty()
    }
}

/// Unique destination rails among `rows`, sorted ascending.
pub fn distinct_destination_rails<'a, I>(rows: I) -> Vec<CanonicalRail>
where
    I: IntoIterator<Item = &'a RoutingRow>,
{
    rows.into_iter()
        .map(|row| row.destination_rail.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Resolves routes against a table using a normalizer for wire inputs.
pub struct Resolver<'a> {
    table: &'a RoutingTable,
    normalizer: &'a Normalizer,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    pub fn new(table: &'a RoutingTable, normalizer: &'a Normalizer) -> Self {
        Self { table, normalizer }
    }

    /// The normalizer used for wire inputs.
    pub fn normalizer(&self) -> &'a Normalizer {
        self.normalizer
    }

    /// Rows whose canonical source matches the given wire source.
    pub fn query_by_source(
        &self,
        wire_source_rail: &str,
        wire_source_currency: &str,
    ) -> Vec<&'a RoutingRow> {
        let rail = self.normalizer.to_canonical_rail(wire_source_rail);
        let currency = self.normalizer.to_canonical_currency(wire_source_currency);

        let rows: Vec<_> = self
            .table
            .iter()
            .filter(|row| row.is_from(&rail, &currency))
            .collect();

        debug!(%rail, %currency, matches = rows.len(), "queried routes by source");
        rows
    }

    /// Rows whose source rail has the given type.
    pub fn query_by_rail_type(&self, rail_type: RailType) -> Vec<&'a RoutingRow> {
        self.table
            .iter()
            .filter(|row| row.source_rail_type == Some(rail_type))
            .collect()
    }

    /// Unique currencies reachable on one destination rail, sorted ascending.
    pub fn distinct_destination_currencies(
        &self,
        rows: &[&RoutingRow],
        wire_destination_rail: &str,
    ) -> Vec<CanonicalCurrency> {
        let rail = self.normalizer.to_canonical_rail(wire_destination_rail);
        rows.iter()
            .filter(|row| row.destination_rail == rail)
            .map(|row| row.destination_currency.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolve a query into its option lists.
    ///
    /// Destination currencies are only computed when a destination rail is given.
    pub fn resolve(&self, query: &RouteQuery, wire_destination_rail: Option<&str>) -> RouteSet {
        let rows = self.query_by_source(query.source_rail.as_str(), query.source_currency.as_str());
        RouteSet {
            destination_rails: distinct_destination_rails(rows.iter().copied()),
            destination_currencies: wire_destination_rail
                .map(|rail| self.distinct_destination_currencies(&rows, rail)),
        }
    }

    /// Destination options when the destination is an existing wallet.
    ///
    /// The rail is forced to the wallet's chain and the currencies are
    /// narrowed to those the wallet holds a balance in.
    pub fn wallet_destinations(&self, rows: &[&RoutingRow], wallet: &WalletHoldings) -> WalletRoute {
        let destination_rail = self.normalizer.to_canonical_rail(wallet.chain.as_str());
        let destination_currencies: Vec<_> = self
            .distinct_destination_currencies(rows, wallet.chain.as_str())
            .into_iter()
            .filter(|currency| wallet.holds(currency.as_str()))
            .collect();

        if destination_currencies.is_empty() {
            debug!(rail = %destination_rail, "wallet holds no routable currency");
        }

        WalletRoute {
            destination_rail,
            destination_currencies,
        }
    }

    /// Source rails in the table, optionally restricted to one rail type.
    pub fn source_rails(&self, rail_type: Option<RailType>) -> Vec<CanonicalRail> {
        self.rows_of_type(rail_type)
            .map(|row| row.source_rail.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Source currencies available on one source rail.
    pub fn source_currencies(
        &self,
        rail_type: Option<RailType>,
        wire_source_rail: &str,
    ) -> Vec<CanonicalCurrency> {
        let rail = self.normalizer.to_canonical_rail(wire_source_rail);
        self.rows_of_type(rail_type)
            .filter(|row| row.source_rail == rail)
            .map(|row| row.source_currency.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Minimum transfer amount for a destination, if any row routes there.
    ///
    /// When several rows match, the largest minimum applies.
    pub fn transaction_minimum(
        &self,
        rows: &[&RoutingRow],
        wire_destination_rail: &str,
        wire_destination_currency: &str,
    ) -> Option<Decimal> {
        let rail = self.normalizer.to_canonical_rail(wire_destination_rail);
        let currency = self.normalizer.to_canonical_currency(wire_destination_currency);
        rows.iter()
            .filter(|row| row.destination_rail == rail && row.destination_currency == currency)
            .map(|row| row.transaction_minimum)
            .max()
    }

    fn rows_of_type(&self, rail_type: Option<RailType>) -> impl Iterator<Item = &'a RoutingRow> {
        self.table
            .iter()
            .filter(move |row| rail_type.is_none() || row.source_rail_type == rail_type)
    }
}
