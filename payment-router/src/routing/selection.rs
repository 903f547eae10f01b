//! Cascading route selection.
//!
//! A transfer form picks source rail, then source currency, then destination
//! rail, then destination currency. Each choice narrows the next list. When an
//! upstream choice changes, any downstream choice that is no longer offered
//! must be dropped before the form is shown again, otherwise the form holds a
//! value it can't display.
//!
//! [`RouteSelection`] owns that policy. It keeps the user's choices (wire
//! tokens, as the form produced them) next to the option lists last computed
//! from a [`Resolver`], and re-derives both top-down on every change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CanonicalCurrency, CanonicalRail, RailType, WireCurrency, WireRail};
use crate::normalize::Normalizer;

use super::resolve::{Resolver, distinct_destination_rails};

/// The four cascading choices and the options offered at each level.
///
/// Option lists are `None` until their level can be queried (its upstream
/// choice is made), and `Some(vec![])` when queried with no results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSelection {
    /// Restrict sources to one rail type (e.g. on-chain only).
    #[serde(default)]
    pub rail_type: Option<RailType>,

    #[serde(default)]
    pub source_rail: Option<WireRail>,
    #[serde(default)]
    pub source_currency: Option<WireCurrency>,
    #[serde(default)]
    pub destination_rail: Option<WireRail>,
    #[serde(default)]
    pub destination_currency: Option<WireCurrency>,

    #[serde(skip_deserializing)]
    pub source_rails: Option<Vec<CanonicalRail>>,
    #[serde(skip_deserializing)]
    pub source_currencies: Option<Vec<CanonicalCurrency>>,
    #[serde(skip_deserializing)]
    pub destination_rails: Option<Vec<CanonicalRail>>,
    #[serde(skip_deserializing)]
    pub destination_currencies: Option<Vec<CanonicalCurrency>>,
}

impl RouteSelection {
    /// Start a selection, computing the first level of options.
    pub fn new(rail_type: Option<RailType>, resolver: &Resolver<'_>) -> Self {
        let mut selection = Self {
            rail_type,
            ..Self::default()
        };
        selection.refresh(resolver);
        selection
    }

    /// Choose a source rail.
    pub fn select_source_rail(&mut self, rail: Option<&str>, resolver: &Resolver<'_>) {
        self.source_rail = non_empty(rail).map(WireRail::new);
        self.refresh(resolver);
    }

    /// Choose a source currency.
    pub fn select_source_currency(&mut self, currency: Option<&str>, resolver: &Resolver<'_>) {
        self.source_currency = non_empty(currency).map(WireCurrency::new);
        self.refresh(resolver);
    }

    /// Choose a destination rail.
    pub fn select_destination_rail(&mut self, rail: Option<&str>, resolver: &Resolver<'_>) {
        self.destination_rail = non_empty(rail).map(WireRail::new);
        self.refresh(resolver);
    }

    /// Choose a destination currency.
    pub fn select_destination_currency(&mut self, currency: Option<&str>, resolver: &Resolver<'_>) {
        self.destination_currency = non_empty(currency).map(WireCurrency::new);
        self.refresh(resolver);
    }

    /// Whether every level has a valid choice.
    pub fn is_complete(&self) -> bool {
        self.source_rail.is_some()
            && self.source_currency.is_some()
            && self.destination_rail.is_some()
            && self.destination_currency.is_some()
    }

    /// Recompute every option list top-down, dropping stale choices.
    pub fn refresh(&mut self, resolver: &Resolver<'_>) {
        let n = resolver.normalizer();

        let source_rails = resolver.source_rails(self.rail_type);
        if !rail_offered(n, self.source_rail.as_ref(), &source_rails) {
            clear("source_rail", &mut self.source_rail);
        }
        self.source_rails = Some(source_rails);

        self.source_currencies = self
            .source_rail
            .as_ref()
            .map(|rail| resolver.source_currencies(self.rail_type, rail.as_str()));
        if !currency_offered(n, self.source_currency.as_ref(), self.source_currencies.as_deref()) {
            clear("source_currency", &mut self.source_currency);
        }

        let rows = match (&self.source_rail, &self.source_currency) {
            (Some(rail), Some(currency)) => {
                Some(resolver.query_by_source(rail.as_str(), currency.as_str()))
            }
            _ => None,
        };

        self.destination_rails = rows
            .as_ref()
            .map(|rows| distinct_destination_rails(rows.iter().copied()));
        let offered = self.destination_rails.as_deref().unwrap_or(&[]);
        if !rail_offered(n, self.destination_rail.as_ref(), offered) {
            clear("destination_rail", &mut self.destination_rail);
        }

        self.destination_currencies = match (&rows, &self.destination_rail) {
            (Some(rows), Some(rail)) => {
                Some(resolver.distinct_destination_currencies(rows, rail.as_str()))
            }
            _ => None,
        };
        if !currency_offered(
            n,
            self.destination_currency.as_ref(),
            self.destination_currencies.as_deref(),
        ) {
            clear("destination_currency", &mut self.destination_currency);
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn clear<T: std::fmt::Debug>(field: &str, choice: &mut Option<T>) {
    if let Some(stale) = choice.take() {
        debug!(field, ?stale, "cleared choice no longer offered");
    }
}

/// True when nothing is chosen or the choice is among the options.
fn rail_offered(n: &Normalizer, choice: Option<&WireRail>, options: &[CanonicalRail]) -> bool {
    choice.is_none_or(|rail| options.contains(&n.to_canonical_rail(rail.as_str())))
}

fn currency_offered(
    n: &Normalizer,
    choice: Option<&WireCurrency>,
    options: Option<&[CanonicalCurrency]>,
) -> bool {
    match choice {
        None => true,
        Some(currency) => options
            .unwrap_or(&[])
            .contains(&n.to_canonical_currency(currency.as_str())),
    }
}
