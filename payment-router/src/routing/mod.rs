//! Route resolution.
//!
//! Answers "from this source rail and currency, where can money go?" by
//! filtering the static routing table. The resolver is stateless; the
//! cascade-clearing policy for a multi-step selection lives in
//! [`RouteSelection`], which consumes resolver output as plain data.

mod resolve;
mod selection;
mod table;


pub use resolve::{
    Resolver, RouteQuery, RouteSet, WalletRoute, distinct_destination_rails,
};
pub use selection::RouteSelection;
pub use table::RoutingTable;
