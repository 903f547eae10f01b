//! Domain types for payment routing.
//!
//! Rails and currencies exist in two vocabularies: the routing table's
//! canonical names and the upstream API's wire tokens. Each vocabulary has its
//! own type, and only [`crate::normalize::Normalizer`] converts between them.

mod currency;
mod rail;
mod rail_type;
mod route;
mod wallet;

pub use currency::{CanonicalCurrency, WireCurrency};
pub use rail::{CanonicalRail, WireRail};
pub use rail_type::{InvalidRailType, RailType};
pub use route::RoutingRow;
pub use wallet::{WalletBalance, WalletHoldings};
