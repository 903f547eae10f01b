//! Routing table document types.
//!
//! Mirrors the JSON document field for field. Values are left as loaded;
//! [`super::convert`] turns them into validated domain rows.

use serde::{Deserialize, Serialize};

/// One row of the routing table document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRowDto {
    pub source_rail: String,
    pub source_currency: String,
    pub destination_rail: String,
    pub destination_currency: String,
    /// Decimal string, e.g. `"1.00"`.
    pub transaction_minimum: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_rail_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_rail_type: Option<u8>,
}
