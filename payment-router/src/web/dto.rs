//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CanonicalCurrency, CanonicalRail, WalletHoldings};
use crate::routing::{RouteSet, WalletRoute};
use crate::transfer::{Field, Violations};

/// Request for the source dropdowns.
#[derive(Debug, Deserialize)]
pub struct SourcesRequest {
    /// Restrict to one rail type: `bridge_wallet`, `blockchain` or `fiat`
    pub rail_type: Option<String>,

    /// When given, also list the currencies on this source rail
    pub source_rail: Option<String>,
}

/// Source options.
#[derive(Debug, Serialize)]
pub struct SourcesResponse {
    pub source_rails: Vec<CanonicalRail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_currencies: Option<Vec<CanonicalCurrency>>,
}

/// Request for the destination dropdowns.
#[derive(Debug, Deserialize)]
pub struct DestinationsRequest {
    /// Source rail in wire vocabulary (e.g. "ethereum")
    pub source_rail: String,

    /// Source currency in wire vocabulary (e.g. "usdc")
    pub source_currency: String,

    /// Selected destination rail, if any
    pub destination_rail: Option<String>,

    /// Selected destination currency, if any
    pub destination_currency: Option<String>,
}

/// Destination options, plus the route minimum once fully selected.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    #[serde(flatten)]
    pub routes: RouteSet,

    /// Smallest accepted amount for the selected destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_minimum: Option<String>,
}

/// Request for destination options when paying into an existing wallet.
#[derive(Debug, Deserialize)]
pub struct WalletRequest {
    pub source_rail: String,
    pub source_currency: String,
    pub wallet: WalletHoldings,
}

/// Destination options for an existing wallet.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    #[serde(flatten)]
    pub route: WalletRoute,

    /// False when the wallet holds nothing routable
    pub has_compatible_currency: bool,
}

impl From<WalletRoute> for WalletResponse {
    fn from(route: WalletRoute) -> Self {
        Self {
            has_compatible_currency: route.has_compatible_currency(),
            route,
        }
    }
}

/// A single rejected field.
#[derive(Debug, Serialize)]
pub struct ViolationEntry {
    /// Machine-readable violation kind
    pub kind: &'static str,

    /// Human-readable message
    pub message: String,
}

/// Response for a rejected transfer draft.
#[derive(Debug, Serialize)]
pub struct ViolationReport {
    pub error: String,
    pub violations: BTreeMap<Field, ViolationEntry>,
}

impl From<&Violations> for ViolationReport {
    fn from(violations: &Violations) -> Self {
        Self {
            error: violations.to_string(),
            violations: violations
                .iter()
                .map(|(field, violation)| {
                    let entry = ViolationEntry {
                        kind: violation.kind(),
                        message: violation.to_string(),
                    };
                    (field, entry)
                })
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transfer::Violation;

    #[test]
    fn violation_report_shape() {
        let mut violations = Violations::new();
        violations.add(Field::Amount, Violation::AmountFormat);
        violations.add(Field::DeveloperFeePercent, Violation::FeePercentRange);

        let value = serde_json::to_value(ViolationReport::from(&violations)).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "transfer request rejected: 2 invalid field(s)",
                "violations": {
                    "amount": {
                        "kind": "AmountFormat",
                        "message": "amount must be a decimal number such as 10 or 2.50"
                    },
                    "developer_fee_percent": {
                        "kind": "FeePercentRange",
                        "message": "fee percent must be between 0 and 100"
                    }
                }
            })
        );
    }

    #[test]
    fn destinations_response_flattens_route_set() {
        let response = DestinationsResponse {
            routes: RouteSet {
                destination_rails: vec![CanonicalRail::new("Base")],
                destination_currencies: None,
            },
            transaction_minimum: None,
        };

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({"destination_rails": ["Base"], "destination_currencies": null})
        );
    }

    #[test]
    fn wallet_response_reports_compatibility() {
        let response = WalletResponse::from(WalletRoute {
            destination_rail: CanonicalRail::new("Solana"),
            destination_currencies: vec![],
        });

        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["destination_rail"], "Solana");
        assert_eq!(value["has_compatible_currency"], false);
    }
}
