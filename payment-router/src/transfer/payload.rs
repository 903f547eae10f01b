//! The request body handed to the upstream transfer-creation API.
//!
//! The upstream treats the presence of a key as the signal, so every
//! optional key is left out entirely when empty or false; there are no
//! `null`, `""` or `false` values in a serialized payload.

use serde::Serialize;

use crate::domain::{WireCurrency, WireRail};

use super::draft::{DestinationTarget, SourceFunds};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Source object of a transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadSource {
    pub currency: WireCurrency,
    pub payment_rail: WireRail,
    #[serde(flatten)]
    pub funds: Option<SourceFunds>,
}

/// Destination object of a transfer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadDestination {
    pub currency: WireCurrency,
    pub payment_rail: WireRail,
    #[serde(flatten)]
    pub target: DestinationTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_charges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spei_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl PayloadDestination {
    /// A destination with no rail-specific reference fields.
    pub fn new(currency: WireCurrency, payment_rail: WireRail, target: DestinationTarget) -> Self {
        Self {
            currency,
            payment_rail,
            target,
            sepa_reference: None,
            swift_reference: None,
            swift_charges: None,
            spei_reference: None,
            ach_reference: None,
            reference: None,
        }
    }
}

/// Enabled features; only `true` flags are sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    #[serde(skip_serializing_if = "is_false")]
    pub flexible_amount: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub static_template: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_any_from_address: bool,
}

impl Features {
    /// Whether no feature is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.flexible_amount || self.static_template || self.allow_any_from_address)
    }
}

/// A validated transfer request, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRequestPayload {
    pub on_behalf_of: String,
    pub source: PayloadSource,
    pub destination: PayloadDestination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_fee_percent: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Features::is_empty")]
    pub features: Features,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn minimal() -> TransferRequestPayload {
        TransferRequestPayload {
            on_behalf_of: "cust_1".into(),
            source: PayloadSource {
                currency: WireCurrency::new("usdc"),
                payment_rail: WireRail::new("bridge_wallet"),
                funds: Some(SourceFunds::BridgeWallet("w_1".into())),
            },
            destination: PayloadDestination::new(
                WireCurrency::new("usd"),
                WireRail::new("ach"),
                DestinationTarget::ExternalAccount("ea_1".into()),
            ),
            amount: Some("5".into()),
            client_reference_id: None,
            developer_fee: None,
            developer_fee_percent: None,
            dry_run: false,
            features: Features::default(),
        }
    }

    #[test]
    fn minimal_payload_shape() {
        let value = serde_json::to_value(minimal()).unwrap();
        assert_eq!(
            value,
            json!({
                "on_behalf_of": "cust_1",
                "source": {
                    "currency": "usdc",
                    "payment_rail": "bridge_wallet",
                    "bridge_wallet_id": "w_1"
                },
                "destination": {
                    "currency": "usd",
                    "payment_rail": "ach",
                    "external_account_id": "ea_1"
                },
                "amount": "5"
            })
        );
    }

    #[test]
    fn source_without_funds_has_no_identity_key() {
        let mut payload = minimal();
        payload.source.funds = None;

        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(
            value["source"],
            json!({"currency": "usdc", "payment_rail": "bridge_wallet"})
        );
    }

    #[test]
    fn features_and_flags_only_when_true() {
        let mut payload = minimal();
        payload.dry_run = true;
        payload.features.flexible_amount = true;
        payload.amount = None;

        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["features"], json!({"flexible_amount": true}));
        assert!(value.get("amount").is_none());
    }

    #[test]
    fn destination_target_keys() {
        let mut payload = minimal();
        payload.destination.target = DestinationTarget::Address("0xabc".into());
        payload.destination.ach_reference = Some("INV 42".into());

        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["destination"]["to_address"], "0xabc");
        assert_eq!(value["destination"]["ach_reference"], "INV 42");
        assert!(value["destination"].get("external_account_id").is_none());
        assert!(value["destination"].get("sepa_reference").is_none());
    }

    #[test]
    fn features_is_empty() {
        assert!(Features::default().is_empty());
        assert!(
            !Features {
                static_template: true,
                ..Features::default()
            }
            .is_empty()
        );
    }
}
