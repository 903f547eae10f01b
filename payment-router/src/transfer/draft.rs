//! Transfer form state and its typed targets.
//!
//! [`TransferDraft`] mirrors the transfer form as the user edits it: plain
//! strings where an empty string means "not given". Validation turns it into
//! typed values, where a destination is exactly one [`DestinationTarget`]
//! variant rather than three optional strings.

use serde::{Deserialize, Serialize};

/// Source side of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceDraft {
    pub payment_rail: String,
    pub currency: String,
    pub bridge_wallet_id: String,
    pub from_address: String,
    pub external_account_id: String,
}

/// Destination side of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DestinationDraft {
    pub payment_rail: String,
    pub currency: String,
    pub to_address: String,
    pub bridge_wallet_id: String,
    pub external_account_id: String,
    pub sepa_reference: String,
    pub swift_reference: String,
    pub swift_charges: String,
    pub spei_reference: String,
    pub ach_reference: String,
    pub reference: String,
}

/// Feature toggles on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub flexible_amount: bool,
    pub static_template: bool,
    pub allow_any_from_address: bool,
    pub dry_run: bool,
}

/// The transfer form as currently edited.
///
/// Created with defaults when a transfer flow starts and dropped on submit
/// or cancel; it is never sent upstream itself.
///
/// Entered values are trimmed before validation, and the trimmed value is
/// what the payload carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransferDraft {
    /// Customer the transfer is made for, supplied by the calling flow.
    pub on_behalf_of: String,
    pub amount: String,
    pub source: SourceDraft,
    pub destination: DestinationDraft,
    pub client_reference_id: String,
    pub developer_fee: String,
    pub developer_fee_percent: String,
    pub features: FeatureFlags,
}

impl TransferDraft {
    /// Start a new draft for a customer.
    pub fn new(on_behalf_of: impl Into<String>) -> Self {
        Self {
            on_behalf_of: on_behalf_of.into(),
            ..Self::default()
        }
    }
}

/// Returns the trimmed value, or `None` if nothing was entered.
pub(crate) fn given(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Where a transfer is delivered.
///
/// Serializes flattened into the destination object as the one key the
/// upstream API expects for that kind of target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DestinationTarget {
    /// A raw on-chain address.
    #[serde(rename = "to_address")]
    Address(String),
    /// An existing custodial wallet.
    #[serde(rename = "bridge_wallet_id")]
    Wallet(String),
    /// A registered bank account.
    #[serde(rename = "external_account_id")]
    ExternalAccount(String),
}

impl DestinationTarget {
    /// The single target named by the form, if exactly one was given.
    pub fn from_draft(draft: &DestinationDraft) -> Option<Self> {
        let candidates = [
            given(&draft.to_address).map(|v| DestinationTarget::Address(v.to_string())),
            given(&draft.bridge_wallet_id).map(|v| DestinationTarget::Wallet(v.to_string())),
            given(&draft.external_account_id)
                .map(|v| DestinationTarget::ExternalAccount(v.to_string())),
        ];

        let mut targets = candidates.into_iter().flatten();
        match (targets.next(), targets.next()) {
            (Some(target), None) => Some(target),
            _ => None,
        }
    }
}

/// Where the funds come from, by source rail family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SourceFunds {
    #[serde(rename = "bridge_wallet_id")]
    BridgeWallet(String),
    #[serde(rename = "from_address")]
    Address(String),
    #[serde(rename = "external_account_id")]
    ExternalAccount(String),
}
