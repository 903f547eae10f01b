//! Validation violations.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// A form field a violation can be attached to.
///
/// Serialized names match the form's field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Amount,
    DeveloperFee,
    DeveloperFeePercent,
    ClientReferenceId,
    SourceBridgeWalletId,
    SourceFromAddress,
    DestinationToAddress,
    DestinationBridgeWalletId,
    DestinationExternalAccountId,
}

impl Field {
    /// The three destination identity fields, exactly one of which must be set.
    pub const DESTINATION_TARGETS: [Field; 3] = [
        Field::DestinationToAddress,
        Field::DestinationBridgeWalletId,
        Field::DestinationExternalAccountId,
    ];

    /// The form field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::DeveloperFee => "developer_fee",
            Field::DeveloperFeePercent => "developer_fee_percent",
            Field::ClientReferenceId => "client_reference_id",
            Field::SourceBridgeWalletId => "source_bridge_wallet_id",
            Field::SourceFromAddress => "source_from_address",
            Field::DestinationToAddress => "destination_to_address",
            Field::DestinationBridgeWalletId => "destination_bridge_wallet_id",
            Field::DestinationExternalAccountId => "destination_external_account_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("amount is required unless the amount is flexible")]
    AmountRequired,

    #[error("amount must be a decimal number such as 10 or 2.50")]
    AmountFormat,

    #[error("amount must not exceed {limit}")]
    AmountExceedsLimit { limit: Decimal },

    #[error("amount must be left empty for flexible amount transfers")]
    AmountConflictsWithFlexibleAmount,

    #[error("fee must be a decimal number such as 0.50")]
    FeeFormat,

    #[error("fee percent must be between 0 and 100")]
    FeePercentRange,

    #[error("flexible amount transfers can only charge a percentage fee")]
    FixedFeeIncompatibleWithFlexibleAmount,

    #[error("client reference id must be between 1 and {max} characters")]
    ReferenceLength { max: usize },

    #[error("{field} is required when sending from {rail}")]
    SourceFieldRequired { field: Field, rail: String },

    #[error(
        "exactly one of destination address, bridge wallet or external account must be given"
    )]
    DestinationExactlyOne,
}

impl Violation {
    /// Stable machine-readable name of the violation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::AmountRequired => "AmountRequired",
            Violation::AmountFormat => "AmountFormat",
            Violation::AmountExceedsLimit { .. } => "AmountExceedsLimit",
            Violation::AmountConflictsWithFlexibleAmount => "AmountConflictsWithFlexibleAmount",
            Violation::FeeFormat => "FeeFormat",
            Violation::FeePercentRange => "FeePercentRange",
            Violation::FixedFeeIncompatibleWithFlexibleAmount => {
                "FixedFeeIncompatibleWithFlexibleAmount"
            }
            Violation::ReferenceLength { .. } => "ReferenceLength",
            Violation::SourceFieldRequired { .. } => "SourceFieldRequired",
            Violation::DestinationExactlyOne => "DestinationExactlyOne",
        }
    }
}

/// Every violation found in a draft, keyed by field.
///
/// Holds at most one violation per field: the first one recorded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("transfer request rejected: {} invalid field(s)", .0.len())]
pub struct Violations(BTreeMap<Field, Violation>);

impl Violations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one.
    pub fn add(&mut self, field: Field, violation: Violation) {
        self.0.entry(field).or_insert(violation);
    }

    /// The violation recorded for a field.
    pub fn get(&self, field: Field) -> Option<&Violation> {
        self.0.get(&field)
    }

    /// Whether the field has a violation.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of fields with violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Violation)> {
        self.0.iter().map(|(field, violation)| (*field, violation))
    }
}
