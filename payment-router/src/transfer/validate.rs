//! Transfer request validation.
//!
//! A single pass over the draft that evaluates every rule, so one submit
//! attempt reports every problem. Only a draft with no violations becomes a
//! [`TransferRequestPayload`].

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{CanonicalRail, RailType, WireCurrency, WireRail};
use crate::normalize::Normalizer;
use crate::routing::RoutingTable;

use super::config::ValidatorConfig;
use super::draft::{DestinationDraft, DestinationTarget, SourceFunds, TransferDraft, given};
use super::payload::{Features, PayloadDestination, PayloadSource, TransferRequestPayload};
use super::violation::{Field, Violation, Violations};

/// Unsigned decimal with an optional fractional part: `10`, `2.50`.
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("Invalid regex pattern"));

/// [`DECIMAL`] with an optional sign, for percentages.
static SIGNED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("Invalid regex pattern"));

/// Outcome of validating a draft: a payload, or every violation found.
pub type ValidationResult = Result<TransferRequestPayload, Violations>;

/// What the source rail demands of the source fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFamily {
    /// Custodial wallet: needs a wallet id.
    BridgeWallet,
    /// Solana: always needs a sending address.
    Solana,
    /// Other chains: need a sending address unless any address is allowed.
    OnChain,
    /// Bank rails and anything unrecognised.
    Other,
}

/// Validates transfer drafts against the routing context.
pub struct Validator<'a> {
    config: &'a ValidatorConfig,
    normalizer: &'a Normalizer,
    table: &'a RoutingTable,
}

impl<'a> Validator<'a> {
    /// Create a validator.
    pub fn new(config: &'a ValidatorConfig, normalizer: &'a Normalizer, table: &'a RoutingTable) -> Self {
        Self {
            config,
            normalizer,
            table,
        }
    }

    /// Validate a draft, returning the payload to submit or all violations.
    pub fn validate(&self, draft: &TransferDraft) -> ValidationResult {
        let mut violations = Violations::new();

        self.check_amount(draft, &mut violations);
        self.check_fees(draft, &mut violations);
        self.check_reference(draft, &mut violations);
        let funds = self.check_source(draft, &mut violations);
        let target = check_destination(&draft.destination, &mut violations);

        match target {
            Some(target) if violations.is_empty() => Ok(self.build_payload(draft, funds, target)),
            _ => {
                debug!(count = violations.len(), "transfer draft rejected");
                Err(violations)
            }
        }
    }

    fn check_amount(&self, draft: &TransferDraft, violations: &mut Violations) {
        let flexible = draft.features.flexible_amount;

        let Some(amount) = given(&draft.amount) else {
            if !flexible {
                violations.add(Field::Amount, Violation::AmountRequired);
            }
            return;
        };

        if flexible {
            violations.add(Field::Amount, Violation::AmountConflictsWithFlexibleAmount);
        }

        if !DECIMAL.is_match(amount) {
            violations.add(Field::Amount, Violation::AmountFormat);
            return;
        }

        if exceeds(amount, self.config.amount_ceiling) {
            violations.add(
                Field::Amount,
                Violation::AmountExceedsLimit {
                    limit: self.config.amount_ceiling,
                },
            );
        }
    }

    fn check_fees(&self, draft: &TransferDraft, violations: &mut Violations) {
        if let Some(fee) = given(&draft.developer_fee) {
            if draft.features.flexible_amount {
                violations.add(
                    Field::DeveloperFee,
                    Violation::FixedFeeIncompatibleWithFlexibleAmount,
                );
            }
            if !DECIMAL.is_match(fee) {
                violations.add(Field::DeveloperFee, Violation::FeeFormat);
            }
        }

        if let Some(percent) = given(&draft.developer_fee_percent) {
            if !SIGNED_DECIMAL.is_match(percent) {
                violations.add(Field::DeveloperFeePercent, Violation::FeeFormat);
            } else if !percent_in_range(percent) {
                violations.add(Field::DeveloperFeePercent, Violation::FeePercentRange);
            }
        }
    }

    fn check_reference(&self, draft: &TransferDraft, violations: &mut Violations) {
        let Some(reference) = given(&draft.client_reference_id) else {
            return;
        };
        let max = self.config.max_reference_len;
        if !(1..=max).contains(&reference.chars().count()) {
            violations.add(Field::ClientReferenceId, Violation::ReferenceLength { max });
        }
    }

    /// Check the source companion fields and pick the funds to send from.
    fn check_source(&self, draft: &TransferDraft, violations: &mut Violations) -> Option<SourceFunds> {
        let source = &draft.source;
        let rail = source.payment_rail.trim();
        let from_address = given(&source.from_address);

        let required = |field: Field| Violation::SourceFieldRequired {
            field,
            rail: rail.to_string(),
        };

        match self.source_family(rail) {
            SourceFamily::BridgeWallet => match given(&source.bridge_wallet_id) {
                Some(id) => Some(SourceFunds::BridgeWallet(id.to_string())),
                None => {
                    violations.add(Field::SourceBridgeWalletId, required(Field::SourceBridgeWalletId));
                    None
                }
            },
            SourceFamily::Solana => match from_address {
                Some(address) => Some(SourceFunds::Address(address.to_string())),
                None => {
                    violations.add(Field::SourceFromAddress, required(Field::SourceFromAddress));
                    None
                }
            },
            SourceFamily::OnChain => {
                if from_address.is_none() && !draft.features.allow_any_from_address {
                    violations.add(Field::SourceFromAddress, required(Field::SourceFromAddress));
                }
                from_address.map(|address| SourceFunds::Address(address.to_string()))
            }
            SourceFamily::Other => given(&source.external_account_id)
                .map(|id| SourceFunds::ExternalAccount(id.to_string())),
        }
    }

    fn source_family(&self, wire_rail: &str) -> SourceFamily {
        let rail = self.normalizer.to_canonical_rail(wire_rail);

        if rail == self.canonical("bridge_wallet") {
            return SourceFamily::BridgeWallet;
        }
        if rail == self.canonical("solana") {
            return SourceFamily::Solana;
        }

        let on_chain = match self.table.rail_type_of(&rail) {
            Some(rail_type) => rail_type == RailType::Blockchain,
            None => self
                .config
                .blockchain_rails
                .iter()
                .any(|known| self.normalizer.is_rail(known, &rail)),
        };
        if on_chain {
            SourceFamily::OnChain
        } else {
            SourceFamily::Other
        }
    }

    fn canonical(&self, wire_rail: &str) -> CanonicalRail {
        self.normalizer.to_canonical_rail(wire_rail)
    }

    fn build_payload(
        &self,
        draft: &TransferDraft,
        funds: Option<SourceFunds>,
        target: DestinationTarget,
    ) -> TransferRequestPayload {
        let source = PayloadSource {
            currency: wire_currency(&draft.source.currency),
            payment_rail: wire_rail(&draft.source.payment_rail),
            funds,
        };

        let dest = &draft.destination;
        let mut destination = PayloadDestination::new(
            wire_currency(&dest.currency),
            wire_rail(&dest.payment_rail),
            target,
        );

        let rail = self.canonical(dest.payment_rail.trim());
        let owned = |value: &str| given(value).map(str::to_string);
        if rail == self.canonical("sepa") {
            destination.sepa_reference = owned(&dest.sepa_reference);
        } else if rail == self.canonical("swift") {
            destination.swift_reference = owned(&dest.swift_reference);
            destination.swift_charges = owned(&dest.swift_charges);
        } else if rail == self.canonical("spei") {
            destination.spei_reference = owned(&dest.spei_reference);
        } else if rail == self.canonical("ach") {
            destination.ach_reference = owned(&dest.ach_reference);
        } else if rail == self.canonical("wire") {
            destination.reference = owned(&dest.reference);
        }

        let features = Features {
            flexible_amount: draft.features.flexible_amount,
            static_template: draft.features.static_template,
            allow_any_from_address: draft.features.allow_any_from_address,
        };

        TransferRequestPayload {
            on_behalf_of: draft.on_behalf_of.trim().to_string(),
            source,
            destination,
            amount: owned(&draft.amount),
            client_reference_id: owned(&draft.client_reference_id),
            developer_fee: owned(&draft.developer_fee),
            developer_fee_percent: owned(&draft.developer_fee_percent),
            dry_run: draft.features.dry_run,
            features,
        }
    }
}

/// Exactly one destination target, or the same violation on all three fields.
fn check_destination(
    destination: &DestinationDraft,
    violations: &mut Violations,
) -> Option<DestinationTarget> {
    let target = DestinationTarget::from_draft(destination);
    if target.is_none() {
        for field in Field::DESTINATION_TARGETS {
            violations.add(field, Violation::DestinationExactlyOne);
        }
    }
    target
}

/// Wire rail as sent upstream: the form's token, lower-cased.
///
/// Not round-tripped through the canonical form, which would lose ACH
/// sub-types.
fn wire_rail(value: &str) -> WireRail {
    WireRail::new(value.trim().to_lowercase())
}

fn wire_currency(value: &str) -> WireCurrency {
    WireCurrency::new(value.trim().to_lowercase())
}

/// Whether an unsigned decimal string is above `limit`, compared digit by
/// digit without rounding.
fn exceeds(value: &str, limit: Decimal) -> bool {
    if limit.is_sign_negative() && !limit.is_zero() {
        return true;
    }
    compare_unsigned(value, &limit.abs().to_string()) == Ordering::Greater
}

/// Order two unsigned decimal strings by value.
fn compare_unsigned(a: &str, b: &str) -> Ordering {
    fn parts(s: &str) -> (&str, &str) {
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
        (whole.trim_start_matches('0'), fraction.trim_end_matches('0'))
    }

    let (a_whole, a_fraction) = parts(a);
    let (b_whole, b_fraction) = parts(b);

    a_whole
        .len()
        .cmp(&b_whole.len())
        .then_with(|| a_whole.cmp(b_whole))
        .then_with(|| a_fraction.cmp(b_fraction))
}

/// A signed decimal string within [0, 100]; negative zero counts as zero.
fn percent_in_range(percent: &str) -> bool {
    match percent.strip_prefix('-') {
        Some(digits) => digits.bytes().all(|b| b == b'0' || b == b'.'),
        None => {
            let digits = percent.strip_prefix('+').unwrap_or(percent);
            !exceeds(digits, Decimal::ONE_HUNDRED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_ignores_padding_zeros() {
        assert_eq!(compare_unsigned("010.50", "10.5"), Ordering::Equal);
        assert_eq!(compare_unsigned("9.999", "10"), Ordering::Less);
        assert_eq!(compare_unsigned("10.05", "10.5"), Ordering::Less);
        assert_eq!(compare_unsigned("100", "99.99"), Ordering::Greater);
        assert_eq!(compare_unsigned("0", "0.0"), Ordering::Equal);
    }

    #[test]
    fn exceeds_past_decimal_precision() {
        let ten = Decimal::from(10);
        let just_over = format!("10.{}1", "0".repeat(40));
        assert!(exceeds(&just_over, ten));
        assert!(!exceeds(&format!("9.{}", "9".repeat(40)), ten));
        assert!(!exceeds(&format!("10.{}", "0".repeat(40)), ten));
    }
}
