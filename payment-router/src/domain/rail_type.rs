//! Rail transport categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a rail type ordinal is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rail type ordinal: {0}")]
pub struct InvalidRailType(pub u8);

/// Transport category of a payment rail.
///
/// In the routing table document this is encoded as the variant's ordinal
/// (`0`, `1`, `2`), so the order of variants here is part of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RailType {
    /// Custodial wallet held by the payments provider.
    BridgeWallet,
    /// On-chain rail (Ethereum, Solana, ...).
    Blockchain,
    /// Bank rail (ACH, SEPA, Wire, ...).
    Fiat,
}

impl RailType {
    /// Parse a rail type from its query-string name (case-insensitive).
    ///
    /// Accepts `bridge_wallet`, `blockchain` and `fiat`.
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bridge_wallet" => Some(RailType::BridgeWallet),
            "blockchain" => Some(RailType::Blockchain),
            "fiat" => Some(RailType::Fiat),
            _ => None,
        }
    }

    /// Whether value moves on a public chain.
    pub fn is_on_chain(self) -> bool {
        self == RailType::Blockchain
    }
}

impl TryFrom<u8> for RailType {
    type Error = InvalidRailType;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(RailType::BridgeWallet),
            1 => Ok(RailType::Blockchain),
            2 => Ok(RailType::Fiat),
            n => Err(InvalidRailType(n)),
        }
    }
}

impl From<RailType> for u8 {
    fn from(rail_type: RailType) -> Self {
        match rail_type {
            RailType::BridgeWallet => 0,
            RailType::Blockchain => 1,
            RailType::Fiat => 2,
        }
    }
}

impl fmt::Display for RailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RailType::BridgeWallet => "bridge_wallet",
            RailType::Blockchain => "blockchain",
            RailType::Fiat => "fiat",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_document_format() {
        assert_eq!(RailType::try_from(0), Ok(RailType::BridgeWallet));
        assert_eq!(RailType::try_from(1), Ok(RailType::Blockchain));
        assert_eq!(RailType::try_from(2), Ok(RailType::Fiat));
        assert_eq!(RailType::try_from(3), Err(InvalidRailType(3)));
    }

    #[test]
    fn deserialize_from_integer() {
        let rt: RailType = serde_json::from_str("1").unwrap();
        assert_eq!(rt, RailType::Blockchain);
        assert!(serde_json::from_str::<RailType>("7").is_err());
        assert_eq!(serde_json::to_string(&RailType::Fiat).unwrap(), "2");
    }

    #[test]
    fn parse_name_roundtrips_display() {
        for rt in [RailType::BridgeWallet, RailType::Blockchain, RailType::Fiat] {
            assert_eq!(RailType::parse_name(&rt.to_string()), Some(rt));
        }
        assert_eq!(RailType::parse_name("BLOCKCHAIN"), Some(RailType::Blockchain));
        assert_eq!(RailType::parse_name("onchain"), None);
    }

    #[test]
    fn only_blockchain_is_on_chain() {
        assert!(RailType::Blockchain.is_on_chain());
        assert!(!RailType::BridgeWallet.is_on_chain());
        assert!(!RailType::Fiat.is_on_chain());
    }
}
