//! Wallet holdings used to constrain destination choices.

use serde::Deserialize;

use super::WireRail;

/// A currency balance held by a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalletBalance {
    /// Currency code, any case.
    pub currency: String,
    /// Balance as a decimal string; informational only.
    #[serde(default)]
    pub balance: String,
}

/// An existing wallet a transfer can be sent to.
///
/// When the destination is bound to a wallet, the destination rail is the
/// wallet's chain and only currencies the wallet holds are offered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalletHoldings {
    /// Chain the wallet lives on, in wire vocabulary.
    pub chain: WireRail,
    #[serde(default)]
    pub balances: Vec<WalletBalance>,
}

impl WalletHoldings {
    /// Create holdings from a chain and a list of currency codes.
    pub fn new(chain: impl Into<String>, currencies: &[&str]) -> Self {
        Self {
            chain: WireRail::new(chain),
            balances: currencies
                .iter()
                .map(|c| WalletBalance {
                    currency: (*c).to_string(),
                    balance: String::new(),
                })
                .collect(),
        }
    }

    /// Whether the wallet holds the currency (case-insensitive).
    pub fn holds(&self, currency: &str) -> bool {
        self.balances
            .iter()
            .any(|b| b.currency.eq_ignore_ascii_case(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_is_case_insensitive() {
        let wallet = WalletHoldings::new("solana", &["usdc", "EURC"]);
        assert!(wallet.holds("USDC"));
        assert!(wallet.holds("eurc"));
        assert!(!wallet.holds("usdt"));
    }

    #[test]
    fn deserialize_defaults_balances() {
        let wallet: WalletHoldings = serde_json::from_str(r#"{"chain":"base"}"#).unwrap();
        assert_eq!(wallet.chain.as_str(), "base");
        assert!(wallet.balances.is_empty());
        assert!(!wallet.holds("usdc"));
    }
}
