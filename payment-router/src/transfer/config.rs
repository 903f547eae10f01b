//! Validator configuration.

use rust_decimal::Decimal;

/// Default per-transfer amount ceiling.
///
/// A sandbox safety limit, not a currency-derived one.
const DEFAULT_AMOUNT_CEILING: i64 = 10;

/// Default maximum length of a client reference id.
const DEFAULT_MAX_REFERENCE_LEN: usize = 256;

/// Configuration parameters for transfer validation.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Largest accepted `amount`, inclusive.
    pub amount_ceiling: Decimal,

    /// Longest accepted `client_reference_id`, in characters.
    pub max_reference_len: usize,

    /// Wire rails treated as on-chain when the routing table doesn't say.
    pub blockchain_rails: Vec<String>,
}

impl ValidatorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(amount_ceiling: Decimal, max_reference_len: usize, blockchain_rails: Vec<String>) -> Self {
        Self {
            amount_ceiling,
            max_reference_len,
            blockchain_rails,
        }
    }

    /// Override the amount ceiling.
    pub fn with_amount_ceiling(mut self, ceiling: Decimal) -> Self {
        self.amount_ceiling = ceiling;
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            amount_ceiling: Decimal::from(DEFAULT_AMOUNT_CEILING),
            max_reference_len: DEFAULT_MAX_REFERENCE_LEN,
            blockchain_rails: [
                "arbitrum",
                "avalanche_c_chain",
                "base",
                "bitcoin",
                "ethereum",
                "optimism",
                "polygon",
                "solana",
                "stellar",
                "tron",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ValidatorConfig::default();

        assert_eq!(config.amount_ceiling, Decimal::from(10));
        assert_eq!(config.max_reference_len, 256);
        assert!(config.blockchain_rails.iter().any(|r| r == "ethereum"));
        assert!(!config.blockchain_rails.iter().any(|r| r == "ach"));
    }

    #[test]
    fn custom_config() {
        let config = ValidatorConfig::new(Decimal::from(500), 64, vec!["base".into()]);

        assert_eq!(config.amount_ceiling, Decimal::from(500));
        assert_eq!(config.max_reference_len, 64);
        assert_eq!(config.blockchain_rails, ["base"]);
    }

    #[test]
    fn with_amount_ceiling() {
        let config = ValidatorConfig::default().with_amount_ceiling(Decimal::new(25, 1));
        assert_eq!(config.amount_ceiling.to_string(), "2.5");
        assert_eq!(config.max_reference_len, 256);
    }
}
