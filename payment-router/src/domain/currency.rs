//! Currency code types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A currency code in the routing table's vocabulary (upper-case, e.g. `"USDC"`).
///
/// Construction upper-cases the input, so two codes that differ only in case
/// are equal once canonical.
///
/// # Examples
///
/// ```
/// use payment_router::domain::CanonicalCurrency;
///
/// assert_eq!(CanonicalCurrency::new("usdc"), CanonicalCurrency::new("USDC"));
/// assert_eq!(CanonicalCurrency::new("eurc").as_str(), "EURC");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalCurrency(String);

impl CanonicalCurrency {
    /// Create a canonical code, upper-casing the input.
    pub fn new(code: &str) -> Self {
        Self(code.to_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a free-form code.
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code)
    }
}

impl fmt::Debug for CanonicalCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalCurrency({})", self.0)
    }
}

impl fmt::Display for CanonicalCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A currency code as the upstream API spells it (lower-case, e.g. `"usdc"`).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireCurrency(String);

impl WireCurrency {
    /// Wrap an upstream currency token as-is.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WireCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WireCurrency({})", self.0)
    }
}

impl fmt::Display for WireCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Canonicalizing is idempotent
        #[test]
        fn new_is_idempotent(s in "[a-zA-Z]{0,8}") {
            let once = CanonicalCurrency::new(&s);
            let twice = CanonicalCurrency::new(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// A canonical code always matches its own lower-case spelling
        #[test]
        fn matches_lowercase(s in "[a-zA-Z]{1,8}") {
            let code = CanonicalCurrency::new(&s);
            prop_assert!(code.matches(&s.to_lowercase()));
        }
    }
}
