//! Payment rail identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A payment rail in the routing table's own vocabulary.
///
/// Canonical rails are what the routing table is keyed on, e.g.
/// `"Avalanche C-Chain"` or `"ACH"`. A [`WireRail`] only becomes one through
/// the normalizer.
///
/// Ordering is lexicographic on the underlying string, which is the order
/// option lists are presented in.
///
/// # Examples
///
/// ```
/// use payment_router::domain::CanonicalRail;
///
/// let rail = CanonicalRail::new("Polygon");
/// assert_eq!(rail.as_str(), "Polygon");
/// assert!(CanonicalRail::new("Base") < rail);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalRail(String);

impl CanonicalRail {
    /// Wrap a table-vocabulary rail name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the rail name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CanonicalRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalRail({})", self.0)
    }
}

impl fmt::Display for CanonicalRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A payment rail in the upstream API's vocabulary (e.g. `"avalanche_c_chain"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireRail(String);

impl WireRail {
    /// Wrap an upstream rail token as-is.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the rail token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WireRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WireRail({})", self.0)
    }
}

impl fmt::Display for WireRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ordering_is_lexicographic() {
        let mut rails = vec![
            CanonicalRail::new("Polygon"),
            CanonicalRail::new("ACH"),
            CanonicalRail::new("Base"),
            CanonicalRail::new("Avalanche C-Chain"),
        ];
        rails.sort();

        let names: Vec<&str> = rails.iter().map(CanonicalRail::as_str).collect();
        assert_eq!(names, ["ACH", "Avalanche C-Chain", "Base", "Polygon"]);
    }

    #[test]
    fn display_and_debug() {
        let rail = CanonicalRail::new("Ethereum");
        assert_eq!(format!("{}", rail), "Ethereum");
        assert_eq!(format!("{:?}", rail), "CanonicalRail(Ethereum)");

        let wire = WireRail::new("ethereum");
        assert_eq!(format!("{}", wire), "ethereum");
        assert_eq!(format!("{:?}", wire), "WireRail(ethereum)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let rail = CanonicalRail::new("Bridge Wallet");
        assert_eq!(serde_json::to_string(&rail).unwrap(), "\"Bridge Wallet\"");

        let parsed: WireRail = serde_json::from_str("\"bridge_wallet\"").unwrap();
        assert_eq!(parsed.as_str(), "bridge_wallet");
    }
}
