//! The in-memory routing table.

use crate::domain::{CanonicalRail, RailType, RoutingRow};

/// Read-only set of routing rows.
///
/// Loaded once at startup. An empty table is valid and simply means every
/// query has no routes.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    rows: Vec<RoutingRow>,
}

impl RoutingTable {
    /// Create a table from converted rows.
    pub fn new(rows: Vec<RoutingRow>) -> Self {
        Self { rows }
    }

    /// Create a table with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All rows, in document order.
    pub fn rows(&self) -> &[RoutingRow] {
        &self.rows
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, RoutingRow> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rail type the table records for a rail, from either end of any row.
    ///
    /// Returns `None` if the table never mentions the rail or never types it.
    pub fn rail_type_of(&self, rail: &CanonicalRail) -> Option<RailType> {
        self.rows.iter().find_map(|row| {
            if &row.source_rail == rail && row.source_rail_type.is_some() {
                row.source_rail_type
            } else if &row.destination_rail == rail {
                row.destination_rail_type
            } else {
                None
            }
        })
    }
}

impl<'a> IntoIterator for &'a RoutingTable {
    type Item = &'a RoutingRow;
    type IntoIter = std::slice::Iter<'a, RoutingRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
