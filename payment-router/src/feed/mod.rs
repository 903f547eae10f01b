//! Routing table document loading.
//!
//! The table is a static JSON array of rows, read once at startup from a
//! local file or a URL. Rows that don't convert are skipped; a document
//! that can't be loaded at all yields an empty table through
//! [`load_or_empty`], so routing simply reports no routes.

mod client;
mod convert;
mod error;
mod file;
mod types;

use std::path::PathBuf;

use tracing::error;

use crate::routing::RoutingTable;

pub use client::{RoutingTableClient, RoutingTableClientConfig};
pub use convert::{ConversionError, convert_row, convert_table};
pub use error::FeedError;
pub use file::{load_file, parse_document};
pub use types::RoutingRowDto;

/// Where the routing table document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// A local JSON file.
    File(PathBuf),
    /// A document served over HTTP.
    Url(String),
    /// No document configured: the table is empty.
    None,
}

/// Load the routing table from its source.
pub async fn load(source: &TableSource) -> Result<RoutingTable, FeedError> {
    match source {
        TableSource::File(path) => load_file(path),
        TableSource::Url(url) => {
            let client = RoutingTableClient::new(RoutingTableClientConfig::new(url.clone()))?;
            client.fetch().await
        }
        TableSource::None => Ok(RoutingTable::empty()),
    }
}

/// Load the routing table, falling back to an empty table on any failure.
pub async fn load_or_empty(source: &TableSource) -> RoutingTable {
    match load(source).await {
        Ok(table) => table,
        Err(e) => {
            error!(error = %e, ?source, "failed to load routing table; using an empty table");
            RoutingTable::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_source_is_empty() {
        assert!(load(&TableSource::None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = TableSource::File(dir.path().join("missing.json"));

        assert!(load(&source).await.is_err());
        assert!(load_or_empty(&source).await.is_empty());
    }

    #[tokio::test]
    async fn file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(
            &path,
            r#"[{"sourceRail": "Base", "sourceCurrency": "USDC", "destinationRail": "Wire",
                 "destinationCurrency": "USD", "transactionMinimum": "20"}]"#,
        )
        .unwrap();

        let table = load_or_empty(&TableSource::File(path)).await;
        assert_eq!(table.len(), 1);
    }
}
