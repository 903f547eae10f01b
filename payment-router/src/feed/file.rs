//! Loading the routing table document from disk.

use std::path::Path;

use tracing::info;

use crate::routing::RoutingTable;

use super::convert::convert_table;
use super::error::FeedError;
use super::types::RoutingRowDto;

/// Parse a routing table document (a JSON array of rows).
pub fn parse_document(json: &str) -> Result<RoutingTable, FeedError> {
    let rows: Vec<RoutingRowDto> = serde_json::from_str(json).map_err(|e| FeedError::Json {
        message: e.to_string(),
    })?;
    Ok(convert_table(&rows))
}

/// Load the routing table from a local JSON file.
pub fn load_file(path: impl AsRef<Path>) -> Result<RoutingTable, FeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_document(&json)?;
    info!(rows = table.len(), path = %path.display(), "loaded routing table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DOCUMENT: &str = r#"[
        {"sourceRail": "Ethereum", "sourceCurrency": "USDC", "destinationRail": "Base",
         "destinationCurrency": "USDC", "transactionMinimum": "1", "sourceRailType": 1},
        {"sourceRail": "Ethereum", "sourceCurrency": "USDC", "destinationRail": "ACH",
         "destinationCurrency": "USD", "transactionMinimum": "not a number"}
    ]"#;

    #[test]
    fn load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].destination_rail.as_str(), "Base");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("routes.json")).unwrap_err();
        assert!(matches!(err, FeedError::Io { .. }));
        assert!(err.to_string().contains("routes.json"));
    }

    #[test]
    fn non_array_document_is_json_error() {
        let err = parse_document(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, FeedError::Json { .. }));
    }

    #[test]
    fn bundled_document_loads() {
        let table = load_file("static/routes.json").unwrap();
        assert_eq!(table.len(), 13);
    }

    #[test]
    fn empty_array_is_empty_table() {
        assert!(parse_document("[]").unwrap().is_empty());
    }
}
