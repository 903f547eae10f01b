//! Conversion from document rows to domain rows.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::{CanonicalCurrency, CanonicalRail, InvalidRailType, RailType, RoutingRow};
use crate::routing::RoutingTable;

use super::types::RoutingRowDto;

/// Error during document row to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A rail or currency field is blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The minimum is not a non-negative decimal
    #[error("invalid transaction minimum: {0:?}")]
    InvalidMinimum(String),

    /// A rail type ordinal is out of range
    #[error(transparent)]
    RailType(#[from] InvalidRailType),
}

/// Convert a single document row.
pub fn convert_row(dto: &RoutingRowDto) -> Result<RoutingRow, ConversionError> {
    let source_rail = required(&dto.source_rail, "sourceRail")?;
    let source_currency = required(&dto.source_currency, "sourceCurrency")?;
    let destination_rail = required(&dto.destination_rail, "destinationRail")?;
    let destination_currency = required(&dto.destination_currency, "destinationCurrency")?;

    let minimum = dto.transaction_minimum.trim();
    let transaction_minimum = Decimal::from_str(minimum)
        .ok()
        .filter(|m| !m.is_sign_negative())
        .ok_or_else(|| ConversionError::InvalidMinimum(dto.transaction_minimum.clone()))?;

    let source_rail_type = dto.source_rail_type.map(RailType::try_from).transpose()?;
    let destination_rail_type = dto.destination_rail_type.map(RailType::try_from).transpose()?;

    Ok(RoutingRow::new(
        CanonicalRail::new(source_rail),
        CanonicalCurrency::new(source_currency),
        CanonicalRail::new(destination_rail),
        CanonicalCurrency::new(destination_currency),
        transaction_minimum,
    )
    .with_rail_types(source_rail_type, destination_rail_type))
}

/// Convert a whole document.
///
/// Rows that fail to convert are logged and skipped rather than failing the
/// whole table.
pub fn convert_table(rows: &[RoutingRowDto]) -> RoutingTable {
    let mut converted = Vec::with_capacity(rows.len());

    for (index, dto) in rows.iter().enumerate() {
        match convert_row(dto) {
            Ok(row) => converted.push(row),
            Err(e) => warn!(index, error = %e, "skipping routing row"),
        }
    }

    RoutingTable::new(converted)
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ConversionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConversionError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(minimum: &str) -> RoutingRowDto {
        RoutingRowDto {
            source_rail: "Ethereum".into(),
            source_currency: "usdc".into(),
            destination_rail: "Base".into(),
            destination_currency: "USDC".into(),
            transaction_minimum: minimum.into(),
            source_rail_type: Some(1),
            destination_rail_type: Some(1),
        }
    }

    #[test]
    fn convert_valid_row() {
        let row = convert_row(&dto("1.50")).unwrap();

        assert_eq!(row.source_rail.as_str(), "Ethereum");
        assert_eq!(row.source_currency.as_str(), "USDC");
        assert_eq!(row.transaction_minimum, Decimal::new(150, 2));
        assert_eq!(row.source_rail_type, Some(RailType::Blockchain));
    }

    #[test]
    fn invalid_minimum() {
        for bad in ["", "abc", "-1"] {
            assert_eq!(
                convert_row(&dto(bad)),
                Err(ConversionError::InvalidMinimum(bad.to_string()))
            );
        }
    }

    #[test]
    fn invalid_rail_type() {
        let mut d = dto("1");
        d.destination_rail_type = Some(7);
        assert_eq!(
            convert_row(&d),
            Err(ConversionError::RailType(InvalidRailType(7)))
        );
    }

    #[test]
    fn blank_rail_is_missing() {
        let mut d = dto("1");
        d.destination_rail = "  ".into();
        assert_eq!(
            convert_row(&d),
            Err(ConversionError::MissingField("destinationRail"))
        );
    }

    #[test]
    fn convert_table_skips_bad_rows() {
        let mut bad = dto("1");
        bad.source_rail_type = Some(9);

        let table = convert_table(&[dto("1"), bad, dto("0")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].transaction_minimum, Decimal::ZERO);
    }
}
