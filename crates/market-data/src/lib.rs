// In crates/market-data/src/lib.rs

use std::path::Path;

use core_types::{Error, PriceRow, PriceSeries, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

/// The only column downstream stages require.
pub const CLOSE_COLUMN: &str = "close";

/// Loads a delimited price file with a header row.
///
/// Every column is kept as text on the row; `close` is parsed to `f64`.
/// Checks run in order: the file exists, it parses, it has at least one
/// data row, it has a `close` column, and every close value is numeric.
pub fn load_price_series(path: impl AsRef<Path>) -> Result<PriceSeries> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound {
            what: "Input file",
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(invalid_format)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(invalid_format)?
        .iter()
        .map(String::from)
        .collect();

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, _>>()
        .map_err(invalid_format)?;

    if columns.is_empty() || records.is_empty() {
        return Err(Error::EmptyData("Input CSV file is empty".to_string()));
    }

    let close_idx = columns
        .iter()
        .position(|c| c == CLOSE_COLUMN)
        .ok_or_else(|| {
            Error::MissingField(format!(
                "Required column '{CLOSE_COLUMN}' not found in input data"
            ))
        })?;

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_row(record, close_idx, i + 1))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(rows = rows.len(), "Data loaded");
    Ok(PriceSeries::new(columns, rows))
}

fn parse_row(record: &StringRecord, close_idx: usize, line: usize) -> Result<PriceRow> {
    let raw = record.get(close_idx).unwrap_or_default();
    // `f64::from_str` also accepts "nan" and "inf"; neither is a price.
    let close = raw
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())
        .ok_or_else(|| Error::Format(format!("Invalid close value {raw:?} on data row {line}")))?;
    Ok(PriceRow::new(close, record.iter().map(String::from).collect()))
}

fn invalid_format(err: csv::Error) -> Error {
    Error::Format(format!("Invalid CSV file format: {err}"))
}
