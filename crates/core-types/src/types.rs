// In crates/core-types/src/types.rs

/// The binary position indicator derived for each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    /// Price at or below its trailing average, or not enough history yet.
    #[default]
    Flat,
    /// Price strictly above its trailing average.
    Long,
}

impl Signal {
    pub fn as_u8(self) -> u8 {
        match self {
            Signal::Flat => 0,
            Signal::Long => 1,
        }
    }

    pub fn is_long(self) -> bool {
        self == Signal::Long
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal.as_u8()
    }
}

/// One bar of input data. `fields` holds every original column as text,
/// in header order; `close` is the parsed closing price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub close: f64,
    pub fields: Vec<String>,
}

impl PriceRow {
    pub fn new(close: f64, fields: Vec<String>) -> Self {
        Self { close, fields }
    }
}

/// An ordered price series. Row order is time order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    columns: Vec<String>,
    rows: Vec<PriceRow>,
}

impl PriceSeries {
    pub fn new(columns: Vec<String>, rows: Vec<PriceRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row after the rolling-mean stage. `rolling_mean` is `None` until a
/// full window of history exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedRow {
    pub price: PriceRow,
    pub rolling_mean: Option<f64>,
}

/// A row after signal generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRow {
    pub price: PriceRow,
    pub rolling_mean: Option<f64>,
    pub signal: Signal,
}
