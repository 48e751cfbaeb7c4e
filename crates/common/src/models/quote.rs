use serde::{Deserialize, Serialize};

/// One row of screener data: a snapshot quote for a listed instrument.
/// Read-only; the screener never mutates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentQuote {
    pub exchange: String,
    pub sector: String,
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
    pub high: f64,
    pub low: f64,
}
