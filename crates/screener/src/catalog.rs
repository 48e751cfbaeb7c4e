//! Demo catalog the screener filters over. Stands in for a live feed; the
//! filter only ever sees a quote slice, so swapping in a real source is a
//! matter of building the same `Vec`.

use common::models::InstrumentQuote;

pub fn mock_catalog() -> Vec<InstrumentQuote> {
    vec![
        quote("NYSE", "Healthcare", "ABBV", 162.22, -1.27, 162.85, 162.32),
        quote("NYSE", "Healthcare", "BIO", 306.77, 0.28, 310.69, 306.10),
        quote("NYSE", "Healthcare", "BIIB", 197.40, 0.0, 197.40, 197.40),
        quote("NYSE", "Healthcare", "CHE", 546.29, -0.19, 549.62, 543.29),
        quote("NYSE", "Healthcare", "CI", 324.57, -2.5, 330.17, 324.08),
        quote("NYSE", "Healthcare", "COR", 319.61, 0.59, 320.37, 318.26),
        quote("NYSE", "Healthcare", "DHR", 206.10, -0.29, 209.52, 204.44),
        quote("NYSE", "Healthcare", "ELV", 394.49, -0.20, 398.28, 392.73),
        quote("NYSE", "Healthcare", "HCA", 420.25, 0.40, 424.41, 419.49),
        quote("NYSE", "Healthcare", "HUM", 502.17, 0.21, 506.51, 502.69),
        quote("NASDAQ", "Technology", "AAPL", 150.25, 1.20, 152.00, 149.50),
        quote("NASDAQ", "Financial", "JPM", 210.75, -0.50, 212.00, 210.00),
        quote("NYSE", "Financial", "BAC", 45.30, 0.80, 46.00, 44.90),
    ]
}

fn quote(
    exchange: &str,
    sector: &str,
    symbol: &str,
    price: f64,
    change_pct: f64,
    high: f64,
    low: f64,
) -> InstrumentQuote {
    InstrumentQuote {
        exchange: exchange.to_string(),
        sector: sector.to_string(),
        symbol: symbol.to_string(),
        price,
        change_pct,
        high,
        low,
    }
}
