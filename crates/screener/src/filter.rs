use common::models::InstrumentQuote;

/// Screener results are capped at one display page.
pub const RESULT_LIMIT: usize = 10;

/// Criteria as submitted by the screener form. Absent or empty values impose
/// no constraint.
#[derive(Debug, Clone, Default)]
pub struct ScreenerQuery {
    pub exchange: Option<String>,
    pub sector: Option<String>,
    pub price_range: Option<String>,
}

/// Named half-open price intervals offered by the screener form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBracket {
    UnderFifty,
    FiftyToHundred,
    HundredToTwoHundred,
    TwoHundredToFiveHundred,
    FiveHundredToThousand,
    ThousandAndAbove,
}

impl PriceBracket {
    /// Labels exactly as the form sends them. Anything unrecognized is
    /// treated as "no price filter", not an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "$0.00-$49.99" => Some(Self::UnderFifty),
            "$50.00-$99.99" => Some(Self::FiftyToHundred),
            "$100.00-$199.99" => Some(Self::HundredToTwoHundred),
            "$200.00-$499.99" => Some(Self::TwoHundredToFiveHundred),
            "$500.00-$999.99" => Some(Self::FiveHundredToThousand),
            "$1000.00-Above" => Some(Self::ThousandAndAbove),
            _ => None,
        }
    }

    pub fn contains(self, price: f64) -> bool {
        match self {
            Self::UnderFifty => (0.0..50.0).contains(&price),
            Self::FiftyToHundred => (50.0..100.0).contains(&price),
            Self::HundredToTwoHundred => (100.0..200.0).contains(&price),
            Self::TwoHundredToFiveHundred => (200.0..500.0).contains(&price),
            Self::FiveHundredToThousand => (500.0..1000.0).contains(&price),
            Self::ThousandAndAbove => price >= 1000.0,
        }
    }
}

/// Applies the criteria with logical AND, keeping catalog order, and returns
/// at most [`RESULT_LIMIT`] matches. Pure: the catalog is never touched.
pub fn filter(catalog: &[InstrumentQuote], query: &ScreenerQuery) -> Vec<InstrumentQuote> {
    let exchange = non_empty(query.exchange.as_deref());
    let sector = non_empty(query.sector.as_deref());
    let bracket = non_empty(query.price_range.as_deref()).and_then(PriceBracket::from_label);

    catalog
        .iter()
        .filter(|q| exchange.is_none_or(|e| q.exchange == e))
        .filter(|q| sector.is_none_or(|s| q.sector == s))
        .filter(|q| bracket.is_none_or(|b| b.contains(q.price)))
        .take(RESULT_LIMIT)
        .cloned()
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
