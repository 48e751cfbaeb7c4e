//! Static demo data for the performance view. Presentation fixtures only;
//! nothing here touches the signal store.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ClosedSignalReport {
    pub stock: &'static str,
    pub bought: f64,
    pub sold: f64,
    pub gain: f64,
    pub sent: &'static str,
    pub closed: &'static str,
    pub sector: &'static str,
}

pub const MARKET_REPORT: &str = "Market Close Report: NASDAQ Composite Index 22,670.08 +148.38 (+0.66%) | Total Shares Traded: over 4.56 billion | Declining stocks led advancers by 1.32 to 1 ratio. There were 1,886 advancers and 2,547 decliners for the day. After hours most active for Oct 16, 2025: NVDA, OXY, CSX, GRA.";

pub fn sample_closed_signals() -> Vec<ClosedSignalReport> {
    let rows = [
        ("FSLR", 233.37, 240.37, "10-15-2025", "10-15-2025", "Financial Banks"),
        ("TPR", 114.28, 117.71, "10-06-2025", "10-15-2025", "Consumer Non-Durables"),
        ("SO", 95.89, 98.77, "10-08-2025", "10-14-2025", "Public Utilities"),
        ("MLM", 623.23, 641.93, "09-30-2025", "10-13-2025", "Non-Energy Minerals"),
        ("GEV", 362.50, 373.21, "10-05-2025", "10-15-2025", "Producer Manufacturing"),
        ("ORCL", 198.78, 204.74, "10-09-2025", "10-13-2025", "Technology Services"),
        ("EL", 93.22, 96.02, "10-28-2025", "10-08-2025", "Consumer Non-Durables"),
        ("SO", 95.36, 98.37, "10-24-2025", "10-07-2025", "Consumer Services"),
        ("PPL", 36.38, 37.47, "04-29-2025", "10-07-2025", "Utilities"),
        ("AEP", 114.40, 117.83, "08-22-2025", "10-07-2025", "Utilities"),
    ];

    rows.into_iter()
        .map(
            |(stock, bought, sold, sent, closed, sector)| ClosedSignalReport {
                stock,
                bought,
                sold,
                gain: 3.0,
                sent,
                closed,
                sector,
            },
        )
        .collect()
}
