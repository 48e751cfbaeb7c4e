pub mod quote;
pub mod signal;

pub use quote::InstrumentQuote;
pub use signal::{Signal, SignalDraft, SignalFields};
