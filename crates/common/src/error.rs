use thiserror::Error;

/// Rejections produced when turning a [`SignalDraft`] into typed fields.
/// Messages match what the admin boundary reports to clients.
///
/// [`SignalDraft`]: crate::models::SignalDraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing fields")]
    MissingFields,
    #[error("Invalid date format")]
    InvalidDate,
}
