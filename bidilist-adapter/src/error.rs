use alloc::string::String;

/// Error returned by a caller-supplied loader future.
///
/// The driver logs it and reports the load as failed; it never propagates further.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("load failed: {0}")]
    Failed(String),
    #[error("load was cancelled before it settled")]
    Cancelled,
}

impl LoadError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
