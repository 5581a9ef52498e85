use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Opaque failure reported by a bridge operation.
///
/// The bridge may fail with an arbitrary payload; the panel only ever
/// stringifies it into an alert, so the payload is carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BridgeError(String);

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<String> for BridgeError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// The remote capability surface exposed by the host shell.
///
/// Operations are asynchronous and may fail with an arbitrary error value.
/// `get_status` intentionally yields raw JSON: payload shapes differ by
/// host and are normalized by `ServiceState::from_payload`.
#[async_trait]
pub trait ServiceBridge: Send + Sync + 'static {
    /// Report the service's current lifecycle phase.
    async fn get_status(&self) -> BridgeResult<Value>;

    /// Ask the host to start the managed service.
    async fn start_service(&self) -> BridgeResult<()>;

    /// Ask the host to stop the managed service.
    async fn stop_service(&self) -> BridgeResult<()>;

    /// Place the service address on the system clipboard and return it.
    async fn copy_address(&self) -> BridgeResult<String>;
}
