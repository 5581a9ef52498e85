use serde::Serialize;

/// Lifecycle phase reported over the panel bridge.
///
/// Crosses the bridge with serde's external tagging: unit variants as bare
/// strings (`"Stopped"`), the error variant as `{"Error": reason}`. The
/// panel normalizes either shape and treats unknown tags as stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ServiceStatus {
    /// Service is not running
    Stopped,
    /// Process spawned, address not answering yet
    Starting,
    /// Service is up and reachable
    Running,
    /// Shutdown in progress
    Stopping,
    /// Last start or stop attempt failed
    Error(String),
}
