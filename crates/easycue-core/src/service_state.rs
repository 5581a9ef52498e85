use serde_json::Value;

/// Lifecycle phase of the managed background service, as last reported
/// over the bridge.
///
/// The panel never infers transitions on its own: this is always whatever
/// the most recent `get_status` payload normalized to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceState {
    /// Service is not running.
    #[default]
    Stopped,
    /// Service is starting up.
    Starting,
    /// Service is running and reachable.
    Running,
    /// Service is shutting down.
    Stopping,
}

impl ServiceState {
    /// Normalize a raw bridge payload.
    ///
    /// The bridge reports either a bare status string (case-insensitive)
    /// or a tagged object with one truthy field among `Stopped`, `Running`,
    /// `Starting`, `Stopping`. Anything else, including tags the panel does
    /// not know about, degrades to [`ServiceState::Stopped`].
    pub fn from_payload(payload: &Value) -> Self {
        match payload {
            Value::String(name) => Self::from_name(name).unwrap_or_default(),
            Value::Object(fields) => [
                ("Stopped", Self::Stopped),
                ("Running", Self::Running),
                ("Starting", Self::Starting),
                ("Stopping", Self::Stopping),
            ]
            .into_iter()
            .find(|(tag, _)| fields.get(*tag).is_some_and(is_truthy))
            .map(|(_, state)| state)
            .unwrap_or_default(),
            _ => Self::Stopped,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "stopped" => Some(Self::Stopped),
            "starting" => Some(Self::Starting),
            "running" => Some(Self::Running),
            "stopping" => Some(Self::Stopping),
            _ => None,
        }
    }

    /// Canonical lowercase name, identical to the string form of the
    /// bridge payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
        }
    }
}

// Tag values are boolean-ish: hosts are allowed to mark a tag with `true`,
// a non-zero number, or a non-empty string.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
