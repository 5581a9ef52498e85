use crate::service_state::ServiceState;
use crate::text;

use serde::Serialize;

/// Style class for the status indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Running,
    Stopped,
    /// Transitional style, shared by Starting and Stopping.
    Starting,
}

impl Indicator {
    /// Class applied to the indicator element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Starting => "starting",
        }
    }
}

/// Everything the display surface needs to draw one status.
///
/// `address: None` means "leave the address field as it is" - transitional
/// states keep whatever the previous render put there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusProjection {
    pub indicator: Indicator,
    pub label: &'static str,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub address: Option<String>,
}

impl ServiceState {
    /// Rendering policy. Pure; the controller feeds it the configured
    /// display address.
    pub fn projection(self, address: &str) -> StatusProjection {
        match self {
            Self::Running => StatusProjection {
                indicator: Indicator::Running,
                label: text::LABEL_RUNNING,
                start_enabled: false,
                stop_enabled: true,
                address: Some(address.to_owned()),
            },
            Self::Stopped => StatusProjection {
                indicator: Indicator::Stopped,
                label: text::LABEL_STOPPED,
                start_enabled: true,
                stop_enabled: false,
                address: Some(String::new()),
            },
            Self::Starting => StatusProjection {
                indicator: Indicator::Starting,
                label: text::LABEL_STARTING,
                start_enabled: false,
                stop_enabled: false,
                address: None,
            },
            Self::Stopping => StatusProjection {
                indicator: Indicator::Starting,
                label: text::LABEL_STOPPING,
                start_enabled: false,
                stop_enabled: false,
                address: None,
            },
        }
    }
}
