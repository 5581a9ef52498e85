//! Service process lifecycle behind the panel bridge.

use crate::config::ServiceSettings;
use crate::service::{ServiceError, ServiceResult, ServiceStatus};

use std::panic::Location;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use easycue_core::{BridgeError, BridgeResult, ServiceBridge};
use error_location::ErrorLocation;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{info, warn};

/// Interval between readiness probes while the service is starting.
const PROBE_INTERVAL: Duration = Duration::from_millis(200);

/// Interval between exit polls while waiting for a graceful stop.
const REAP_INTERVAL: Duration = Duration::from_millis(100);

/// Launches and stops the managed service process and reports its phase.
///
/// The panel treats this as an opaque capability: everything it learns
/// comes back through `get_status` as JSON.
///
/// Lock order is always child before status.
pub struct ServiceSupervisor {
    settings: ServiceSettings,
    probe: reqwest::Client,
    child: Arc<Mutex<Option<Child>>>,
    status: Arc<Mutex<ServiceStatus>>,
}

impl ServiceSupervisor {
    /// Create a supervisor for the configured service.
    pub fn new(settings: ServiceSettings) -> Self {
        let probe = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .pool_max_idle_per_host(1)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            settings,
            probe,
            child: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(ServiceStatus::Stopped)),
        }
    }

    /// Current phase.
    ///
    /// Reaps a child that exited on its own so the panel does not keep
    /// reporting a dead process.
    pub async fn status(&self) -> ServiceStatus {
        let mut child = self.child.lock().await;
        if let Some(process) = child.as_mut() {
            match process.try_wait() {
                Ok(Some(exit)) => {
                    warn!("Service process exited on its own: {exit}");
                    *child = None;
                    *self.status.lock().await = ServiceStatus::Stopped;
                }
                Ok(None) => {}
                Err(e) => warn!("Failed to poll service process: {e}"),
            }
        }
        drop(child);

        self.status.lock().await.clone()
    }

    /// Start the service process. Already running or starting is a no-op.
    pub async fn start(&self) -> ServiceResult<()> {
        {
            let status = self.status.lock().await;
            if matches!(*status, ServiceStatus::Running | ServiceStatus::Starting) {
                info!("Service already {:?}, ignoring start", *status);
                return Ok(());
            }
        }

        *self.status.lock().await = ServiceStatus::Starting;

        let mut command = Command::new(&self.settings.command);
        command
            .args(&self.settings.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                *self.status.lock().await = ServiceStatus::Error(e.to_string());
                return Err(ServiceError::ProcessSpawn {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        info!("Spawned service process (PID: {})", child.id());
        *self.child.lock().await = Some(child);

        self.spawn_readiness_probe();
        Ok(())
    }

    /// Poll the service address until it answers, then flip Starting to
    /// Running. Gives up after the configured startup timeout.
    fn spawn_readiness_probe(&self) {
        let status = Arc::clone(&self.status);
        let probe = self.probe.clone();
        let address = self.settings.address.clone();
        let timeout = Duration::from_secs(self.settings.startup_timeout_secs);

        tokio::spawn(async move {
            let deadline = Instant::now() + timeout;

            while Instant::now() < deadline {
                tokio::time::sleep(PROBE_INTERVAL).await;

                // A stop or crash during startup wins; leave its status alone.
                if !matches!(*status.lock().await, ServiceStatus::Starting) {
                    return;
                }

                if probe.get(&address).send().await.is_ok() {
                    info!("Service answering at {address}");
                    let mut status = status.lock().await;
                    if matches!(*status, ServiceStatus::Starting) {
                        *status = ServiceStatus::Running;
                    }
                    return;
                }
            }

            let mut status = status.lock().await;
            if matches!(*status, ServiceStatus::Starting) {
                warn!("Service did not answer within {}s", timeout.as_secs());
                *status = ServiceStatus::Error(format!(
                    "service did not become ready within {}s",
                    timeout.as_secs()
                ));
            }
        });
    }

    /// Stop the service process: polite signal first, forced kill after the
    /// shutdown timeout. Not running is a no-op.
    pub async fn stop(&self) -> ServiceResult<()> {
        let mut guard = self.child.lock().await;
        let Some(mut child) = guard.take() else {
            info!("Service not running, ignoring stop");
            return Ok(());
        };
        drop(guard);

        *self.status.lock().await = ServiceStatus::Stopping;

        let timeout = Duration::from_secs(self.settings.shutdown_timeout_secs);
        if let Err(e) = Self::terminate(&mut child, timeout).await {
            *self.status.lock().await = ServiceStatus::Error(e.to_string());
            return Err(e);
        }

        *self.status.lock().await = ServiceStatus::Stopped;
        info!("Service stopped");
        Ok(())
    }

    #[cfg(unix)]
    async fn terminate(child: &mut Child, timeout: Duration) -> ServiceResult<()> {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        let pid = Pid::from_raw(child.id() as i32);
        info!("Sending SIGTERM to pid {pid}");
        kill(pid, Signal::SIGTERM).ok();

        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            match child.try_wait() {
                Ok(Some(_)) => return Ok(()),
                Ok(None) => tokio::time::sleep(REAP_INTERVAL).await,
                Err(e) => return Err(kill_error(e)),
            }
        }

        info!("Force killing service process (PID: {})", child.id());
        child.kill().map_err(kill_error)?;
        child.wait().map_err(kill_error)?;
        Ok(())
    }

    #[cfg(not(unix))]
    async fn terminate(child: &mut Child, _timeout: Duration) -> ServiceResult<()> {
        info!("Killing service process (PID: {})", child.id());
        child.kill().map_err(kill_error)?;
        child.wait().map_err(kill_error)?;
        Ok(())
    }
}

#[track_caller]
fn kill_error(source: std::io::Error) -> ServiceError {
    ServiceError::ProcessKill {
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl ServiceBridge for ServiceSupervisor {
    async fn get_status(&self) -> BridgeResult<Value> {
        serde_json::to_value(self.status().await).map_err(|e| BridgeError::new(e.to_string()))
    }

    async fn start_service(&self) -> BridgeResult<()> {
        self.start().await.map_err(|e| BridgeError::new(e.to_string()))
    }

    async fn stop_service(&self) -> BridgeResult<()> {
        self.stop().await.map_err(|e| BridgeError::new(e.to_string()))
    }

    async fn copy_address(&self) -> BridgeResult<String> {
        let address = self.settings.address.clone();
        let copied = address.clone();

        // arboard is blocking; keep it off the async workers.
        tokio::task::spawn_blocking(move || -> Result<(), String> {
            let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
            clipboard.set_text(copied).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| BridgeError::new(e.to_string()))?
        .map_err(BridgeError::new)?;

        Ok(address)
    }
}
