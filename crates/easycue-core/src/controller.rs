//! The status-polling controller.

use crate::bridge::ServiceBridge;
use crate::projection::StatusProjection;
use crate::service_state::ServiceState;
use crate::text;
use crate::view::StatusView;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

/// Cadence of the unconditional background poll.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Delay before the one-shot poll that follows a start/stop action, giving
/// the backend transition time to settle.
pub const ACTION_REFRESH_DELAY: Duration = Duration::from_millis(500);

/// How long the copy control shows its confirmation label.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1000);

/// Polls the bridge and projects the reported status onto the view.
///
/// The controller owns the only mutable state of the panel: the last
/// normalized [`ServiceState`], kept in a watch channel so the shell can
/// follow transitions. Authoritative state lives on the other side of the
/// bridge; the controller observes and renders, it never enforces
/// transition legality.
pub struct StatusController<B, V> {
    bridge: Arc<B>,
    view: Arc<V>,
    display_address: String,
    state_tx: watch::Sender<ServiceState>,
    state_rx: watch::Receiver<ServiceState>,
}

impl<B, V> StatusController<B, V>
where
    B: ServiceBridge,
    V: StatusView,
{
    /// Create a controller using the default display address.
    pub fn new(bridge: Arc<B>, view: Arc<V>) -> Self {
        Self::with_display_address(bridge, view, text::DEFAULT_SERVICE_ADDRESS)
    }

    /// Create a controller showing `address` while the service is running.
    pub fn with_display_address(
        bridge: Arc<B>,
        view: Arc<V>,
        address: impl Into<String>,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(ServiceState::default());
        Self {
            bridge,
            view,
            display_address: address.into(),
            state_tx,
            state_rx,
        }
    }

    /// Last normalized state.
    pub fn current(&self) -> ServiceState {
        *self.state_rx.borrow()
    }

    /// Projection of the last normalized state.
    pub fn current_projection(&self) -> StatusProjection {
        self.current().projection(&self.display_address)
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ServiceState> {
        self.state_rx.clone()
    }

    /// Poll the bridge once and re-render.
    ///
    /// A failed call is logged and swallowed; the view keeps showing the
    /// previous state.
    pub async fn refresh_status(&self) {
        Self::refresh(
            &self.bridge,
            &self.view,
            &self.state_tx,
            &self.display_address,
        )
        .await;
    }

    /// Run the background poll for the lifetime of the task. The first
    /// tick fires immediately.
    pub async fn poll_loop(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        loop {
            ticker.tick().await;
            // Every poll runs as its own task: a slow bridge call must not
            // hold up the next tick, and the last response to arrive wins
            // the display.
            self.schedule_refresh(Duration::ZERO);
        }
    }

    /// Start the service. On failure the view gets a blocking alert; on
    /// success a single delayed poll picks up the transition.
    pub async fn start(&self) {
        match self.bridge.start_service().await {
            Ok(()) => {
                debug!("start_service accepted");
                self.schedule_refresh(ACTION_REFRESH_DELAY);
            }
            Err(e) => {
                warn!("start_service failed: {e}");
                self.view
                    .alert(&format!("{}{e}", text::START_FAILED_PREFIX));
            }
        }
    }

    /// Stop the service. Mirrors [`StatusController::start`].
    pub async fn stop(&self) {
        match self.bridge.stop_service().await {
            Ok(()) => {
                debug!("stop_service accepted");
                self.schedule_refresh(ACTION_REFRESH_DELAY);
            }
            Err(e) => {
                warn!("stop_service failed: {e}");
                self.view.alert(&format!("{}{e}", text::STOP_FAILED_PREFIX));
            }
        }
    }

    /// Copy the service address and flash the confirmation label.
    pub async fn copy_address(&self) {
        match self.bridge.copy_address().await {
            Ok(address) => {
                debug!("address copied: {address}");
                self.view.set_copy_label(text::COPIED_FEEDBACK);
                let view = Arc::clone(&self.view);
                tokio::spawn(async move {
                    tokio::time::sleep(COPY_FEEDBACK_DURATION).await;
                    view.set_copy_label(text::COPY_LABEL);
                });
            }
            Err(e) => {
                warn!("copy_address failed: {e}");
                self.view.alert(&format!("{}{e}", text::COPY_FAILED_PREFIX));
            }
        }
    }

    /// Launch one poll after `delay`, independent of the periodic ticker.
    fn schedule_refresh(&self, delay: Duration) {
        let bridge = Arc::clone(&self.bridge);
        let view = Arc::clone(&self.view);
        let state_tx = self.state_tx.clone();
        let address = self.display_address.clone();

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Self::refresh(&bridge, &view, &state_tx, &address).await;
        });
    }

    async fn refresh(
        bridge: &Arc<B>,
        view: &Arc<V>,
        state_tx: &watch::Sender<ServiceState>,
        address: &str,
    ) {
        match bridge.get_status().await {
            Ok(payload) => {
                let state = ServiceState::from_payload(&payload);
                let _ = state_tx.send(state);
                view.render(&state.projection(address));
            }
            Err(e) => warn!("status refresh failed: {e}"),
        }
    }
}
