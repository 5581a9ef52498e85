mod service_state;

use crate::{BridgeResult, ServiceBridge, StatusProjection, StatusView};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

/// Bridge whose responses are scripted per operation.
pub(crate) struct ScriptedBridge {
    pub(crate) status: Mutex<BridgeResult<Value>>,
    pub(crate) start: Mutex<BridgeResult<()>>,
    pub(crate) stop: Mutex<BridgeResult<()>>,
    pub(crate) copy: Mutex<BridgeResult<String>>,
    status_calls: AtomicUsize,
}

impl ScriptedBridge {
    pub(crate) fn reporting(status: Value) -> Arc<Self> {
        Arc::new(Self {
            status: Mutex::new(Ok(status)),
            start: Mutex::new(Ok(())),
            stop: Mutex::new(Ok(())),
            copy: Mutex::new(Ok("http://localhost:8080".into())),
            status_calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServiceBridge for ScriptedBridge {
    async fn get_status(&self) -> BridgeResult<Value> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status.lock().unwrap().clone()
    }

    async fn start_service(&self) -> BridgeResult<()> {
        self.start.lock().unwrap().clone()
    }

    async fn stop_service(&self) -> BridgeResult<()> {
        self.stop.lock().unwrap().clone()
    }

    async fn copy_address(&self) -> BridgeResult<String> {
        self.copy.lock().unwrap().clone()
    }
}

/// View that records everything the controller pushes at it.
#[derive(Default)]
pub(crate) struct RecordingView {
    pub(crate) rendered: Mutex<Vec<StatusProjection>>,
    pub(crate) alerts: Mutex<Vec<String>>,
    pub(crate) copy_labels: Mutex<Vec<String>>,
}

impl RecordingView {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn last_rendered(&self) -> Option<StatusProjection> {
        self.rendered.lock().unwrap().last().cloned()
    }

    pub(crate) fn render_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }
}

impl StatusView for RecordingView {
    fn render(&self, projection: &StatusProjection) {
        self.rendered.lock().unwrap().push(projection.clone());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }

    fn set_copy_label(&self, label: &str) {
        self.copy_labels.lock().unwrap().push(label.to_owned());
    }
}

/// Let tasks the controller spawned run to their next await point.
pub(crate) async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
