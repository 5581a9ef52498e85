//! Projection of controller output onto the Tauri surface.

use crate::tray::TrayManager;
use crate::{EVENT_COPY_LABEL, EVENT_PANEL_ALERT, EVENT_STATUS_CHANGED};

use std::sync::Arc;

use easycue_core::{StatusProjection, StatusView};
use tauri::{AppHandle, Emitter};
use tracing::warn;

/// Pushes every controller render to the webview and the tray.
pub struct PanelView {
    app: AppHandle,
    tray: Arc<TrayManager>,
}

impl PanelView {
    pub fn new(app: AppHandle, tray: Arc<TrayManager>) -> Self {
        Self { app, tray }
    }
}

impl StatusView for PanelView {
    fn render(&self, projection: &StatusProjection) {
        if let Err(e) = self.app.emit(EVENT_STATUS_CHANGED, projection) {
            warn!("Failed to emit status change: {e}");
        }
        self.tray.update_status(projection);
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.app.emit(EVENT_PANEL_ALERT, message) {
            warn!("Failed to emit alert: {e}");
        }
    }

    fn set_copy_label(&self, label: &str) {
        if let Err(e) = self.app.emit(EVENT_COPY_LABEL, label) {
            warn!("Failed to emit copy label: {e}");
        }
    }
}
