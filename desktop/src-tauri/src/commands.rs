//! Tauri IPC commands for the panel frontend.

use crate::PanelController;

use std::sync::Arc;

use easycue_core::StatusProjection;
use tauri::State;
use tracing::info;

/// Called by the webview once its event listeners are registered.
///
/// Returns the current projection so the panel renders without waiting
/// for the next poll. The handshake is race-free: the frontend subscribes
/// to `service-status-changed` first, then asks.
#[tauri::command]
pub async fn panel_ready(
    controller: State<'_, Arc<PanelController>>,
) -> Result<StatusProjection, String> {
    info!("Panel ready notification received");
    Ok(controller.current_projection())
}

/// Start the managed service.
///
/// Failures surface through the `panel-alert` event, not the command
/// result.
#[tauri::command]
pub async fn start_service(controller: State<'_, Arc<PanelController>>) -> Result<(), String> {
    controller.start().await;
    Ok(())
}

/// Stop the managed service.
#[tauri::command]
pub async fn stop_service(controller: State<'_, Arc<PanelController>>) -> Result<(), String> {
    controller.stop().await;
    Ok(())
}

/// Copy the service address to the system clipboard.
#[tauri::command]
pub async fn copy_address(controller: State<'_, Arc<PanelController>>) -> Result<(), String> {
    controller.copy_address().await;
    Ok(())
}
