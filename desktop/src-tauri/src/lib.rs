mod commands;
mod config;
mod logging;
mod service;
mod tray;
mod view;

use config::PanelConfig;
use logging::setup_logging;
use service::ServiceSupervisor;
use tray::TrayManager;
use view::PanelView;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use easycue_core::StatusController;
use tauri::Manager;
use tracing::{error, info};

/// Controller wired to the production bridge and view.
pub(crate) type PanelController = StatusController<ServiceSupervisor, PanelView>;

// Tauri event names (must match the frontend listeners)
pub(crate) const EVENT_STATUS_CHANGED: &str = "service-status-changed";
pub(crate) const EVENT_PANEL_ALERT: &str = "panel-alert";
pub(crate) const EVENT_COPY_LABEL: &str = "copy-label-changed";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            // Focus existing window on second instance attempt
            if let Some(window) = app.get_webview_window("main") {
                window.show().ok();
                window.set_focus().ok();
            }
        }))
        .setup(|app| {
            let data_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;

            let config =
                PanelConfig::load_or_create(&data_dir).map_err(|e| format!("Config error: {e}"))?;

            setup_logging(&data_dir, &config.logging)?;

            info!("Starting EasyCue v{}", env!("CARGO_PKG_VERSION"));
            info!("Data directory: {:?}", data_dir);
            info!("Service command: {}", config.service.command);

            let supervisor = Arc::new(ServiceSupervisor::new(config.service.clone()));
            app.manage(supervisor.clone());

            // Setup system tray with TrayManager
            let tray_manager = TrayManager::setup(app)?;

            let view = Arc::new(PanelView::new(app.handle().clone(), tray_manager));
            let controller = Arc::new(StatusController::with_display_address(
                supervisor.clone(),
                view,
                config.service.address.clone(),
            ));
            app.manage(controller.clone());

            // Stop the service on SIGINT/SIGTERM so a ctrl-c in a terminal
            // doesn't leave it orphaned.
            #[cfg(unix)]
            {
                let supervisor = supervisor.clone();
                std::thread::spawn(move || {
                    use signal_hook::consts::{SIGINT, SIGTERM};
                    use signal_hook::iterator::Signals;

                    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
                        Ok(s) => s,
                        Err(e) => {
                            error!("Failed to register signal handlers: {e}");
                            return;
                        }
                    };

                    if let Some(sig) = signals.forever().next() {
                        info!("Received signal {sig}, shutting down...");
                        tauri::async_runtime::block_on(async {
                            if let Err(e) = supervisor.stop().await {
                                error!("Failed to stop service on signal: {e}");
                            }
                        });
                        std::process::exit(0);
                    }
                });
            }

            // Background poll for the lifetime of the view
            tauri::async_runtime::spawn(controller.clone().poll_loop());

            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::CloseRequested { api, .. } = event {
                // Hide to tray instead of closing
                window.hide().ok();
                api.prevent_close();
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::panel_ready,
            commands::start_service,
            commands::stop_service,
            commands::copy_address,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| {
            use tauri::RunEvent;

            if let RunEvent::ExitRequested { api, code, .. } = event {
                info!("Exit requested (code: {:?})", code);
                api.prevent_exit();

                let app_handle = app_handle.clone();
                tauri::async_runtime::block_on(async move {
                    if let Some(supervisor) = app_handle.try_state::<Arc<ServiceSupervisor>>() {
                        info!("Stopping service before exit...");
                        match supervisor.stop().await {
                            Ok(()) => info!("Service stopped"),
                            Err(e) => error!("Failed to stop service: {e}"),
                        }
                    }
                });

                std::process::exit(code.unwrap_or(0));
            }
        });
}
