//! System tray with status line and service controls.

use crate::PanelController;
use crate::service::ServiceSupervisor;

use std::sync::Arc;

use easycue_core::{ServiceState, StatusProjection, text};
use tauri::{
    Manager, Wry,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent},
};

const TOOLTIP: &str = "EasyCue - PromptX Client";

/// Manages the system tray and its status line.
pub struct TrayManager {
    tray: TrayIcon<Wry>,
    status_item: MenuItem<Wry>,
}

impl TrayManager {
    /// Create and set up the system tray.
    pub fn setup(app: &tauri::App) -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        // Create menu items
        let show_item = MenuItem::with_id(app, "show", "显示窗口", true, None::<&str>)?;
        let status_item =
            MenuItem::with_id(app, "status", text::LABEL_STOPPED, false, None::<&str>)?;
        let separator1 = PredefinedMenuItem::separator(app)?;
        let toggle_item = MenuItem::with_id(app, "toggle", "启动/停止", true, None::<&str>)?;
        let copy_item = MenuItem::with_id(app, "copy", text::COPY_LABEL, true, None::<&str>)?;
        let separator2 = PredefinedMenuItem::separator(app)?;
        let quit_item = MenuItem::with_id(app, "quit", "退出", true, None::<&str>)?;

        // Build menu
        let menu = Menu::with_items(
            app,
            &[
                &show_item,
                &status_item,
                &separator1,
                &toggle_item,
                &copy_item,
                &separator2,
                &quit_item,
            ],
        )?;

        // Create tray icon
        let tray = TrayIconBuilder::new()
            .menu(&menu)
            .tooltip(TOOLTIP)
            .show_menu_on_left_click(false)
            .on_menu_event(move |app, event| match event.id.as_ref() {
                "show" => {
                    if let Some(window) = app.get_webview_window("main") {
                        window.show().ok();
                        window.set_focus().ok();
                    }
                }
                "toggle" => {
                    let app_handle = app.clone();
                    tauri::async_runtime::spawn(async move {
                        if let Some(controller) = app_handle.try_state::<Arc<PanelController>>() {
                            // Start when idle, stop when running
                            match controller.current() {
                                ServiceState::Running => controller.stop().await,
                                _ => controller.start().await,
                            }
                        }
                    });
                }
                "copy" => {
                    let app_handle = app.clone();
                    tauri::async_runtime::spawn(async move {
                        if let Some(controller) = app_handle.try_state::<Arc<PanelController>>() {
                            controller.copy_address().await;
                        }
                    });
                }
                "quit" => {
                    let app_handle = app.clone();
                    tauri::async_runtime::spawn(async move {
                        if let Some(supervisor) = app_handle.try_state::<Arc<ServiceSupervisor>>() {
                            let _ = supervisor.stop().await;
                        }
                        app_handle.exit(0);
                    });
                }
                _ => {}
            })
            .on_tray_icon_event(|tray, event| {
                // Show window on left click
                if let TrayIconEvent::Click {
                    button: MouseButton::Left,
                    button_state: MouseButtonState::Up,
                    ..
                } = event
                {
                    if let Some(window) = tray.app_handle().get_webview_window("main") {
                        window.show().ok();
                        window.set_focus().ok();
                    }
                }
            })
            .build(app.app_handle())?;

        Ok(Arc::new(Self { tray, status_item }))
    }

    /// Track the rendered status on the menu line and tooltip.
    pub fn update_status(&self, projection: &StatusProjection) {
        if let Err(e) = self.status_item.set_text(projection.label) {
            tracing::debug!("Tray status text update failed: {e}");
        }
        let tooltip = format!("{TOOLTIP} - {}", projection.label);
        if let Err(e) = self.tray.set_tooltip(Some(&tooltip)) {
            tracing::debug!("Tray tooltip update failed: {e}");
        }
    }
}
