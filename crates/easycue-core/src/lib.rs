//! EasyCue Core Library
//!
//! The status-polling state machine behind the EasyCue control panel.
//! Everything here is UI-runtime free: [`StatusController`] polls a
//! [`ServiceBridge`], normalizes whatever the bridge reports into a
//! [`ServiceState`], and projects the result onto a [`StatusView`]. The
//! desktop shell (Tauri window, tray, webview) lives in the `easycue`
//! crate and only supplies the two trait implementations.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use easycue_core::{
//!     BridgeResult, ServiceBridge, StatusController, StatusProjection, StatusView,
//! };
//! use serde_json::{Value, json};
//!
//! struct FixedBridge;
//!
//! #[async_trait]
//! impl ServiceBridge for FixedBridge {
//!     async fn get_status(&self) -> BridgeResult<Value> {
//!         Ok(json!("running"))
//!     }
//!     async fn start_service(&self) -> BridgeResult<()> {
//!         Ok(())
//!     }
//!     async fn stop_service(&self) -> BridgeResult<()> {
//!         Ok(())
//!     }
//!     async fn copy_address(&self) -> BridgeResult<String> {
//!         Ok("http://localhost:8080".into())
//!     }
//! }
//!
//! struct ConsoleView;
//!
//! impl StatusView for ConsoleView {
//!     fn render(&self, projection: &StatusProjection) {
//!         println!("{}", projection.label);
//!     }
//!     fn alert(&self, message: &str) {
//!         eprintln!("{message}");
//!     }
//!     fn set_copy_label(&self, label: &str) {
//!         println!("{label}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = Arc::new(StatusController::new(
//!         Arc::new(FixedBridge),
//!         Arc::new(ConsoleView),
//!     ));
//!     tokio::spawn(controller.clone().poll_loop());
//!     controller.start().await;
//! }
//! ```

mod bridge;
mod controller;
mod projection;
mod service_state;
pub mod text;
mod view;

pub use {
    bridge::{BridgeError, BridgeResult, ServiceBridge},
    controller::{ACTION_REFRESH_DELAY, COPY_FEEDBACK_DURATION, POLL_INTERVAL, StatusController},
    projection::{Indicator, StatusProjection},
    service_state::ServiceState,
    view::StatusView,
};

#[cfg(test)]
mod tests;
