//! Fixed user-facing strings for the panel surface.

/// Status labels, one per lifecycle phase.
pub const LABEL_RUNNING: &str = "运行中";
pub const LABEL_STOPPED: &str = "已停止";
pub const LABEL_STARTING: &str = "启动中...";
pub const LABEL_STOPPING: &str = "停止中...";

/// Prefixes prepended to the stringified bridge error in alerts.
pub const START_FAILED_PREFIX: &str = "启动失败: ";
pub const STOP_FAILED_PREFIX: &str = "停止失败: ";
pub const COPY_FAILED_PREFIX: &str = "复制失败: ";

/// Copy control resting label and its transient confirmation.
pub const COPY_LABEL: &str = "复制地址";
pub const COPIED_FEEDBACK: &str = "已复制!";

/// Address shown while the service is running.
pub const DEFAULT_SERVICE_ADDRESS: &str = "http://localhost:8080";
