use crate::projection::StatusProjection;

/// The display surface the controller projects onto.
///
/// Implementations must be cheap and non-blocking: `render` runs on every
/// poll. `alert` carries the blocking-until-dismissed contract; by the time
/// the user dismisses it the controller has already returned to idle, so
/// implementations decide how modal to be.
pub trait StatusView: Send + Sync + 'static {
    /// Apply one projected status to the indicator, label, controls and
    /// address field.
    fn render(&self, projection: &StatusProjection);

    /// Surface a user-visible error for a failed start/stop/copy action.
    fn alert(&self, message: &str);

    /// Swap the copy control's label (transient confirmation).
    fn set_copy_label(&self, label: &str);
}
