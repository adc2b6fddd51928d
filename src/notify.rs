//! Centralized error reporting.
//!
//! Every failed operation funnels through here: the error is written to the
//! diagnostic log and the user sees a danger-styled toast. This terminates
//! the error-handling chain; nothing is re-thrown and callers get no status
//! back.

use crate::constants::FALLBACK_ERROR_MESSAGE;
use crate::garden::ApiError;
use crate::ui::components::toast::{Severity, ToastManager};

/// Log an operation failure and surface it as a danger toast.
///
/// Errors without a usable message fall back to a generic text rather than
/// failing; this function never panics.
pub fn report_api_error(toasts: &mut ToastManager, error: &ApiError) {
    log::error!(target: "api", "API Error: {:?}", error);

    let message = error.to_string();
    let display = if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    };

    toasts.show(display, Severity::Danger);
}
