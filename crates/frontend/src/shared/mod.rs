pub mod components;
pub mod format;
pub mod icons;

/// User-facing validation prompt, surfaced synchronously to the
/// submitting view. Never routed through the core.
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
