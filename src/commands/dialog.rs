//! Browser dialogs and console output

use leptos::prelude::window;
use wasm_bindgen::JsValue;

/// Blocking alert
pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

/// Blocking yes/no dialog; a dialog failure counts as "no"
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
