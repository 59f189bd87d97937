//! Console art for the curious who open devtools.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn ascii_logo() -> &'static str {
    r#"
   ____                     __      _
  / ___| __ _ _ __ ___   ___/_/_ __(_) ___
 | |  _ / _` | '_ ` _ \ / _ \ '__| |/ _ \
 | |_| | (_| | | | | | |  __/ |  | |  __/
  \____|\__,_|_| |_| |_|\___|_|  |_|\___|
"#
}

#[component]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{}", ascii_logo())),
            &JsValue::from_str("color: #4ade80; font-family: monospace; font-weight: bold;"),
        );

        web_sys::console::log_2(
            &JsValue::from_str("%cYour gaming universe, unified."),
            &JsValue::from_str("color: #c084fc; font-weight: bold;"),
        );

        web_sys::console::log_2(
            &JsValue::from_str("%c(^_^) [join] Scroll up, drop your email, claim your spot."),
            &JsValue::from_str("color: #888;"),
        );
    });
}
