//! Build-time site settings and the bits of the document the page needs
//! before mounting.

use gamerie_core::config::{
    ENV_DISCORD_INVITE, ENV_HOSTED_FORM_ACTION, ENV_PRIVACY, ENV_TERMS, SiteConfig,
};
use gamerie_page::PageConfig;
use gamerie_page::styles::PAGE_CSS;

const THANK_YOU_PATH: &str = "/thank-you";

/// GAMERIE_* values captured when the WASM bundle was compiled.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_DISCORD_INVITE => option_env!("GAMERIE_DISCORD_INVITE_LINK"),
        ENV_TERMS => option_env!("GAMERIE_TERMS_OF_SERVICE"),
        ENV_PRIVACY => option_env!("GAMERIE_PRIVACY_POLICY"),
        ENV_HOSTED_FORM_ACTION => option_env!("GAMERIE_HOSTED_FORM_ACTION"),
        "GAMERIE_SOCIAL_X" => option_env!("GAMERIE_SOCIAL_X"),
        "GAMERIE_SOCIAL_INSTAGRAM" => option_env!("GAMERIE_SOCIAL_INSTAGRAM"),
        "GAMERIE_SOCIAL_TIKTOK" => option_env!("GAMERIE_SOCIAL_TIKTOK"),
        "GAMERIE_SOCIAL_YOUTUBE" => option_env!("GAMERIE_SOCIAL_YOUTUBE"),
        "GAMERIE_SOCIAL_TWITCH" => option_env!("GAMERIE_SOCIAL_TWITCH"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn page_config() -> PageConfig {
    // No file in the browser, so resolving cannot fail.
    let site = SiteConfig::resolve(None, build_env).unwrap_or_default();
    let year = js_sys::Date::new_0().get_full_year() as i32;
    PageConfig {
        particle_seed: (js_sys::Math::random() * f64::from(u32::MAX)) as u64,
        ..PageConfig::new(site, year)
    }
}

pub fn on_thank_you_path() -> bool {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .is_some_and(|path| path.trim_end_matches('/') == THANK_YOU_PATH)
}

/// Put the page stylesheet into `<head>`.
pub fn inject_styles() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(PAGE_CSS));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
