// Gamérie waitlist page, browser build (Leptos 0.8 CSR)
// Serve with `trunk serve`; links are baked in from GAMERIE_* at build time.

mod banner;
mod site;

use gamerie_page::components::{LandingPage, ThankYouPage};
use gamerie_page::{PageConfig, PageContext};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    site::inject_styles();

    let config = site::page_config();
    let thank_you = site::on_thank_you_path();
    leptos::mount::mount_to_body(move || view! { <App config=config thank_you=thank_you /> });
}

#[component]
fn App(config: PageConfig, thank_you: bool) -> impl IntoView {
    let ctx = match PageContext::new(&config) {
        Ok(ctx) => ctx,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("gamerie: {err}")));
            return view! { <p class="boot-error">"Something went wrong loading Gamérie."</p> }
                .into_any();
        }
    };

    let page = if thank_you {
        view! { <ThankYouPage ctx=ctx seed=config.particle_seed /> }.into_any()
    } else {
        view! { <LandingPage ctx=ctx year=config.year /> }.into_any()
    };

    view! {
        <banner::ConsoleBanner />
        {page}
    }
    .into_any()
}
