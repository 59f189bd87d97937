//! Full HTML documents for the static render. The browser build mounts the
//! page components directly and ships its own `index.html`.

use gamerie_core::content::{BRAND, PALETTE};
use leptos::prelude::*;

use super::{LandingPage, ThankYouPage};
use crate::context::PageContext;
use crate::styles::PAGE_CSS;

const DESCRIPTION: &str =
    "One platform for your entire gaming life. Join the Gamérie waitlist for early access.";

#[component]
fn Head(title: String) -> impl IntoView {
    view! {
        <head>
            <meta charset="UTF-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <meta name="description" content=DESCRIPTION />
            <meta name="theme-color" content=PALETTE.dark />
            <title>{title}</title>
            <style>{PAGE_CSS}</style>
        </head>
    }
}

/// `<html>` document around [`LandingPage`].
#[component]
pub fn LandingDocument(ctx: PageContext, year: i32) -> impl IntoView {
    view! {
        <html lang="en">
            <Head title=format!("{BRAND} | Your gaming universe, unified") />
            <body>
                <LandingPage ctx=ctx year=year />
            </body>
        </html>
    }
}

/// `<html>` document around [`ThankYouPage`].
#[component]
pub fn ThankYouDocument(ctx: PageContext, seed: u64) -> impl IntoView {
    view! {
        <html lang="en">
            <Head title=format!("Thank you | {BRAND}") />
            <body style=PALETTE.css_vars()>
                <ThankYouPage ctx=ctx seed=seed />
            </body>
        </html>
    }
}
