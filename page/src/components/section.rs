//! Pieces shared by the content sections.

use leptos::prelude::*;

use crate::browser;

/// Small rounded label above a section heading ("The Problem").
#[component]
pub fn Pill(text: &'static str) -> impl IntoView {
    view! { <div class="pill">{text}</div> }
}

/// Ghost button that smooth-scrolls back to the hero form.
#[component]
pub fn JoinButton(
    #[prop(default = "Join waitlist →")] label: &'static str,
    #[prop(default = "btn btn-ghost")] class: &'static str,
) -> impl IntoView {
    view! {
        <button type="button" class=class on:click=move |_| browser::scroll_to_hero()>
            {label}
        </button>
    }
}

/// Hairline that separates a section from the one above.
#[component]
pub fn Divider() -> impl IntoView {
    view! { <div class="divider" aria-hidden="true"></div> }
}
