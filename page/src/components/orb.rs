//! Blurred background orbs that drift with section scroll progress.

use gamerie_core::motion::{OrbDrift, section_progress};
use leptos::html;
use leptos::prelude::*;

use crate::context::PageContext;

/// Progress (0..=1) of `section` through the viewport. Stays 0 until the
/// node is mounted, so static renders show the resting position.
pub fn use_section_progress(ctx: PageContext, section: NodeRef<html::Section>) -> Signal<f64> {
    Signal::derive(move || {
        ctx.scroll_y.track();
        let viewport = ctx.viewport_height.get();
        section
            .get_untracked()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                section_progress(rect.top(), rect.height(), viewport)
            })
            .unwrap_or(0.0)
    })
}

#[component]
pub fn Orb(
    progress: Signal<f64>,
    drift: OrbDrift,
    /// Position and color classes, e.g. `"orb-left orb-neon"`
    class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("orb {class}")
            style=move || drift.transform(progress.get())
            aria-hidden="true"
        ></div>
    }
}
