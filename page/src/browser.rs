//! Browser drivers: intervals, timeouts, listeners and scrolling.
//!
//! The state machines in `gamerie-core` own no timers. Everything that
//! schedules work lives here and is only reached from effects and event
//! handlers, so a static render never touches `window`.

use gamerie_core::{SubmitOutcome, format_count};
use leptos::prelude::*;

use crate::context::PageContext;

/// Id of the hero section, target of every "Join the waitlist" button.
pub const HERO_ID: &str = "hero-section";

/// Step the count-up badge until it lands on its target.
pub fn start_counter(ctx: PageContext) {
    let interval = ctx.counter.with_untracked(|c| c.config().interval());
    let handle: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);

    let tick = move || {
        let done = ctx.counter.try_update(|c| c.tick().done).unwrap_or(true);
        if done {
            if let Some(h) = handle.get_value() {
                h.clear();
            }
            tracing::debug!(
                value = %format_count(ctx.counter.with_untracked(|c| c.value())),
                "counter finished"
            );
        }
    };

    match set_interval_with_handle(tick, interval) {
        Ok(h) => {
            handle.set_value(Some(h));
            on_cleanup(move || h.clear());
        }
        Err(err) => warn(&format!("counter interval not started: {err:?}")),
    }
}

/// Rotate the hero background every [`Slideshow::PERIOD`].
///
/// [`Slideshow::PERIOD`]: gamerie_core::motion::Slideshow::PERIOD
pub fn start_slideshow(ctx: PageContext) {
    let show = ctx.slideshow;
    if show.len < 2 {
        return;
    }
    let advance = move || ctx.slide.update(|i| *i = show.next(*i));
    match set_interval_with_handle(advance, show.period) {
        Ok(h) => on_cleanup(move || h.clear()),
        Err(err) => warn(&format!("slideshow interval not started: {err:?}")),
    }
}

/// Mirror `scrollY` and `innerHeight` into the context.
pub fn track_scroll(ctx: PageContext) {
    sync_viewport(ctx);
    let scroll = window_event_listener(leptos::ev::scroll, move |_| sync_viewport(ctx));
    let resize = window_event_listener(leptos::ev::resize, move |_| sync_viewport(ctx));
    on_cleanup(move || {
        scroll.remove();
        resize.remove();
    });
}

fn sync_viewport(ctx: PageContext) {
    let win = window();
    ctx.scroll_y.set(win.scroll_y().unwrap_or(0.0));
    if let Some(height) = win.inner_height().ok().and_then(|h| h.as_f64()) {
        ctx.viewport_height.set(height);
    }
}

/// Submit the mock form: pending now, success notice after the pending
/// delay, notice gone after the notice delay.
pub fn submit(ctx: PageContext) {
    match ctx.waitlist.try_update(|w| w.submit()) {
        Some(Ok(SubmitOutcome::Started(email))) => {
            tracing::debug!(%email, "joining waitlist");
            set_timeout(move || finish(ctx), ctx.timings.pending);
        }
        Some(Ok(SubmitOutcome::Ignored)) | None => {}
        Some(Err(err)) => tracing::debug!(%err, "submission rejected"),
    }
}

fn finish(ctx: PageContext) {
    let Some(generation) = ctx.waitlist.try_update(|w| w.finish_pending()).flatten() else {
        return;
    };
    set_timeout(
        move || {
            // a newer notice keeps its own timer
            ctx.waitlist.try_update(|w| w.expire_notice(generation));
        },
        ctx.timings.notice,
    );
}

/// Warn through `tracing` and, in the browser build, the devtools console
/// (no subscriber is installed there).
pub(crate) fn warn(message: &str) {
    tracing::warn!("{message}");
    #[cfg(feature = "csr")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("gamerie: {message}")));
}

/// Smooth-scroll the hero (and its form) into view.
pub fn scroll_to_hero() {
    let Some(el) = document().get_element_by_id(HERO_ID) else {
        warn(&format!("scroll target #{HERO_ID} missing"));
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
