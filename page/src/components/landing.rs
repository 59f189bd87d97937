//! The landing page container. Owns nothing itself: all state sits in the
//! [`PageContext`] it passes down, and its effect starts the browser drivers.

use gamerie_core::content::PALETTE;
use leptos::prelude::*;

use super::{
    CallToAction, CommandCenter, CommunityProof, EsportsStats, Faq, Footer, Hero, JoinEarly,
    Problem, Solution, UnifiedPlatform,
};
use crate::browser;
use crate::context::PageContext;

#[component]
pub fn LandingPage(ctx: PageContext, year: i32) -> impl IntoView {
    // Effects never run during a static render.
    Effect::new(move || {
        browser::start_counter(ctx);
        browser::start_slideshow(ctx);
        browser::track_scroll(ctx);
    });

    let links = ctx.links.get_value();

    view! {
        <div class="page" style=PALETTE.css_vars()>
            <Hero ctx=ctx />
            <EsportsStats ctx=ctx />
            <Problem ctx=ctx />
            <Solution ctx=ctx />
            <UnifiedPlatform ctx=ctx />
            <CommandCenter ctx=ctx />
            <JoinEarly ctx=ctx />
            <CommunityProof ctx=ctx />
            <Faq ctx=ctx />
            <CallToAction ctx=ctx />
            <Footer links=links year=year />
        </div>
    }
}
