//! Hero: rotating backdrop, live counter badge and the waitlist form.

use gamerie_core::content::{HERO, HERO_IMAGES};
use gamerie_core::format_count;
use gamerie_core::motion::HeroMotion;
use leptos::prelude::*;

use super::WaitlistSlot;
use crate::browser::HERO_ID;
use crate::context::PageContext;

#[component]
pub fn Hero(ctx: PageContext) -> impl IntoView {
    let badge = move || {
        let joined = ctx.counter.with(|c| c.value());
        format!("{}+ gamers already joined", format_count(joined))
    };
    let drift = move || HeroMotion::at(ctx.scroll_y.get()).style();

    let slides = HERO_IMAGES
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let class = move || {
                if ctx.slide.get() == i { "hero-slide active" } else { "hero-slide" }
            };
            view! { <div class=class style=format!("background-image: url('{src}');")></div> }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=HERO_ID class="hero">
            <div class="hero-slides" aria-hidden="true">{slides}</div>
            <div class="hero-overlay" aria-hidden="true"></div>

            <div class="hero-content" style=drift>
                <div class="badge">
                    <span class="badge-dot"></span>
                    <span>{badge}</span>
                </div>
                <h1 class="hero-title">
                    {HERO.headline}
                    <br />
                    <span class="gradient-text">{HERO.highlight}</span>
                </h1>
                <p class="hero-subtext">{HERO.subtext}</p>
                <WaitlistSlot ctx=ctx placeholder=HERO.placeholder show_spots=true />
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-dot"></div>
            </div>
        </section>
    }
}
