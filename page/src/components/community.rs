//! Community proof: live count plus testimonials.

use gamerie_core::content::TESTIMONIALS;
use gamerie_core::format_count;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, Orb, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn CommunityProof(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);
    let waiting = move || format!("{}+ gamers", format_count(ctx.counter.with(|c| c.value())));

    view! {
        <section node_ref=section class="section section-community">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::spin(100.0, 45.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-100.0) class="orb-bottom-right orb-accent" />
                <Divider />
            </div>

            <div class="container">
                <header class="section-header">
                    <h2>"Join " <span class="accent">{waiting}</span> " already waiting"</h2>
                    <p class="lead">"See what early supporters are saying"</p>
                </header>

                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|item| {
                            view! {
                                <figure class="card testimonial">
                                    <span class="quote-mark" aria-hidden="true">"“"</span>
                                    <blockquote>{item.quote}</blockquote>
                                    <figcaption>
                                        <span class="author">{item.author}</span>
                                        <span class="location">{item.location}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
