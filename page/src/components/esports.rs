//! "$2.2 Billion on the table": esports market figures.

use gamerie_core::content::ESPORTS_STATS;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, Orb, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn EsportsStats(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section class="section section-esports">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(150.0) class="orb-top-left orb-neon orb-lg" />
                <Orb progress=progress drift=OrbDrift::slide(-150.0) class="orb-bottom-right orb-accent orb-xl" />
                <div class="grid-overlay"></div>
                <div class="glow-pulse"></div>
                <Divider />
            </div>

            <div class="container">
                <header class="section-header">
                    <h2>
                        "The eSports industry has "
                        <span class="gradient-text">"$2.2 Billion"</span>
                        " on the table"
                    </h2>
                    <p class="lead">"It's not just for fun. It's the real deal for business opportunities."</p>
                </header>

                <div class="stat-grid">
                    {ESPORTS_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="card stat-card">
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
