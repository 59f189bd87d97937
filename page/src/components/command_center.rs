//! "Your Command Center": the four platform pillars.

use gamerie_core::content::COMMAND_CENTER;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, JoinButton, Orb, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn CommandCenter(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section class="section section-command">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(200.0) class="orb-top-right orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-200.0) class="orb-bottom-left orb-accent" />
                <Divider />
            </div>

            <div class="container">
                <header class="section-header">
                    <h2>"Your " <span class="gradient-text">"Command Center"</span></h2>
                    <p class="lead">
                        "Gamérie unifies every tool you need into one powerful, integrated platform."
                    </p>
                </header>

                <div class="feature-grid feature-grid-wide">
                    {COMMAND_CENTER
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card feature-card">
                                    <span class="feature-icon">{feature.icon}</span>
                                    <h3>{feature.title}</h3>
                                    <p class="muted">{feature.desc}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="center">
                    <JoinButton />
                </div>
            </div>
        </section>
    }
}
