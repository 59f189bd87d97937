//! "Why Join Early": founder perks.

use gamerie_core::content::{EARLY_SPOTS, PERKS};
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, JoinButton, Orb, Pill, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn JoinEarly(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section class="section section-perks">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(200.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-200.0) class="orb-bottom-right orb-accent" />
                <Divider />
            </div>

            <div class="container">
                <header class="section-header">
                    <Pill text="Why Join Early" />
                    <h2>"Early access, exclusive perks"</h2>
                    <p class="lead">
                        {format!(
                            "The first {EARLY_SPOTS} members unlock lifetime benefits and shape the future of Gamérie."
                        )}
                    </p>
                </header>

                <div class="perk-grid">
                    {PERKS
                        .iter()
                        .map(|perk| {
                            view! {
                                <div class="card perk-card">
                                    <span class="feature-icon">{perk.icon}</span>
                                    <h3>{perk.title}</h3>
                                    <p class="muted">{perk.desc}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="center">
                    <JoinButton label="Claim your perks" class="btn btn-primary btn-lg" />
                    <p class="fine-print">{format!("Only {EARLY_SPOTS} spots remaining")}</p>
                </div>
            </div>
        </section>
    }
}
