//! "Gaming is fragmented".

use gamerie_core::content::PROBLEM_STATS;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, JoinButton, Orb, Pill, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn Problem(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section id="problem-section" class="section section-problem">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(200.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-200.0) class="orb-bottom-right orb-accent" />
                <Divider />
            </div>

            <div class="container split">
                <div>
                    <Pill text="The Problem" />
                    <h2>"Gaming is fragmented"</h2>
                    <p class="lead">
                        "Too many apps. Too many logins. No single place to find teammates, track progress, or build your reputation."
                    </p>
                    <JoinButton label="Join the solution →" />
                </div>

                <div class="stack">
                    {PROBLEM_STATS
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="card problem-card">
                                    <div class="stat-value">{item.value}</div>
                                    <div>
                                        <div class="stat-label">{item.label}</div>
                                        <div class="stat-desc">{item.desc}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
