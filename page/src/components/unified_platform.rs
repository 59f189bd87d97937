//! "A Unified Platform. For Every Role."

use gamerie_core::content::ROLES;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, JoinButton, Orb, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn UnifiedPlatform(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section class="section section-platform">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(200.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-200.0) class="orb-bottom-right orb-accent" />
                <Divider />
            </div>

            <div class="container">
                <header class="section-header">
                    <h2>
                        "A Unified Platform."
                        <br />
                        <span class="gradient-text">"For Every Role."</span>
                    </h2>
                    <p class="lead">
                        "Gamérie is the all-in-one Command Center for every player in the industry. Find your pillar."
                    </p>
                </header>

                <div class="role-grid">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <article class="card role-card">
                                    <div class="role-image" style=format!("background-image: url('{}');", role.image)></div>
                                    <h3>{role.title}</h3>
                                    <p class="muted">{role.desc}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="card partner-card">
                    <div class="partner-mark">"KAMK"</div>
                    <div>
                        <h3>"ACADEMICALLY BACKED & VERIFIED"</h3>
                        <p class="muted">
                            "In partnership with the esports business program at the "
                            <span class="accent">"Kajaani University of Applied Sciences, Finland"</span>
                            ", pioneering the future of professional gaming."
                        </p>
                    </div>
                </div>

                <div class="center">
                    <JoinButton />
                </div>
            </div>
        </section>
    }
}
