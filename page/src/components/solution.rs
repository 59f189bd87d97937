//! "A unified platform for gamers".

use gamerie_core::content::SOLUTION_FEATURES;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, ICON_LIGHTNING, Icon, JoinButton, Orb, Pill, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn Solution(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);

    view! {
        <section node_ref=section class="section section-solution">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(200.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-200.0) class="orb-bottom-right orb-accent" />
                <Divider />
            </div>

            <div class="container split">
                <div class="demo-frame">
                    <div class="demo-icon">
                        <Icon path=ICON_LIGHTNING size="40" />
                    </div>
                    <p class="muted">"Platform Demo"</p>
                </div>

                <div>
                    <Pill text="The Solution" />
                    <h2>"A unified platform for gamers"</h2>
                    <p class="accent">"All your gaming needs, in one place."</p>
                    <p class="lead">
                        "Gamerie is a comprehensive platform that brings together game discovery, social networking, and community engagement. Our mission is to create a seamless experience for gamers to connect, share, and explore new gaming horizons."
                    </p>

                    <div class="feature-grid">
                        {SOLUTION_FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="feature">
                                        <span class="feature-icon">{feature.icon}</span>
                                        <div>
                                            <h3>{feature.title}</h3>
                                            <p class="muted">{feature.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <JoinButton label="Get early access →" class="btn btn-primary" />
                </div>
            </div>
        </section>
    }
}
