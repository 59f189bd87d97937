//! Closing pitch with a second form bound to the same waitlist state.
//!
//! The hosted form is embedded once (in the hero); here it becomes a button
//! that scrolls back up.

use gamerie_core::FormMode;
use gamerie_core::content::EARLY_SPOTS;
use gamerie_core::motion::OrbDrift;
use leptos::html;
use leptos::prelude::*;

use super::{Divider, JoinButton, Orb, WaitlistForm, use_section_progress};
use crate::context::PageContext;

#[component]
pub fn CallToAction(ctx: PageContext) -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_section_progress(ctx, section);
    let discord = ctx.links.with_value(|links| links.discord_invite.clone());
    let form = match ctx.form.get_value() {
        FormMode::Mock => view! { <WaitlistForm ctx=ctx placeholder="you@game.gg" /> }.into_any(),
        FormMode::Hosted(_) => {
            view! { <JoinButton label="Claim your stake →" class="btn btn-primary btn-lg" /> }
                .into_any()
        }
    };

    view! {
        <section node_ref=section class="section section-cta">
            <div class="backdrop">
                <Orb progress=progress drift=OrbDrift::slide(60.0) class="orb-top-left orb-neon" />
                <Orb progress=progress drift=OrbDrift::slide(-60.0) class="orb-bottom-right orb-accent" />
                <div class="spotlight spotlight-low"></div>
                <Divider />
            </div>

            <div class="container narrow center">
                <h2 class="display">
                    "Your squad is waiting."
                    <br />
                    <span class="accent">"Are you in?"</span>
                </h2>
                <p class="lead">
                    {format!("Secure your spot now. Only {EARLY_SPOTS} early access slots available.")}
                </p>

                {form}

                <a class="discord-link" href=discord target="_blank" rel="noreferrer">
                    <span aria-hidden="true">"💬"</span>
                    <span>"Join Discord Community"</span>
                </a>
            </div>
        </section>
    }
}
