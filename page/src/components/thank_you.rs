//! Post-signup page: confirmation, email reminder, Discord invite.

use gamerie_core::content::BRAND;
use gamerie_core::motion::ParticleField;
use leptos::prelude::*;

use super::{ICON_ARROW_LEFT, ICON_CHECK, ICON_ENVELOPE, Icon};
use crate::context::PageContext;

const DISCORD_LOGO: &str = "M20.317 4.37a19.791 19.791 0 0 0-4.885-1.515a.074.074 0 0 0-.079.037c-.21.375-.444.864-.608 1.25a18.27 18.27 0 0 0-5.487 0a12.64 12.64 0 0 0-.617-1.25a.077.077 0 0 0-.079-.037A19.736 19.736 0 0 0 3.677 4.37a.07.07 0 0 0-.032.027C.533 9.046-.32 13.58.099 18.057a.082.082 0 0 0 .031.057a19.9 19.9 0 0 0 5.993 3.03a.078.078 0 0 0 .084-.028a14.09 14.09 0 0 0 1.226-1.994a.076.076 0 0 0-.041-.106a13.107 13.107 0 0 1-1.872-.892a.077.077 0 0 1-.008-.128a10.2 10.2 0 0 0 .372-.292a.074.074 0 0 1 .077-.01c3.928 1.793 8.18 1.793 12.062 0a.074.074 0 0 1 .078.01c.12.098.246.198.373.292a.077.077 0 0 1-.006.127a12.299 12.299 0 0 1-1.873.892a.077.077 0 0 0-.041.107c.36.698.772 1.362 1.225 1.993a.076.076 0 0 0 .084.028a19.839 19.839 0 0 0 6.002-3.03a.077.077 0 0 0 .032-.054c.5-5.177-.838-9.674-3.549-13.66a.061.061 0 0 0-.031-.03zM8.02 15.33c-1.183 0-2.157-1.085-2.157-2.419c0-1.333.956-2.419 2.157-2.419c1.21 0 2.176 1.096 2.157 2.42c0 1.333-.956 2.418-2.157 2.418zm7.975 0c-1.183 0-2.157-1.085-2.157-2.419c0-1.333.955-2.419 2.157-2.419c1.21 0 2.176 1.096 2.157 2.42c0 1.333-.946 2.418-2.157 2.418z";

/// Thank-you page body. `seed` fixes the floating particle layout.
#[component]
pub fn ThankYouPage(ctx: PageContext, seed: u64) -> impl IntoView {
    let field = ParticleField::generate(ParticleField::DEFAULT_COUNT, seed);
    let discord = ctx.links.with_value(|links| links.discord_invite.clone());

    view! {
        <main class="thank-you">
            <div class="backdrop" aria-hidden="true">
                <div class="orb orb-top-left orb-neon orb-xl"></div>
                <div class="orb orb-bottom-right orb-accent orb-xl"></div>
                <div class="particles">
                    {field
                        .particles
                        .iter()
                        .map(|p| view! { <span class="particle" style=p.style()></span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="container narrow center">
                <div class="success-badge">
                    <Icon path=ICON_CHECK size="96" />
                </div>

                <h1 class="display">"Thank You " <span class="gradient-text">"Gamer!"</span></h1>

                <div class="card email-card">
                    <Icon path=ICON_ENVELOPE size="24" class="accent" />
                    <div>
                        <h3>"Check Your Email"</h3>
                        <p class="muted">
                            "Please be sure to check your email and clear our emails from your spam filter. We'll be sending you updates and exclusive early access info soon!"
                        </p>
                    </div>
                </div>

                <div class="card discord-card">
                    <h2>"Get " <span class="gradient-text">"Early Access"</span></h2>
                    <p class="lead">
                        "Join our official Discord to connect with other gamers, give feedback, and maybe become one of our "
                        <span class="accent">"MVP testers"</span>
                        "."
                    </p>
                    <a class="btn btn-discord" href=discord target="_blank" rel="noopener noreferrer">
                        <svg xmlns="http://www.w3.org/2000/svg" width="22" height="22" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                            <path d=DISCORD_LOGO></path>
                        </svg>
                        {format!("{BRAND} Discord")}
                    </a>
                </div>

                <a class="back-home" href="/">
                    <Icon path=ICON_ARROW_LEFT size="16" />
                    "Back to home"
                </a>
            </div>
        </main>
    }
}
