//! # gamerie-page
//!
//! Leptos components for the Gamérie waitlist landing page and its
//! thank-you page.
//!
//! The same component tree runs in two places:
//!
//! - **`ssr`** (default) - [`render_landing`] and [`render_thank_you`] turn a
//!   [`PageConfig`] into a complete static HTML document. No timers, no
//!   listeners: the page is rendered at the frame described by
//!   [`PageState`].
//! - **`csr`** - the `landing/` WASM entry mounts [`components::LandingPage`]
//!   or [`components::ThankYouPage`] directly. Effects start the counter,
//!   the hero slideshow and the scroll listener; the form runs the mock
//!   submission on browser timeouts.
//!
//! ## Architecture
//!
//! - [`types`] - render input ([`PageConfig`], [`PageState`])
//! - [`context`] - [`PageContext`], the `Copy` bundle of signals every
//!   section reads from
//! - [`browser`] - timers, listeners and scrolling; only ever invoked from
//!   effects and event handlers
//! - [`components`] - one component per page section
//! - [`styles`] - the page stylesheet
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <LandingDocument ctx=ctx year=2025 /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod components;
pub mod context;
pub mod styles;
pub mod types;

pub use context::PageContext;
pub use types::{PageConfig, PageState};

#[cfg(feature = "ssr")]
pub use render::{render_landing, render_thank_you};

#[cfg(feature = "ssr")]
mod render {
    use gamerie_core::Result;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    use crate::components::{LandingDocument, ThankYouDocument};
    use crate::context::PageContext;
    use crate::types::PageConfig;

    /// Render the landing page as a complete HTML document.
    ///
    /// The output starts with `<!DOCTYPE html>` and shows the counter, form
    /// and FAQ exactly as described by `config.state`.
    ///
    /// # Errors
    ///
    /// Fails when the counter configuration is invalid (zero steps).
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamerie_page::{render_landing, PageConfig};
    ///
    /// let html = render_landing(&PageConfig::default()).unwrap();
    /// assert!(html.starts_with("<!DOCTYPE html>"));
    /// ```
    pub fn render_landing(config: &PageConfig) -> Result<String> {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = PageContext::new(config)?;
            let year = config.year;
            let html = view! { <LandingDocument ctx=ctx year=year /> }.to_html();
            // Leptos doesn't include DOCTYPE, so we add it
            Ok(format!("<!DOCTYPE html>\n{html}"))
        })
    }

    /// Render the post-signup thank-you page.
    ///
    /// # Errors
    ///
    /// Same conditions as [`render_landing`].
    pub fn render_thank_you(config: &PageConfig) -> Result<String> {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = PageContext::new(config)?;
            let seed = config.particle_seed;
            let html = view! { <ThankYouDocument ctx=ctx seed=seed /> }.to_html();
            Ok(format!("<!DOCTYPE html>\n{html}"))
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use gamerie_core::content::SPOTS_REMAINING;
    use gamerie_core::waitlist::{JOIN_LABEL, JOINING_LABEL, SUCCESS_MESSAGE};
    use gamerie_core::{CounterConfig, FaqState, Notice, Phase, SiteConfig, WaitlistSnapshot};
    use pretty_assertions::assert_eq;

    fn landing(state: PageState) -> String {
        let config = PageConfig {
            state,
            ..PageConfig::default()
        };
        render_landing(&config).expect("render")
    }

    #[test]
    fn renders_landing_document() {
        let html = landing(PageState::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Gamérie"));
        assert!(html.contains("Your gaming universe"));
        assert!(html.contains("Why Join Early"));
    }

    #[test]
    fn idle_form_shows_spots_and_join_label() {
        let html = landing(PageState::default());

        assert!(html.contains(SPOTS_REMAINING));
        assert!(html.contains(JOIN_LABEL));
        assert!(!html.contains(JOINING_LABEL));
        assert!(!html.contains(SUCCESS_MESSAGE));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn pending_form_disables_button() {
        let html = landing(PageState {
            waitlist: WaitlistSnapshot {
                phase: Phase::Pending,
                input: "gamer@example.com".into(),
                notice: None,
            },
            ..PageState::default()
        });

        assert!(html.contains(JOINING_LABEL));
        assert!(html.contains(" disabled"));
    }

    #[test]
    fn notice_replaces_spots_line() {
        let html = landing(PageState {
            waitlist: WaitlistSnapshot {
                notice: Some(Notice {
                    text: SUCCESS_MESSAGE.into(),
                    generation: 1,
                }),
                ..WaitlistSnapshot::default()
            },
            ..PageState::default()
        });

        assert!(html.contains("✓ "));
        assert!(!html.contains(SPOTS_REMAINING));
    }

    #[test]
    fn counter_badge_uses_separators() {
        let html = landing(PageState {
            counter: 28_700,
            ..PageState::default()
        });
        assert!(html.contains("28,700+ gamers already joined"));
    }

    #[test]
    fn faq_items_open_independently() {
        let mut faq = FaqState::closed(gamerie_core::content::FAQ.len());
        faq.toggle(2).expect("toggle");
        let html = landing(PageState {
            faq,
            ..PageState::default()
        });

        assert_eq!(html.matches("faq-item open").count(), 1);
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 6);
        // closed answers are still in the markup
        assert!(html.contains("For Competitors:"));
    }

    #[test]
    fn zero_counter_steps_is_an_error() {
        let config = PageConfig {
            site: SiteConfig {
                counter: CounterConfig {
                    steps: 0,
                    ..CounterConfig::default()
                },
                ..SiteConfig::default()
            },
            ..PageConfig::default()
        };
        assert!(render_landing(&config).is_err());
    }

    #[test]
    fn renders_thank_you_document() {
        let html = render_thank_you(&PageConfig::default()).expect("render");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Thank You "));
        assert!(html.contains("Check Your Email"));
        assert!(html.contains(r#"href="https://discord.com/invite/""#));
        assert_eq!(html.matches("class=\"particle\"").count(), 20);
    }
}
