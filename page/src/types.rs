//! Render input.
//!
//! A [`PageConfig`] carries everything that is not copy: resolved links,
//! counter tuning, form mode, the footer year and the frame of interactive
//! state to render.

use gamerie_core::{FaqState, SiteConfig, WaitlistSnapshot};

/// Interactive state frozen for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    /// Value shown on the "N+ gamers already joined" badge.
    pub counter: u64,
    /// Form phase, typed input and success notice.
    pub waitlist: WaitlistSnapshot,
    /// Which FAQ entries are expanded.
    pub faq: FaqState,
    /// Vertical scroll offset in px, drives the hero drift.
    pub scroll_y: f64,
    /// Active hero background image.
    pub slide: usize,
}

/// Everything a page render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Links, counter and form mode.
    pub site: SiteConfig,
    /// Copyright year in the footer.
    pub year: i32,
    /// Frame to render.
    pub state: PageState,
    /// Seed for the thank-you particle field.
    pub particle_seed: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            year: 2025,
            state: PageState::default(),
            particle_seed: 0x6761_6d65,
        }
    }
}

impl PageConfig {
    /// Defaults with the given site config and year.
    pub fn new(site: SiteConfig, year: i32) -> Self {
        Self {
            site,
            year,
            ..Self::default()
        }
    }
}
