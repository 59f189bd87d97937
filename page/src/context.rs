//! Shared page state.
//!
//! The top-level container owns every signal and hands the same `Copy`
//! [`PageContext`] to each section as a prop. Sections read what they
//! display; only the form, the FAQ and the browser drivers write.

use gamerie_core::content::{FAQ, HERO_IMAGES};
use gamerie_core::motion::Slideshow;
use gamerie_core::{Counter, FaqState, FormMode, Result, SiteLinks, Timings, Waitlist};
use leptos::prelude::*;

use crate::types::PageConfig;

/// Signals and settings shared by every section.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    /// Count-up badge.
    pub counter: RwSignal<Counter>,
    /// Email form lifecycle.
    pub waitlist: RwSignal<Waitlist>,
    /// Expanded FAQ entries.
    pub faq: RwSignal<FaqState>,
    /// `window.scrollY`.
    pub scroll_y: RwSignal<f64>,
    /// `window.innerHeight`, for per-section parallax progress.
    pub viewport_height: RwSignal<f64>,
    /// Active hero background image.
    pub slide: RwSignal<usize>,
    /// Hero background rotation.
    pub slideshow: Slideshow,
    /// Mock submission delays.
    pub timings: Timings,
    /// Resolved external links.
    pub links: StoredValue<SiteLinks>,
    /// Mock or hosted form.
    pub form: StoredValue<FormMode>,
}

impl PageContext {
    /// Build signals for the frame described by `config.state`.
    pub fn new(config: &PageConfig) -> Result<Self> {
        let state = &config.state;
        let counter = Counter::at(config.site.counter, state.counter)?;
        let faq = if state.faq.is_empty() {
            FaqState::closed(FAQ.len())
        } else {
            state.faq.clone()
        };
        let slideshow = Slideshow::new(HERO_IMAGES.len());

        Ok(Self {
            counter: RwSignal::new(counter),
            waitlist: RwSignal::new(Waitlist::from_snapshot(state.waitlist.clone())),
            faq: RwSignal::new(faq),
            scroll_y: RwSignal::new(state.scroll_y),
            viewport_height: RwSignal::new(0.0),
            slide: RwSignal::new(state.slide % slideshow.len.max(1)),
            slideshow,
            timings: Timings::default(),
            links: StoredValue::new(config.site.links.clone()),
            form: StoredValue::new(config.site.form.clone()),
        })
    }

    /// Flip one FAQ entry. Out-of-range indexes are logged and ignored.
    pub fn toggle_faq(&self, index: usize) {
        self.faq.update(|faq| {
            if let Err(err) = faq.toggle(index) {
                crate::browser::warn(&format!("faq toggle ignored: {err}"));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageState;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn empty_faq_state_becomes_all_closed() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = PageContext::new(&PageConfig::default()).expect("context");
            assert_eq!(ctx.faq.with_untracked(|f| f.len()), FAQ.len());
            assert_eq!(ctx.faq.with_untracked(|f| f.open_count()), 0);
        });
    }

    #[test]
    fn toggles_are_independent() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = PageContext::new(&PageConfig::default()).expect("context");
            ctx.toggle_faq(0);
            ctx.toggle_faq(4);
            ctx.toggle_faq(0);
            ctx.toggle_faq(99);
            assert!(!ctx.faq.with_untracked(|f| f.is_open(0)));
            assert!(ctx.faq.with_untracked(|f| f.is_open(4)));
            assert_eq!(ctx.faq.with_untracked(|f| f.open_count()), 1);
        });
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn bad_faq_index_is_reported() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let owner = Owner::new();
            owner.with(|| {
                let ctx = PageContext::new(&PageConfig::default()).expect("context");
                ctx.toggle_faq(99);
            });
        });

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).expect("utf8");
        assert!(log.contains("WARN"));
        assert!(log.contains("faq toggle ignored: no FAQ entry at index 99"));
    }

    #[test]
    fn slide_index_wraps_into_range() {
        let owner = Owner::new();
        owner.with(|| {
            let config = PageConfig {
                state: PageState {
                    slide: HERO_IMAGES.len() + 1,
                    ..PageState::default()
                },
                ..PageConfig::default()
            };
            let ctx = PageContext::new(&config).expect("context");
            assert_eq!(ctx.slide.get_untracked(), 1);
        });
    }
}
