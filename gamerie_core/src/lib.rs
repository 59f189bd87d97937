//! Shared logic for the Gamérie waitlist page.
//!
//! Everything here is plain data and state machines with no DOM or clock
//! access, so the same code drives the browser build, the static renderer
//! and the CLI:
//!
//! - [`counter`] - the "N+ gamers already joined" count-up
//! - [`waitlist`] - email form lifecycle (idle → pending → idle + notice)
//! - [`faq`] - independent open/closed flags per FAQ entry
//! - [`motion`] - scroll-linked parallax, hero slideshow, particles
//! - [`content`] - section copy and the brand palette
//! - [`config`] - external links from env vars and `gamerie.toml`
//!
//! With the `runtime` feature, [`driver::MockSubmitter`] plays the submission
//! timeline on tokio timers.

mod error;

pub mod config;
pub mod content;
pub mod counter;
#[cfg(feature = "runtime")]
pub mod driver;
pub mod faq;
pub mod motion;
pub mod waitlist;

pub use config::{FormMode, HostedForm, SiteConfig, SiteLinks, SocialLink};
pub use counter::{Counter, CounterConfig, CounterTick, format_count};
pub use error::{Error, Result};
pub use faq::{AnswerBlock, FaqEntry, FaqState};
pub use waitlist::{Email, Notice, Phase, SubmitOutcome, Timings, Waitlist, WaitlistSnapshot};
