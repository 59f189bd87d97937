//! Leptos components for the landing and thank-you pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (ssr only)
//! └── LandingPage
//!     ├── Hero ── WaitlistSlot ── WaitlistForm | HostedForm
//!     ├── EsportsStats
//!     ├── Problem
//!     ├── Solution
//!     ├── UnifiedPlatform
//!     ├── CommandCenter
//!     ├── JoinEarly
//!     ├── CommunityProof
//!     ├── Faq ── FaqItem (per entry)
//!     ├── CallToAction ── WaitlistSlot
//!     └── Footer
//!
//! ThankYouDocument (ssr only)
//! └── ThankYouPage
//! ```
//!
//! Every section takes the same `Copy` [`PageContext`](crate::PageContext).
//! Sections with drifting orbs read their own scroll progress through
//! [`use_section_progress`].

mod call_to_action;
mod command_center;
mod community;
mod document;
mod esports;
mod faq;
mod footer;
mod hero;
mod icons;
mod join_early;
mod landing;
mod orb;
mod problem;
mod section;
mod solution;
mod thank_you;
mod unified_platform;
mod waitlist_form;

pub use call_to_action::CallToAction;
pub use command_center::CommandCenter;
pub use community::CommunityProof;
pub use document::{LandingDocument, ThankYouDocument};
pub use esports::EsportsStats;
pub use faq::{Faq, FaqItem};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use join_early::JoinEarly;
pub use landing::LandingPage;
pub use orb::{Orb, use_section_progress};
pub use problem::Problem;
pub use section::{Divider, JoinButton, Pill};
pub use solution::Solution;
pub use thank_you::ThankYouPage;
pub use unified_platform::UnifiedPlatform;
pub use waitlist_form::{HostedForm, WaitlistForm, WaitlistSlot};
