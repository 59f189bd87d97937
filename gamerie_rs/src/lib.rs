//! # gamerie
//!
//! Command-line companion for the Gamérie waitlist landing page.
//!
//! ```text
//! gamerie render [--out DIR] [--config FILE] [--hosted]   static HTML for both pages
//! gamerie links  [--config FILE] [--json]                 resolved external links
//! gamerie simulate <EMAIL>                                mock submission, in real time
//! gamerie count  [--target N] [--steps S] [--duration-ms D]
//! ```
//!
//! Site settings come from `gamerie.toml` (optional) overlaid with the
//! `GAMERIE_*` environment variables; see [`gamerie_core::config`].

pub mod args;
pub mod colors;
pub mod commands;

pub use args::{Cli, Command};
