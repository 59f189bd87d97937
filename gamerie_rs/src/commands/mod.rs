//! Subcommand implementations. Each returns its output (or writes files) and
//! leaves printing to `main`, so tests can call them directly.

mod count;
mod links;
mod render;
mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use gamerie_core::SiteConfig;

use crate::args::{ConfigArgs, DEFAULT_CONFIG};

pub use count::count;
pub use links::links;
pub use render::{Rendered, render};
pub use simulate::{format_transition, simulate};

/// Resolve the site config: file (explicit, or `./gamerie.toml` when
/// present) overlaid with the process environment.
pub fn load_site(args: &ConfigArgs) -> Result<SiteConfig> {
    let path = match &args.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            path.clone()
        }
        None => PathBuf::from(DEFAULT_CONFIG),
    };
    let site = SiteConfig::resolve(Some(path.as_path()), |key| std::env::var(key).ok())
        .with_context(|| format!("loading site config from {}", path.display()))?;
    tracing::debug!(config = %path.display(), form = ?site.form, "site config resolved");
    Ok(site)
}
