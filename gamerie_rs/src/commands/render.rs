use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gamerie_core::FormMode;
use gamerie_core::config::ENV_HOSTED_FORM_ACTION;
use gamerie_page::{PageConfig, render_landing, render_thank_you};

use super::load_site;
use crate::args::{DEFAULT_CONFIG, RenderArgs};

/// Files written by [`render`].
#[derive(Debug, Clone)]
pub struct Rendered {
    pub landing: PathBuf,
    pub thank_you: PathBuf,
}

/// Write `index.html` and `thank-you/index.html` under `args.out`.
pub fn render(args: &RenderArgs) -> Result<Rendered> {
    let site = load_site(&args.config)?;
    if args.hosted && !matches!(site.form, FormMode::Hosted(_)) {
        bail!(
            "--hosted needs a form action: set {ENV_HOSTED_FORM_ACTION} or add `action` under [form] in {DEFAULT_CONFIG}"
        );
    }

    let mut page = PageConfig::new(site, args.year.unwrap_or_else(current_year));
    if let Some(seed) = args.seed {
        page.particle_seed = seed;
    }

    let landing_html = render_landing(&page).context("rendering landing page")?;
    let thanks_html = render_thank_you(&page).context("rendering thank-you page")?;

    let rendered = Rendered {
        landing: args.out.join("index.html"),
        thank_you: args.out.join("thank-you").join("index.html"),
    };
    write_page(&rendered.landing, &landing_html)?;
    write_page(&rendered.thank_you, &thanks_html)?;
    Ok(rendered)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote page");
    Ok(())
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
