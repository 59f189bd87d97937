use anyhow::{Context, Result};
use gamerie_core::{FormMode, SiteLinks};
use serde::Serialize;

use super::load_site;
use crate::args::LinksArgs;
use crate::colors::Painter;

#[derive(Debug, Serialize)]
struct LinksReport {
    #[serde(flatten)]
    links: SiteLinks,
    hosted_form_action: Option<String>,
}

/// Resolved links as an aligned table, or as JSON with `--json`.
pub fn links(args: &LinksArgs, painter: Painter) -> Result<String> {
    let site = load_site(&args.config)?;
    let hosted_form_action = match &site.form {
        FormMode::Hosted(form) => Some(form.action.clone()),
        FormMode::Mock => None,
    };

    if args.json {
        let report = LinksReport {
            links: site.links,
            hosted_form_action,
        };
        return serde_json::to_string_pretty(&report).context("serializing links");
    }

    let mut rows = vec![
        ("discord_invite".to_string(), site.links.discord_invite.clone()),
        ("terms".to_string(), site.links.terms.clone()),
        ("privacy".to_string(), site.links.privacy.clone()),
    ];
    rows.extend(
        site.links
            .socials
            .iter()
            .map(|social| (format!("social.{}", social.name), social.href.clone())),
    );
    rows.push((
        "form".to_string(),
        hosted_form_action.map_or_else(|| "mock".to_string(), |action| format!("hosted {action}")),
    ));

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let out = rows
        .iter()
        .map(|(key, value)| format!("{} {}", painter.header(&format!("{key:<width$}")), painter.path(value)))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(out)
}
