//! Site configuration: external links, counter tuning and form mode.
//!
//! Values come from an optional `gamerie.toml` and are then overridden by
//! environment variables. Links are used verbatim.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counter::CounterConfig;
use crate::{Error, Result};

pub const ENV_DISCORD_INVITE: &str = "GAMERIE_DISCORD_INVITE_LINK";
pub const ENV_TERMS: &str = "GAMERIE_TERMS_OF_SERVICE";
pub const ENV_PRIVACY: &str = "GAMERIE_PRIVACY_POLICY";
pub const ENV_HOSTED_FORM_ACTION: &str = "GAMERIE_HOSTED_FORM_ACTION";

/// Env var → display name for each social icon, in footer order.
pub const SOCIAL_ENV: &[(&str, &str)] = &[
    ("GAMERIE_SOCIAL_X", "X"),
    ("GAMERIE_SOCIAL_INSTAGRAM", "Instagram"),
    ("GAMERIE_SOCIAL_TIKTOK", "TikTok"),
    ("GAMERIE_SOCIAL_YOUTUBE", "YouTube"),
    ("GAMERIE_SOCIAL_TWITCH", "Twitch"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLinks {
    pub discord_invite: String,
    pub terms: String,
    pub privacy: String,
    pub socials: Vec<SocialLink>,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            discord_invite: "https://discord.com/invite/".into(),
            terms: "/terms".into(),
            privacy: "/privacy".into(),
            socials: Vec::new(),
        }
    }
}

impl SiteLinks {
    /// Defaults overridden by whatever `lookup` knows.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().overlay(lookup)
    }

    /// Override fields with values from `lookup`. An overridden social keeps
    /// its place; one set to an empty string is removed.
    pub fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(href) = lookup(ENV_DISCORD_INVITE) {
            self.discord_invite = href;
        }
        if let Some(href) = lookup(ENV_TERMS) {
            self.terms = href;
        }
        if let Some(href) = lookup(ENV_PRIVACY) {
            self.privacy = href;
        }
        for (key, name) in SOCIAL_ENV {
            let Some(href) = lookup(key) else {
                continue;
            };
            let existing = self.socials.iter().position(|s| s.name == *name);
            match (existing, href.is_empty()) {
                (Some(i), true) => {
                    self.socials.remove(i);
                }
                (Some(i), false) => self.socials[i].href = href,
                (None, false) => self.socials.push(SocialLink {
                    name: (*name).to_string(),
                    href,
                }),
                (None, true) => {}
            }
        }
        self
    }
}

/// Third-party hosted form (the production variant). The page renders a
/// plain POST form and the vendor scripts; no local submission logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedForm {
    pub action: String,
    #[serde(default = "default_hosted_scripts")]
    pub scripts: Vec<String>,
    #[serde(default = "default_hosted_label")]
    pub button_label: String,
    #[serde(default = "default_hosted_placeholder")]
    pub placeholder: String,
}

fn default_hosted_scripts() -> Vec<String> {
    vec![
        "https://www.google.com/recaptcha/api.js?hl=en".into(),
        "https://sibforms.com/forms/end-form/build/main.js".into(),
    ]
}

fn default_hosted_label() -> String {
    "Claim Stake".into()
}

fn default_hosted_placeholder() -> String {
    "Enter your email to claim your stake".into()
}

impl HostedForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            scripts: default_hosted_scripts(),
            button_label: default_hosted_label(),
            placeholder: default_hosted_placeholder(),
        }
    }
}

/// `[form]` in `gamerie.toml`. A table with an `action` is hosted unless
/// `mode = "mock"` says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", try_from = "FormTable")]
pub enum FormMode {
    /// Local simulated submission.
    #[default]
    Mock,
    Hosted(HostedForm),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FormKind {
    Mock,
    Hosted,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormTable {
    mode: Option<FormKind>,
    action: Option<String>,
    scripts: Option<Vec<String>>,
    button_label: Option<String>,
    placeholder: Option<String>,
}

impl TryFrom<FormTable> for FormMode {
    type Error = String;

    fn try_from(table: FormTable) -> std::result::Result<Self, Self::Error> {
        let kind = table.mode.unwrap_or(match table.action {
            Some(_) => FormKind::Hosted,
            None => FormKind::Mock,
        });
        let FormKind::Hosted = kind else {
            return Ok(FormMode::Mock);
        };
        let action = table
            .action
            .ok_or_else(|| "hosted form needs an `action` URL".to_string())?;
        let mut hosted = HostedForm::new(action);
        if let Some(scripts) = table.scripts {
            hosted.scripts = scripts;
        }
        if let Some(label) = table.button_label {
            hosted.button_label = label;
        }
        if let Some(placeholder) = table.placeholder {
            hosted.placeholder = placeholder;
        }
        Ok(FormMode::Hosted(hosted))
    }
}

/// Root configuration, `gamerie.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub links: SiteLinks,
    pub counter: CounterConfig,
    pub form: FormMode,
}

impl SiteConfig {
    /// Load from `path`. A missing file yields defaults; an unreadable or
    /// invalid one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.counter.validate().map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// File (when given) first, then `lookup` on top.
    pub fn resolve<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        if let Some(action) = lookup(ENV_HOSTED_FORM_ACTION) {
            config.form = match config.form {
                FormMode::Hosted(mut hosted) => {
                    hosted.action = action;
                    FormMode::Hosted(hosted)
                }
                FormMode::Mock => FormMode::Hosted(HostedForm::new(action)),
            };
        }
        config.links = config.links.overlay(lookup);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let links = SiteLinks::from_lookup(|_| None);
        assert_eq!(links, SiteLinks::default());
        assert_eq!(links.terms, "/terms");
        assert!(links.socials.is_empty());
    }

    #[test]
    fn env_values_are_taken_verbatim() {
        let links = SiteLinks::from_lookup(env(&[
            (ENV_DISCORD_INVITE, "https://discord.gg/abc?ref=wait list&x=<1>"),
            (ENV_TERMS, "  https://legal.gamerie.gg/terms  "),
            (ENV_PRIVACY, "/privacy#eu"),
            ("GAMERIE_SOCIAL_TWITCH", "https://twitch.tv/gamerie"),
            ("GAMERIE_SOCIAL_X", "https://x.com/gamerie"),
        ]));

        assert_eq!(links.discord_invite, "https://discord.gg/abc?ref=wait list&x=<1>");
        assert_eq!(links.terms, "  https://legal.gamerie.gg/terms  ");
        assert_eq!(links.privacy, "/privacy#eu");
        let names: Vec<&str> = links.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Twitch"]);
    }

    #[test]
    fn empty_social_removes_file_value() {
        let base = SiteLinks {
            socials: vec![SocialLink {
                name: "X".into(),
                href: "https://x.com/old".into(),
            }],
            ..SiteLinks::default()
        };
        let links = base.overlay(env(&[("GAMERIE_SOCIAL_X", "")]));
        assert!(links.socials.is_empty());
    }

    #[test]
    fn env_social_replaces_in_place() {
        let base = SiteLinks {
            socials: vec![
                SocialLink {
                    name: "X".into(),
                    href: "https://x.com/file".into(),
                },
                SocialLink {
                    name: "YouTube".into(),
                    href: "https://youtube.com/@file".into(),
                },
            ],
            ..SiteLinks::default()
        };
        let links = base.overlay(env(&[
            ("GAMERIE_SOCIAL_X", "https://x.com/env"),
            ("GAMERIE_SOCIAL_TWITCH", "https://twitch.tv/env"),
        ]));

        let pairs: Vec<(&str, &str)> = links
            .socials
            .iter()
            .map(|s| (s.name.as_str(), s.href.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("X", "https://x.com/env"),
                ("YouTube", "https://youtube.com/@file"),
                ("Twitch", "https://twitch.tv/env"),
            ]
        );
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("gamerie.toml")).expect("load");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("gamerie.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
[links]
discord_invite = "https://discord.gg/file"
socials = [{{ name = "YouTube", href = "https://youtube.com/@gamerie" }}]

[counter]
target = 1000
steps = 10

[form]
mode = "hosted"
action = "https://forms.example.com/serve/abc"
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&path).expect("load");
        assert_eq!(config.links.discord_invite, "https://discord.gg/file");
        assert_eq!(config.links.terms, "/terms");
        assert_eq!(config.links.socials.len(), 1);
        assert_eq!(config.counter.target, 1000);
        assert_eq!(config.counter.duration_ms, 2_000);
        match config.form {
            FormMode::Hosted(hosted) => {
                assert_eq!(hosted.action, "https://forms.example.com/serve/abc");
                assert_eq!(hosted.scripts.len(), 2);
                assert_eq!(hosted.button_label, "Claim Stake");
            }
            FormMode::Mock => panic!("expected hosted form"),
        }
    }

    #[test]
    fn form_table_with_action_is_hosted() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("gamerie.toml");
        std::fs::write(&path, "[form]\naction = \"https://forms.example.com/x\"\n").expect("write");

        let config = SiteConfig::load_from_path(&path).expect("load");
        assert_eq!(
            config.form,
            FormMode::Hosted(HostedForm::new("https://forms.example.com/x"))
        );
    }

    #[test]
    fn form_table_modes() {
        let parse = |src: &str| toml::from_str::<SiteConfig>(src).map(|c| c.form);

        assert_eq!(parse("[form]\n").expect("empty table"), FormMode::Mock);
        assert_eq!(
            parse("[form]\nmode = \"mock\"\naction = \"https://forms.example.com/x\"\n")
                .expect("explicit mock"),
            FormMode::Mock
        );
        assert!(parse("[form]\nmode = \"hosted\"\n").is_err());
        assert!(parse("[form]\nmode = \"carrier-pigeon\"\n").is_err());
    }

    #[test]
    fn hosted_form_survives_toml_round_trip() {
        let config = SiteConfig {
            form: FormMode::Hosted(HostedForm::new("https://forms.example.com/rt")),
            ..SiteConfig::default()
        };
        let text = toml::to_string(&config).expect("serialize");
        let back: SiteConfig = toml::from_str(&text).expect("parse");
        assert_eq!(back, config);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("gamerie.toml");
        std::fs::write(&path, "links = [[[").expect("write");
        assert!(matches!(SiteConfig::load_from_path(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn zero_counter_steps_in_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("gamerie.toml");
        std::fs::write(&path, "[counter]\nsteps = 0\n").expect("write");
        assert!(matches!(SiteConfig::load_from_path(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn env_overrides_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("gamerie.toml");
        std::fs::write(&path, "[links]\nterms = \"/file-terms\"\nprivacy = \"/file-privacy\"\n")
            .expect("write");

        let config = SiteConfig::resolve(
            Some(path.as_path()),
            env(&[
                (ENV_TERMS, "https://env.example/terms"),
                (ENV_HOSTED_FORM_ACTION, "https://forms.example.com/env"),
            ]),
        )
        .expect("resolve");

        assert_eq!(config.links.terms, "https://env.example/terms");
        assert_eq!(config.links.privacy, "/file-privacy");
        assert_eq!(
            config.form,
            FormMode::Hosted(HostedForm::new("https://forms.example.com/env"))
        );
    }
}
