//! End-to-end CLI tests for gamerie.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GAMERIE_ENV: &[&str] = &[
    "GAMERIE_DISCORD_INVITE_LINK",
    "GAMERIE_TERMS_OF_SERVICE",
    "GAMERIE_PRIVACY_POLICY",
    "GAMERIE_HOSTED_FORM_ACTION",
    "GAMERIE_SOCIAL_X",
    "GAMERIE_SOCIAL_INSTAGRAM",
    "GAMERIE_SOCIAL_TIKTOK",
    "GAMERIE_SOCIAL_YOUTUBE",
    "GAMERIE_SOCIAL_TWITCH",
];

/// The gamerie binary, run in `dir` with no inherited site settings.
fn gamerie(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("gamerie");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    for key in GAMERIE_ENV {
        cmd.env_remove(key);
    }
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("simulate"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_subcommand_fails() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir).arg("deploy").assert().failure();
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_both_pages() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["render", "--out", "site", "--year", "2030"])
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let landing = fs::read_to_string(dir.path().join("site/index.html")).unwrap();
        assert!(landing.starts_with("<!DOCTYPE html>"));
        assert!(landing.contains("Only 500 early access spots remaining"));
        assert!(landing.contains("© 2030 Gamérie"));

        let thanks = fs::read_to_string(dir.path().join("site/thank-you/index.html")).unwrap();
        assert!(thanks.contains("Check Your Email"));
    }

    #[test]
    fn env_links_reach_the_html() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["render", "--out", "site"])
            .env("GAMERIE_DISCORD_INVITE_LINK", "https://discord.gg/e2e")
            .env("GAMERIE_TERMS_OF_SERVICE", "https://legal.example/tos")
            .assert()
            .success();

        let landing = fs::read_to_string(dir.path().join("site/index.html")).unwrap();
        assert!(landing.contains(r#"href="https://discord.gg/e2e""#));
        assert!(landing.contains(r#"href="https://legal.example/tos""#));
    }

    #[test]
    fn picks_up_config_in_working_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("gamerie.toml"),
            "[links]\nprivacy = \"https://legal.example/privacy\"\n",
        )
        .unwrap();

        gamerie(&dir).args(["render", "--out", "site"]).assert().success();

        let landing = fs::read_to_string(dir.path().join("site/index.html")).unwrap();
        assert!(landing.contains(r#"href="https://legal.example/privacy""#));
    }

    #[test]
    fn hosted_without_action_fails() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["render", "--hosted"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("GAMERIE_HOSTED_FORM_ACTION"));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn hosted_with_env_action() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["render", "--hosted"])
            .env("GAMERIE_HOSTED_FORM_ACTION", "https://forms.example.com/serve/e2e")
            .assert()
            .success();

        let landing = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(landing.contains(r#"action="https://forms.example.com/serve/e2e""#));
    }

    #[test]
    fn hosted_with_form_table_action() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("gamerie.toml"),
            "[form]\naction = \"https://forms.example.com/serve/file\"\n",
        )
        .unwrap();

        gamerie(&dir).args(["render", "--hosted"]).assert().success();

        let landing = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(landing.contains(r#"action="https://forms.example.com/serve/file""#));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["render", "--config", "nope.toml", "--color", "never"])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("error: config file not found"));
    }

    #[test]
    fn broken_config_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gamerie.toml"), "[counter]\nsteps = 0\n").unwrap();
        gamerie(&dir)
            .arg("render")
            .assert()
            .failure()
            .stderr(predicate::str::contains("gamerie.toml"));
    }
}

// ============================================
// Links
// ============================================

mod links {
    use super::*;

    #[test]
    fn prints_defaults() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["links", "--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("https://discord.com/invite/"))
            .stdout(predicate::str::contains("/terms"))
            .stdout(predicate::str::contains("mock"));
    }

    #[test]
    fn json_reflects_env() {
        let dir = TempDir::new().unwrap();
        let output = gamerie(&dir)
            .args(["links", "--json"])
            .env("GAMERIE_SOCIAL_YOUTUBE", "https://youtube.com/@gamerie")
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["socials"][0]["name"], "YouTube");
        assert_eq!(json["socials"][0]["href"], "https://youtube.com/@gamerie");
        assert!(json["hosted_form_action"].is_null());
    }
}

// ============================================
// Simulate & Count
// ============================================

mod timeline {
    use super::*;

    #[test]
    fn simulate_prints_three_transitions() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args([
                "simulate",
                "gamer@game.gg",
                "--pending-ms",
                "10",
                "--notice-ms",
                "10",
                "--color",
                "never",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("pending Joining..."))
            .stdout(predicate::str::contains("✓ You're on the list!"))
            .stdout(predicate::str::contains("notice cleared"));
    }

    #[test]
    fn simulate_rejects_malformed_email() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["simulate", "not-an-email"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a valid email"));
    }

    #[test]
    fn count_lands_on_target() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["count", "--target", "1000", "--steps", "4", "--color", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("250+"))
            .stdout(predicate::str::ends_with("1,000+\n"));
    }

    #[test]
    fn count_rejects_zero_steps() {
        let dir = TempDir::new().unwrap();
        gamerie(&dir)
            .args(["count", "--steps", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("at least one step"));
    }
}
