//! Static render of configured sites: links, form modes, footer.

#![cfg(feature = "ssr")]

use gamerie_core::{FormMode, HostedForm, SiteConfig, SiteLinks, SocialLink};
use gamerie_page::{PageConfig, render_landing, render_thank_you};

fn site(links: SiteLinks, form: FormMode) -> PageConfig {
    PageConfig::new(
        SiteConfig {
            links,
            form,
            ..SiteConfig::default()
        },
        2031,
    )
}

// ============================================================================
// Links
// ============================================================================

mod links {
    use super::*;

    #[test]
    fn configured_links_appear_verbatim() {
        let links = SiteLinks {
            discord_invite: "https://discord.gg/gamerie".into(),
            terms: "https://legal.gamerie.gg/terms?v=2".into(),
            privacy: "/legal/privacy#cookies".into(),
            socials: vec![SocialLink {
                name: "Twitch".into(),
                href: "https://twitch.tv/gamerie".into(),
            }],
        };
        let config = site(links, FormMode::Mock);

        let landing = render_landing(&config).expect("render landing");
        assert!(landing.contains(r#"href="https://discord.gg/gamerie""#));
        assert!(landing.contains(r#"href="https://legal.gamerie.gg/terms?v=2""#));
        assert!(landing.contains(r#"href="/legal/privacy#cookies""#));
        assert!(landing.contains(r#"href="https://twitch.tv/gamerie""#));

        let thanks = render_thank_you(&config).expect("render thank-you");
        assert!(thanks.contains(r#"href="https://discord.gg/gamerie""#));
    }

    #[test]
    fn default_legal_links() {
        let html = render_landing(&PageConfig::default()).expect("render");
        assert!(html.contains(r#"href="/terms""#));
        assert!(html.contains(r#"href="/privacy""#));
        assert!(!html.contains("footer-socials"));
    }

    #[test]
    fn footer_carries_year() {
        let html = render_landing(&site(SiteLinks::default(), FormMode::Mock)).expect("render");
        assert!(html.contains("© 2031 Gamérie. All rights reserved."));
    }
}

// ============================================================================
// Form modes
// ============================================================================

mod forms {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mock_mode_renders_local_forms() {
        let html = render_landing(&PageConfig::default()).expect("render");
        // hero + call to action
        assert_eq!(html.matches(r#"class="waitlist-form""#).count(), 2);
        assert!(!html.contains("sib-form"));
    }

    #[test]
    fn hosted_mode_embeds_vendor_form() {
        let form = FormMode::Hosted(HostedForm::new("https://forms.example.com/serve/abc"));
        let html = render_landing(&site(SiteLinks::default(), form)).expect("render");

        assert!(html.contains(r#"action="https://forms.example.com/serve/abc""#));
        assert!(html.contains(r#"name="EMAIL""#));
        assert_eq!(html.matches(r#"id="sib-form""#).count(), 1);
        assert!(html.contains("Claim Stake"));
        assert!(html.contains("https://sibforms.com/forms/end-form/build/main.js"));
        assert!(html.contains("window.LOCALE"));
        assert!(!html.contains("Only 500 early access spots remaining"));
    }
}
