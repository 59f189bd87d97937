//! Page copy and brand constants.
//!
//! Kept as data so the static renderer, the browser build and tests all read
//! the same strings.

use serde::Serialize;

use crate::faq::{AnswerBlock, FaqEntry};

pub const BRAND: &str = "Gamérie";

/// Remaining early-access spots quoted across the page.
pub const EARLY_SPOTS: u32 = 500;

pub const SPOTS_REMAINING: &str = "Only 500 early access spots remaining";

/// Brand palette, exposed to CSS as custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub neon: &'static str,
    pub accent: &'static str,
    pub highlight: &'static str,
    pub mid: &'static str,
    pub card: &'static str,
    pub dark: &'static str,
}

pub const PALETTE: Palette = Palette {
    neon: "#C6A3FF",
    accent: "#9E83C8",
    highlight: "#756391",
    mid: "#4C435A",
    card: "#38333F",
    dark: "#232323",
};

impl Palette {
    /// `--neo: ...; --acc: ...` declarations for a `style` attribute.
    pub fn css_vars(&self) -> String {
        format!(
            "--neo: {}; --acc: {}; --hlt: {}; --mid: {}; --card: {}; --dark: {};",
            self.neon, self.accent, self.highlight, self.mid, self.card, self.dark
        )
    }
}

pub const HERO_IMAGES: &[&str] = &[
    "/future-3.jpg",
    "/future-4.jpg",
    "/future-1.jpg",
    "/future-2.jpg",
];

pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub subtext: &'static str,
    pub placeholder: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Your gaming universe",
    highlight: "unified",
    subtext: "One platform for your entire gaming life. Play, compete, and connect with gamers worldwide.",
    placeholder: "Enter your email",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub const ESPORTS_STATS: &[Stat] = &[
    Stat { value: "$60M", label: "Esports World Cup Prize Pool", desc: "" },
    Stat { value: "$34M", label: "The International (Dota 2) Prize Pool", desc: "" },
    Stat { value: "550M", label: "Esports Viewers Worldwide", desc: "" },
    Stat { value: "$3.1B", label: "Projected Market by 2025", desc: "" },
];

pub const PROBLEM_STATS: &[Stat] = &[
    Stat { value: "8+", label: "Apps per gamer", desc: "Discord, Steam, Twitch, and more" },
    Stat { value: "73%", label: "Feel disconnected", desc: "Struggle to find consistent squads" },
    Stat { value: "0", label: "Unified profiles", desc: "Your achievements stay scattered" },
];

/// Icon + title + one-liner, used by the solution list and the perk grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SOLUTION_FEATURES: &[Feature] = &[
    Feature { icon: "🧬", title: "Unified Profile", desc: "One identity across all games" },
    Feature { icon: "⚔️", title: "Squad Finder", desc: "AI-powered team matching" },
    Feature { icon: "🏆", title: "Tournaments", desc: "Compete and earn rewards" },
    Feature { icon: "🧠", title: "Pro Coaching", desc: "Learn from the best" },
];

pub const PERKS: &[Feature] = &[
    Feature { icon: "🎖️", title: "Founder Badge", desc: "Permanent badge showing you were here first" },
    Feature { icon: "🎁", title: "Exclusive Rewards", desc: "Early tournament access and premium features" },
    Feature { icon: "🗳️", title: "Shape the Platform", desc: "Vote on features and influence the roadmap" },
    Feature { icon: "💎", title: "Reserved Username", desc: "Claim your perfect username now" },
    Feature { icon: "🚀", title: "Priority Support", desc: "Direct line to our team for life" },
    Feature { icon: "🔓", title: "Beta Access", desc: "First to try new features and tournaments" },
];

pub const COMMAND_CENTER: &[Feature] = &[
    Feature {
        icon: "🧬",
        title: "AI-Powered Profile",
        desc: "Your dynamic resume with verified stats, achievements, and tournament history.",
    },
    Feature {
        icon: "💸",
        title: "Creator Monetization Hub",
        desc: "Launch subscriptions, offer coaching, and build a reliable income. You keep 80%.",
    },
    Feature {
        icon: "🔭",
        title: "Career & Scouting Hub",
        desc: "Get direct access to esports orgs and sponsors looking for verified talent.",
    },
    Feature {
        icon: "🤝",
        title: "Intelligent Matchmaking",
        desc: "Our AI finds you the perfect teammates based on skill, playstyle, and ambition.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Role {
    pub title: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

pub const ROLES: &[Role] = &[
    Role {
        title: "The Pro Player",
        desc: "Your verified profile is your resume. Get scouted by top teams based on real performance data and land your dream contract.",
        image: "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800&auto=format&fit=crop&q=80",
    },
    Role {
        title: "The Team Manager",
        desc: "Build your dynasty. Showcase your team's achievements, recruit verified talent with our scouting tools, and attract sponsors.",
        image: "https://images.unsplash.com/photo-1560253023-3ec5d502959f?w=800&auto=format&fit=crop&q=80",
    },
    Role {
        title: "The Superstar",
        desc: "Monetize your influence. Launch a subscription page, offer exclusive content, and build a reliable income stream. You keep 80%.",
        image: "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=800&auto=format&fit=crop&q=80",
    },
    Role {
        title: "The Community Gamer",
        desc: "Find your squad. Our AI matchmaking helps you connect with non-toxic players who share your passion, playstyle, and goals.",
        image: "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=800&auto=format&fit=crop&q=80",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Scouting new talent has always been messy. Gamerie's AI-driven profiles and salary estimations make it so much easier to identify rising players and evaluate their potential fairly.",
        author: "Christiana Thanou",
        location: "Athens, Greece",
    },
    Testimonial {
        quote: "What excites me about Gamerie is not just the social features, but the career engine behind it. This platform can redefine how gamers connect with teams, sponsors, and opportunities.",
        author: "Ilias Avgeropoulos",
        location: "Kemi, Finland",
    },
    Testimonial {
        quote: "Finally, a platform that treats gamers like professionals. With Gamerie I can showcase my stats, achievements, and even get noticed by real teams. It feels like LinkedIn, but made for us.",
        author: "Purity Murity",
        location: "Nairobi, Kenya",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is Gamerie?",
        answer: &[AnswerBlock::Text(
            "Gamerie is the social media platform built from the ground up for every gamer. This is your space to connect with friends, find teammates for any game, and join communities that share your passion. Create your profile, share your best clips and screenshots, and discover a world of content from players just like you. No matter what or how you play, your community is waiting.",
        )],
    },
    FaqEntry {
        question: "Is it free?",
        answer: &[AnswerBlock::Text(
            "Yep! The main features of Gamerie are totally free to use. If you want to take your game to the next level, we'll have some optional premium tools you can check out later on.",
        )],
    },
    FaqEntry {
        question: "Can I make money as a Gamer?",
        answer: &[
            AnswerBlock::Text("Yes, in two main ways:"),
            AnswerBlock::Lead {
                label: "For Creators:",
                text: "Earn directly from your community with features like tips and profile subscriptions. Our platform will launch with a direct \"Support\" feature for tips, and we're already developing a full Creator Program with profile subscriptions and other monetization options.",
            },
            AnswerBlock::Lead {
                label: "For Competitors:",
                text: "Get discovered. Your verified profile showcases your skills to pro teams and scouts looking for new talent. Perform well, get noticed, and take your shot at a professional contract.",
            },
        ],
    },
    FaqEntry {
        question: "When can I jump in?",
        answer: &[AnswerBlock::Text(
            "Soon, we promise! We're starting to invite our first Founders in Q4 2025 (that's just around the corner!). We're excited to have you, so keep an eye on your email for that invite!",
        )],
    },
    FaqEntry {
        question: "Is there a mobile app coming?",
        answer: &[AnswerBlock::Text(
            "You bet! We will have iOS and Android apps so you can manage your profile, chat with your team, and track your stats from anywhere. They'll be ready shortly after the main website launches.",
        )],
    },
    FaqEntry {
        question: "Is this for solo players or teams?",
        answer: &[AnswerBlock::Text(
            "It's for everyone! Whether you're a solo player looking to improve your skills and find a community, or you've already got a squad ready to compete, Gamerie is the place for you. We're here to support your journey.",
        )],
    },
    FaqEntry {
        question: "How is Gamerie different?",
        answer: &[AnswerBlock::Text(
            "We cut out the noise. Gamerie is a 100% gaming-focused social platform, which means a better feed, better profiles, and better tools to find teammates. It's the gaming community you've always wanted, without the distractions of other social networks.",
        )],
    },
];
