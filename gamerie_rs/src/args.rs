//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::colors::ColorMode;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "gamerie.toml";

#[derive(Parser, Debug)]
#[command(name = "gamerie")]
#[command(about = "Render, inspect and simulate the Gamérie waitlist landing page")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the landing and thank-you pages to static HTML
    Render(RenderArgs),
    /// Print the resolved external links
    Links(LinksArgs),
    /// Play the mock waitlist submission for an email, in real time
    Simulate(SimulateArgs),
    /// Print every value the joined-gamers counter shows
    Count(CountArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Site config file [default: ./gamerie.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Require the hosted form (fails when no form action is configured)
    #[arg(long)]
    pub hosted: bool,

    /// Copyright year [default: current year]
    #[arg(long)]
    pub year: Option<i32>,

    /// Seed for the thank-you particle layout
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct LinksArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Address to submit
    pub email: String,

    /// Simulated network latency in ms
    #[arg(long, default_value_t = 900)]
    pub pending_ms: u64,

    /// How long the success notice stays up, in ms
    #[arg(long, default_value_t = 3_500)]
    pub notice_ms: u64,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Final value [default: from config]
    #[arg(long)]
    pub target: Option<u64>,

    /// Number of steps [default: from config]
    #[arg(long)]
    pub steps: Option<u32>,

    /// Total animation time in ms [default: from config]
    #[arg(long)]
    pub duration_ms: Option<u64>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print JSON instead of one frame per line
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["gamerie", "render"]).expect("parse");
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.out, PathBuf::from("dist"));
        assert!(!args.hosted);
        assert!(args.config.config.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gamerie", "count", "--steps", "4", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.log_level, "debug");
        let Command::Count(args) = cli.command else {
            panic!("expected count");
        };
        assert_eq!(args.steps, Some(4));
    }

    #[test]
    fn simulate_requires_email() {
        assert!(Cli::try_parse_from(["gamerie", "simulate"]).is_err());
    }
}
