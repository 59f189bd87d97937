use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gamerie::colors::Painter;
use gamerie::commands;
use gamerie::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let painter = Painter::new(cli.color);

    match run(cli.command, painter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", painter.error("error:"));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, painter: Painter) -> Result<()> {
    match command {
        Command::Render(args) => {
            let rendered = commands::render(&args)?;
            info!(out = %args.out.display(), "render complete");
            println!("{}", painter.path(&rendered.landing.display().to_string()));
            println!("{}", painter.path(&rendered.thank_you.display().to_string()));
        }
        Command::Links(args) => println!("{}", commands::links(&args, painter)?),
        Command::Simulate(args) => {
            commands::simulate(&args, painter).await?;
        }
        Command::Count(args) => println!("{}", commands::count(&args, painter)?),
    }
    Ok(())
}
