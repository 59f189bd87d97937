use std::time::Duration;

use anyhow::{Context, Result};
use gamerie_core::driver::MockSubmitter;
use gamerie_core::{Phase, SubmitOutcome, Timings, Waitlist, WaitlistSnapshot};

use crate::args::SimulateArgs;
use crate::colors::Painter;

/// Play the mock submission for `args.email`, printing every transition as
/// it happens.
pub async fn simulate(args: &SimulateArgs, painter: Painter) -> Result<SubmitOutcome> {
    let timings = Timings {
        pending: Duration::from_millis(args.pending_ms),
        notice: Duration::from_millis(args.notice_ms),
    };
    let mut form = Waitlist::new();
    form.set_input(args.email.as_str());

    let outcome = MockSubmitter::new(timings)
        .run(&mut form, |at, snapshot| {
            println!("{}", format_transition(painter, at, snapshot));
        })
        .await
        .context("submission rejected")?;

    match &outcome {
        SubmitOutcome::Started(email) => tracing::info!(%email, "simulation finished"),
        SubmitOutcome::Ignored => println!("{}", painter.dim("nothing to submit")),
    }
    Ok(outcome)
}

/// `[  900 ms] idle    ✓ You're on the list! ...`
pub fn format_transition(painter: Painter, at: Duration, snapshot: &WaitlistSnapshot) -> String {
    let phase = match snapshot.phase {
        Phase::Pending => painter.warn(&format!("{:<7}", "pending")),
        Phase::Idle => painter.ok(&format!("{:<7}", "idle")),
    };
    let detail = match snapshot.notice_text() {
        Some(text) => painter.accent(&format!("✓ {text}")),
        None if snapshot.is_pending() => snapshot.button_label().to_string(),
        None => painter.dim("notice cleared"),
    };
    format!("[{:>5} ms] {phase} {detail}", at.as_millis())
}
