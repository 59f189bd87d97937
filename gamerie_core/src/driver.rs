//! Tokio driver for the mock submission timeline.
//!
//! Used by `gamerie simulate` and by tests running on a paused clock. Dropping
//! the future cancels whatever timer is outstanding; the form keeps whatever
//! state it reached.

use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::waitlist::{SubmitOutcome, Timings, Waitlist, WaitlistSnapshot};
use crate::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct MockSubmitter {
    timings: Timings,
}

impl MockSubmitter {
    pub fn new(timings: Timings) -> Self {
        Self { timings }
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Submit `form` and play the whole timeline, reporting the elapsed time
    /// and a snapshot after every transition.
    ///
    /// Empty input returns `Ignored` without calling `observe`.
    pub async fn run<F>(&self, form: &mut Waitlist, mut observe: F) -> Result<SubmitOutcome>
    where
        F: FnMut(Duration, &WaitlistSnapshot),
    {
        let started = Instant::now();
        let outcome = form.submit()?;
        if outcome == SubmitOutcome::Ignored {
            return Ok(outcome);
        }
        observe(started.elapsed(), &form.snapshot());

        sleep(self.timings.pending).await;
        let Some(generation) = form.finish_pending() else {
            return Ok(outcome);
        };
        observe(started.elapsed(), &form.snapshot());

        sleep(self.timings.notice).await;
        form.expire_notice(generation);
        observe(started.elapsed(), &form.snapshot());

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::{Phase, SUCCESS_MESSAGE};

    #[tokio::test(start_paused = true)]
    async fn plays_idle_pending_idle() {
        let mut form = Waitlist::new();
        form.set_input("gamer@game.gg");

        let mut seen = Vec::new();
        let outcome = MockSubmitter::default()
            .run(&mut form, |at, snap| seen.push((at, snap.clone())))
            .await
            .expect("run");

        assert!(matches!(outcome, SubmitOutcome::Started(_)));
        assert_eq!(seen.len(), 3);

        assert_eq!(seen[0].0, Duration::ZERO);
        assert_eq!(seen[0].1.phase, Phase::Pending);

        assert_eq!(seen[1].0, Duration::from_millis(900));
        assert_eq!(seen[1].1.phase, Phase::Idle);
        assert_eq!(seen[1].1.input, "");
        assert_eq!(seen[1].1.notice_text(), Some(SUCCESS_MESSAGE));

        assert_eq!(seen[2].0, Duration::from_millis(4_400));
        assert_eq!(seen[2].1.notice, None);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_email_never_goes_pending() {
        let mut form = Waitlist::new();
        let mut calls = 0;
        let outcome = MockSubmitter::default()
            .run(&mut form, |_, _| calls += 1)
            .await
            .expect("run");

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(calls, 0);
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_email_is_an_error() {
        let mut form = Waitlist::new();
        form.set_input("gamer.game.gg");
        let result = MockSubmitter::default().run(&mut form, |_, _| {}).await;
        assert!(result.is_err());
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_run_leaves_notice_up() {
        let mut form = Waitlist::new();
        form.set_input("gamer@game.gg");

        let submitter = MockSubmitter::default();
        let run = submitter.run(&mut form, |_, _| {});
        let timed_out = tokio::time::timeout(Duration::from_millis(1_000), run).await;
        assert!(timed_out.is_err());

        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.notice().map(|n| n.text.as_str()), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn custom_timings_are_respected() {
        let mut form = Waitlist::new();
        form.set_input("gamer@game.gg");
        let timings = Timings {
            pending: Duration::from_millis(10),
            notice: Duration::from_millis(20),
        };

        let mut stamps = Vec::new();
        MockSubmitter::new(timings)
            .run(&mut form, |at, _| stamps.push(at))
            .await
            .expect("run");

        assert_eq!(
            stamps,
            vec![Duration::ZERO, Duration::from_millis(10), Duration::from_millis(30)]
        );
    }
}
