//! Waitlist form lifecycle.
//!
//! The form never talks to a server. A submit flips the form into `Pending`,
//! the caller waits [`Timings::pending`], then calls
//! [`Waitlist::finish_pending`] which clears the input and shows the success
//! notice. After [`Timings::notice`] the caller hands the notice generation
//! back to [`Waitlist::expire_notice`].
//!
//! The state machine owns no timers; the browser uses `setTimeout` and the
//! native driver uses tokio.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const SUCCESS_MESSAGE: &str = "You're on the list! Check your inbox soon.";

/// Submit button label while idle.
pub const JOIN_LABEL: &str = "Join waitlist";
/// Submit button label while the mock request is in flight.
pub const JOINING_LABEL: &str = "Joining...";

/// Fixed delays of the mock submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Simulated network latency.
    pub pending: Duration,
    /// How long the success notice stays up.
    pub notice: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            pending: Duration::from_millis(900),
            notice: Duration::from_millis(3_500),
        }
    }
}

/// An address that passes the same shape check as `<input type="email">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyEmail);
        }
        if !is_valid_email(trimmed) {
            return Err(Error::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Mirrors the HTML living standard "valid email address" production.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    local_ok && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Pending,
}

/// Success message on screen, tagged so late timers can be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing happened: empty input, or a request is already in flight.
    Ignored,
    /// The form went pending for this address.
    Started(Email),
}

/// What the form shows at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSnapshot {
    pub phase: Phase,
    pub input: String,
    pub notice: Option<Notice>,
}

impl WaitlistSnapshot {
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_pending() { JOINING_LABEL } else { JOIN_LABEL }
    }

    pub fn notice_text(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waitlist {
    phase: Phase,
    input: String,
    notice: Option<Notice>,
    generation: u64,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a form from a rendered snapshot.
    pub fn from_snapshot(snapshot: WaitlistSnapshot) -> Self {
        let generation = snapshot.notice.as_ref().map_or(0, |n| n.generation);
        Self {
            phase: snapshot.phase,
            input: snapshot.input,
            notice: snapshot.notice,
            generation,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.input.is_empty() || self.phase == Phase::Pending {
            return Ok(SubmitOutcome::Ignored);
        }
        let email = match Email::parse(&self.input) {
            Ok(email) => email,
            // whitespace-only behaves like an empty field
            Err(Error::EmptyEmail) => return Ok(SubmitOutcome::Ignored),
            Err(err) => return Err(err),
        };
        self.phase = Phase::Pending;
        tracing::debug!(email = %email, "waitlist submission pending");
        Ok(SubmitOutcome::Started(email))
    }

    /// Land the mock request. Returns the generation of the new notice, or
    /// `None` when nothing was pending.
    pub fn finish_pending(&mut self) -> Option<u64> {
        if self.phase != Phase::Pending {
            return None;
        }
        self.phase = Phase::Idle;
        self.input.clear();
        self.generation += 1;
        self.notice = Some(Notice {
            text: SUCCESS_MESSAGE.to_string(),
            generation: self.generation,
        });
        tracing::debug!(generation = self.generation, "waitlist submission accepted");
        Some(self.generation)
    }

    /// Drop the notice if it is still the one shown at `generation`.
    pub fn expire_notice(&mut self, generation: u64) -> bool {
        match &self.notice {
            Some(notice) if notice.generation == generation => {
                self.notice = None;
                tracing::debug!(generation, "success notice dismissed");
                true
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> WaitlistSnapshot {
        WaitlistSnapshot {
            phase: self.phase,
            input: self.input.clone(),
            notice: self.notice.clone(),
        }
    }
}
