//! Count-up animation for the "N+ gamers already joined" badge.
//!
//! The counter climbs from 0 toward a fixed target in equal steps of
//! `ceil(target / steps)`, one step per `duration / steps`, clamped so the
//! target is never overshot. Once it lands on the target it stops.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How far and how fast the counter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub target: u64,
    pub duration_ms: u64,
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            target: 28_700,
            duration_ms: 2_000,
            steps: 60,
        }
    }
}

impl CounterConfig {
    pub fn new(target: u64, duration: Duration, steps: u32) -> Result<Self> {
        let config = Self {
            target,
            duration_ms: duration.as_millis() as u64,
            steps,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(Error::InvalidCounter);
        }
        Ok(())
    }

    /// Size of one step, rounded up.
    pub fn increment(&self) -> u64 {
        self.target.div_ceil(u64::from(self.steps.max(1)))
    }

    /// Delay between two ticks.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.duration_ms) / self.steps.max(1)
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTick {
    pub value: u64,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    config: CounterConfig,
    increment: u64,
    current: u64,
    done: bool,
}

impl Counter {
    pub fn new(config: CounterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            increment: config.increment(),
            config,
            current: 0,
            done: false,
        })
    }

    /// A counter already sitting on `value`, used when rendering a fixed frame.
    pub fn at(config: CounterConfig, value: u64) -> Result<Self> {
        let mut counter = Self::new(config)?;
        counter.current = value.min(config.target);
        counter.done = counter.current >= config.target && value > 0;
        Ok(counter)
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one step. A finished counter keeps reporting its final value.
    pub fn tick(&mut self) -> CounterTick {
        if !self.done {
            self.current = self
                .config
                .target
                .min(self.current.saturating_add(self.increment));
            self.done = self.current >= self.config.target;
            if self.done {
                tracing::debug!(target = self.config.target, "counter reached target");
            }
        }
        CounterTick {
            value: self.current,
            done: self.done,
        }
    }

    /// Every value the badge displays, from the first tick through the target.
    pub fn frames(&self) -> Frames {
        Frames {
            counter: self.clone(),
        }
    }
}

/// Iterator over the remaining displayed values. See [`Counter::frames`].
pub struct Frames {
    counter: Counter,
}

impl Iterator for Frames {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.counter.is_done() {
            return None;
        }
        Some(self.counter.tick().value)
    }
}

/// Format with comma thousands separators, as the badge shows it.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
