use std::time::Duration;

use anyhow::{Context, Result};
use gamerie_core::{Counter, CounterConfig, format_count};
use serde::Serialize;

use super::load_site;
use crate::args::CountArgs;
use crate::colors::Painter;

#[derive(Debug, Serialize)]
struct Frame {
    at_ms: u64,
    value: u64,
    display: String,
}

/// Every frame of the count-up, one per line: `  33 ms  479+`.
pub fn count(args: &CountArgs, painter: Painter) -> Result<String> {
    let base = load_site(&args.config)?.counter;
    let config = CounterConfig::new(
        args.target.unwrap_or(base.target),
        Duration::from_millis(args.duration_ms.unwrap_or(base.duration_ms)),
        args.steps.unwrap_or(base.steps),
    )
    .context("invalid counter settings")?;
    let steps = u64::from(config.steps);

    let frames: Vec<Frame> = Counter::new(config)?
        .frames()
        .zip(1u64..)
        .map(|(value, tick)| Frame {
            // from the total, so rounding never drifts off the last frame
            at_ms: config.duration_ms * tick / steps,
            value,
            display: format!("{}+", format_count(value)),
        })
        .collect();

    if args.json {
        return serde_json::to_string_pretty(&frames).context("serializing frames");
    }
    let width = frames.last().map_or(1, |f| f.at_ms.to_string().len());
    Ok(frames
        .iter()
        .map(|f| format!("{:>width$} ms  {}", f.at_ms, painter.number(&f.display)))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ConfigArgs;
    use crate::colors::ColorMode;

    fn frames(target: u64, steps: u32, duration_ms: u64) -> Vec<serde_json::Value> {
        let args = CountArgs {
            target: Some(target),
            steps: Some(steps),
            duration_ms: Some(duration_ms),
            config: ConfigArgs { config: None },
            json: true,
        };
        let out = count(&args, Painter::new(ColorMode::Never)).expect("count");
        serde_json::from_str(&out).expect("json")
    }

    #[test]
    fn default_run_ends_on_the_duration() {
        let frames = frames(28_700, 60, 2_000);
        assert_eq!(frames.len(), 60);
        assert_eq!(frames[0]["at_ms"], 33);
        assert_eq!(frames[0]["display"], "479+");
        let last = frames.last().expect("frames");
        assert_eq!(last["at_ms"], 2_000);
        assert_eq!(last["display"], "28,700+");
    }

    #[test]
    fn plain_output_pads_times() {
        let args = CountArgs {
            target: Some(1_000),
            steps: Some(4),
            duration_ms: Some(1_000),
            config: ConfigArgs { config: None },
            json: false,
        };
        let out = count(&args, Painter::new(ColorMode::Never)).expect("count");
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![" 250 ms  250+", " 500 ms  500+", " 750 ms  750+", "1000 ms  1,000+"]
        );
    }
}
