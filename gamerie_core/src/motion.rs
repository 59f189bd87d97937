//! Scroll-linked motion and decorative animation math.
//!
//! The browser feeds in scroll offsets and element rects; this module turns
//! them into offsets, opacities and CSS transforms. Nothing here touches the
//! DOM.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Linear map from `input` to `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if (i1 - i0).abs() < f64::EPSILON {
        return if value < i0 { o0 } else { o1 };
    }
    let t = ((value - i0) / (i1 - i0)).clamp(0.0, 1.0);
    o0 + t * (o1 - o0)
}

/// Hero drift: the headline sinks and fades as the page scrolls away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMotion {
    pub y: f64,
    pub opacity: f64,
}

impl HeroMotion {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            y: interpolate(scroll_y, (0.0, 500.0), (0.0, 150.0)),
            opacity: interpolate(scroll_y, (0.0, 300.0), (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.1}px, 0); opacity: {:.3};",
            self.y, self.opacity
        )
    }
}

/// How far a section has travelled through the viewport: 0 when its top
/// touches the viewport bottom, 1 when its bottom leaves the viewport top.
pub fn section_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// A background orb that slides (and optionally spins) with section progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbDrift {
    /// Vertical travel in px over the whole section; negative drifts up.
    pub travel: f64,
    /// Rotation in degrees over the whole section.
    pub rotate: f64,
}

impl OrbDrift {
    pub const fn slide(travel: f64) -> Self {
        Self {
            travel,
            rotate: 0.0,
        }
    }

    pub const fn spin(travel: f64, rotate: f64) -> Self {
        Self { travel, rotate }
    }

    /// `(y_px, rotate_deg)` at `progress`.
    pub fn at(&self, progress: f64) -> (f64, f64) {
        (
            interpolate(progress, (0.0, 1.0), (0.0, self.travel)),
            interpolate(progress, (0.0, 1.0), (0.0, self.rotate)),
        )
    }

    pub fn transform(&self, progress: f64) -> String {
        let (y, rotate) = self.at(progress);
        if self.rotate == 0.0 {
            format!("transform: translate3d(0, {y:.1}px, 0);")
        } else {
            format!("transform: translate3d(0, {y:.1}px, 0) rotate({rotate:.1}deg);")
        }
    }
}

/// Background image rotation behind the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    pub len: usize,
    pub period: Duration,
}

impl Slideshow {
    pub const PERIOD: Duration = Duration::from_secs(6);

    pub fn new(len: usize) -> Self {
        Self {
            len,
            period: Self::PERIOD,
        }
    }

    pub fn next(&self, index: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (index + 1) % self.len
    }

    pub fn index_at(&self, elapsed: Duration) -> usize {
        if self.len == 0 || self.period.is_zero() {
            return 0;
        }
        let ticks = elapsed.as_nanos() / self.period.as_nanos();
        (ticks % self.len as u128) as usize
    }
}

/// One floating dot on the thank-you page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Left offset in percent.
    pub x: f64,
    /// Top offset in percent.
    pub y: f64,
    /// Seconds.
    pub delay: f64,
    /// Seconds.
    pub duration: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x, self.y, self.delay, self.duration
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub const DEFAULT_COUNT: usize = 20;

    /// Same seed, same field.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|id| Particle {
                id,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..2.0),
                duration: 3.0 + rng.random_range(0.0..2.0),
            })
            .collect();
        Self { particles }
    }
}
