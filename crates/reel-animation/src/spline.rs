//! Fling deceleration curve and distance/duration calculator.
//!
//! The curve is the one Android's `Scroller` uses for flings: a cubic Bezier
//! sampled into a lookup table, so a fling of any velocity follows the same
//! normalized distance-over-time shape and only its total distance and
//! duration scale with the release velocity.

use std::sync::LazyLock;

/// Tension curve inflection point.
const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

/// Number of segments in the lookup table.
pub const SPLINE_SAMPLES: usize = 100;

/// Earth's gravity in SI units (m/s²).
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter.
const INCHES_PER_METER: f32 = 39.37;
/// `ln(0.78) / ln(0.9)`.
const DECELERATION_RATE: f64 = 2.358_201_6;

/// Normalized distance covered at each table sample, from 0.0 to 1.0.
static DISTANCE_TABLE: LazyLock<[f32; SPLINE_SAMPLES + 1]> = LazyLock::new(build_distance_table);

fn build_distance_table() -> [f32; SPLINE_SAMPLES + 1] {
    let mut table = [0.0f32; SPLINE_SAMPLES + 1];
    // The bisection lower bound only moves forward: alpha increases with i.
    let mut lower = 0.0f32;

    for (i, slot) in table.iter_mut().enumerate().take(SPLINE_SAMPLES) {
        let alpha = i as f32 / SPLINE_SAMPLES as f32;
        let mut upper = 1.0f32;
        let (x, coef) = loop {
            let mid = lower + (upper - lower) / 2.0;
            let c = 3.0 * mid * (1.0 - mid);
            let t = c * ((1.0 - mid) * P1 + mid * P2) + mid * mid * mid;
            if (t - alpha).abs() < 1e-5 {
                break (mid, c);
            }
            if t > alpha {
                upper = mid;
            } else {
                lower = mid;
            }
        };
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }
    table[SPLINE_SAMPLES] = 1.0;
    table
}

/// One sample of the fling curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Fraction of the total fling distance covered, 0.0..=1.0.
    pub distance: f32,
    /// Slope of the curve at this point (normalized velocity).
    pub velocity: f32,
}

/// Samples the fling curve at normalized time `t` (clamped to 0.0..=1.0).
pub fn sample(t: f32) -> SplineSample {
    let t = t.clamp(0.0, 1.0);
    let index = (SPLINE_SAMPLES as f32 * t) as usize;
    if index >= SPLINE_SAMPLES {
        return SplineSample {
            distance: 1.0,
            velocity: 0.0,
        };
    }

    let t_inf = index as f32 / SPLINE_SAMPLES as f32;
    let t_sup = (index + 1) as f32 / SPLINE_SAMPLES as f32;
    let d_inf = DISTANCE_TABLE[index];
    let d_sup = DISTANCE_TABLE[index + 1];
    let velocity = (d_sup - d_inf) / (t_sup - t_inf);
    SplineSample {
        distance: d_inf + (t - t_inf) * velocity,
        velocity,
    }
}

/// Physical deceleration for a given friction and screen density.
fn physical_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Computes how far and how long a fling travels for a release velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// Friction the platform scroller starts with.
    pub const PLATFORM_FRICTION: f32 = 0.015;

    /// Creates a calculator for `friction` at screen `density` (1.0 = 160 dpi).
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: physical_deceleration(0.84, density),
        }
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    fn log_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64
            / (self.friction * self.physical_coefficient) as f64)
            .ln()
    }

    /// Duration of a fling in milliseconds. Zero velocity yields zero.
    pub fn duration_ms(&self, velocity: f32) -> i64 {
        if velocity == 0.0 {
            return 0;
        }
        let l = self.log_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as i64
    }

    /// Unsigned distance in pixels a fling travels before coming to rest.
    pub fn distance(&self, velocity: f32) -> f64 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.log_deceleration(velocity);
        (self.friction * self.physical_coefficient) as f64
            * (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp()
    }
}
