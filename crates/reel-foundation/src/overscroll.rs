//! Edge-glow overscroll feedback.
//!
//! Each edge keeps a stretch amount in `0.0..=1.0` that the host renders as a
//! glow. Dragging past a bound pulls the stretch up, lifting the finger lets
//! it recede, and a fling that hits a bound imparts an impulse that rises and
//! then recedes. The model only tracks amounts over time; drawing is the
//! host's business.

use crate::geometry::Edge;

/// How long a released glow takes to fade out.
pub const RECEDE_DURATION_MS: i64 = 600;
/// Absorbed velocities are clamped to this range (px/s).
pub const MIN_ABSORB_VELOCITY: f32 = 100.0;
pub const MAX_ABSORB_VELOCITY: f32 = 10_000.0;

const MAX_STRETCH: f32 = 1.0;
/// Stretch reached per px/s of absorbed velocity.
const ABSORB_STRETCH_PER_VELOCITY: f32 = 1.0 / MAX_ABSORB_VELOCITY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowState {
    Idle,
    Pull,
    Absorb,
    Recede,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    start_ms: i64,
    duration_ms: i64,
}

impl Tween {
    /// Value at `now_ms` and whether the tween has completed.
    fn sample(&self, now_ms: i64) -> (f32, bool) {
        if self.duration_ms <= 0 {
            return (self.to, true);
        }
        let t = ((now_ms - self.start_ms) as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        (self.from + (self.to - self.from) * t, t >= 1.0)
    }
}

/// Glow state for one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGlow {
    state: GlowState,
    amount: f32,
    tween: Option<Tween>,
}

impl Default for EdgeGlow {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeGlow {
    pub fn new() -> Self {
        Self {
            state: GlowState::Idle,
            amount: 0.0,
            tween: None,
        }
    }

    pub fn state(&self) -> GlowState {
        self.state
    }

    /// Current stretch in `0.0..=1.0`.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn is_finished(&self) -> bool {
        self.state == GlowState::Idle
    }

    /// Adds `fraction` of the viewport width worth of stretch.
    pub fn pull(&mut self, fraction: f32) {
        self.state = GlowState::Pull;
        self.tween = None;
        self.amount = (self.amount + fraction.abs()).clamp(0.0, MAX_STRETCH);
    }

    /// Lets a pulled glow fade. Glows that are not being pulled are untouched.
    pub fn release(&mut self, now_ms: i64) {
        if self.state != GlowState::Pull {
            return;
        }
        self.recede(now_ms);
    }

    /// Starts an impulse from a fling hitting this edge at `velocity` px/s.
    pub fn absorb(&mut self, velocity: f32, now_ms: i64) {
        let velocity = velocity.abs().clamp(MIN_ABSORB_VELOCITY, MAX_ABSORB_VELOCITY);
        let peak = (velocity * ABSORB_STRETCH_PER_VELOCITY).max(self.amount).min(MAX_STRETCH);
        self.state = GlowState::Absorb;
        self.tween = Some(Tween {
            from: self.amount,
            to: peak,
            start_ms: now_ms,
            duration_ms: (0.15 + velocity * 0.02).round() as i64,
        });
    }

    /// Advances animation to `now_ms`. Returns `true` while the glow still
    /// needs to be drawn.
    pub fn update(&mut self, now_ms: i64) -> bool {
        match (self.state, self.tween) {
            (GlowState::Absorb, Some(tween)) => {
                let (amount, done) = tween.sample(now_ms);
                self.amount = amount;
                if done {
                    self.recede(now_ms);
                }
            }
            (GlowState::Recede, Some(tween)) => {
                let (amount, done) = tween.sample(now_ms);
                self.amount = amount;
                if done {
                    self.finish();
                }
            }
            (GlowState::Absorb | GlowState::Recede, None) => self.finish(),
            (GlowState::Idle | GlowState::Pull, _) => {}
        }
        !self.is_finished()
    }

    /// Drops straight back to idle.
    pub fn finish(&mut self) {
        self.state = GlowState::Idle;
        self.amount = 0.0;
        self.tween = None;
    }

    fn recede(&mut self, now_ms: i64) {
        self.state = GlowState::Recede;
        self.tween = Some(Tween {
            from: self.amount,
            to: 0.0,
            start_ms: now_ms,
            duration_ms: RECEDE_DURATION_MS,
        });
    }
}

/// The pair of edge glows for a horizontal list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverscrollFeedback {
    left: EdgeGlow,
    right: EdgeGlow,
}

impl OverscrollFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glow(&self, edge: Edge) -> &EdgeGlow {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }

    pub fn glow_mut(&mut self, edge: Edge) -> &mut EdgeGlow {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }

    /// Reacts to a touch scroll of `offset` pixels from `current_x`.
    ///
    /// Pulls the glow of the bound the scroll would cross by
    /// `|offset| / render_width` and releases the opposite one.
    pub fn on_touch_scroll(
        &mut self,
        current_x: i32,
        offset: i32,
        max_x: i32,
        render_width: i32,
        now_ms: i64,
    ) {
        if render_width <= 0 {
            return;
        }
        let next = i64::from(current_x) + i64::from(offset);
        let fraction = offset.unsigned_abs() as f32 / render_width as f32;
        let (pulled, opposite) = if next < 0 {
            (Edge::Left, Edge::Right)
        } else if next > i64::from(max_x) {
            (Edge::Right, Edge::Left)
        } else {
            return;
        };
        self.glow_mut(pulled).pull(fraction);
        let opposite = self.glow_mut(opposite);
        if !opposite.is_finished() {
            opposite.release(now_ms);
        }
    }

    /// Absorbs a fling at `edge` unless that glow is already showing.
    pub fn absorb_at(&mut self, edge: Edge, velocity: f32, now_ms: i64) {
        let glow = self.glow_mut(edge);
        if glow.is_finished() {
            glow.absorb(velocity, now_ms);
        }
    }

    pub fn release_all(&mut self, now_ms: i64) {
        self.left.release(now_ms);
        self.right.release(now_ms);
    }

    /// Advances both glows. Returns `true` while either needs drawing.
    pub fn update(&mut self, now_ms: i64) -> bool {
        let left = self.left.update(now_ms);
        let right = self.right.update(now_ms);
        left || right
    }

    pub fn is_finished(&self) -> bool {
        self.left.is_finished() && self.right.is_finished()
    }

    pub fn reset(&mut self) {
        self.left.finish();
        self.right.finish();
    }
}
