//! Physics features that depend on the host platform.
//!
//! Older hosts cannot tune scroller friction or read back the true velocity
//! of a running fling. Instead of checking the platform level at every call
//! site, the list picks one [`PhysicsCapabilities`] implementation up front
//! with [`detect_capabilities`].

use crate::scroller::Scroller;

/// Platform level that introduced adjustable scroller friction.
pub const FRICTION_PLATFORM_LEVEL: u32 = 11;
/// Platform level that introduced reading the current fling velocity.
pub const VELOCITY_PLATFORM_LEVEL: u32 = 14;

/// Edge-absorb velocity used when the host cannot report the real one.
pub const DEFAULT_ABSORB_VELOCITY: f32 = 30.0;

/// Host-dependent physics operations.
pub trait PhysicsCapabilities: std::fmt::Debug {
    /// Applies `friction` to the scroller if the host supports it.
    fn apply_friction(&self, scroller: &mut Scroller, friction: f32);

    /// Velocity to hand to an edge glow when a fling hits a boundary.
    fn absorb_velocity(&self, scroller: &Scroller) -> f32;

    fn name(&self) -> &'static str;
}

/// No friction control, fixed absorb velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineCapabilities;

impl PhysicsCapabilities for BaselineCapabilities {
    fn apply_friction(&self, _scroller: &mut Scroller, friction: f32) {
        log::debug!("friction {friction} ignored: host cannot adjust it");
    }

    fn absorb_velocity(&self, _scroller: &Scroller) -> f32 {
        DEFAULT_ABSORB_VELOCITY
    }

    fn name(&self) -> &'static str {
        "baseline"
    }
}

/// Adjustable friction, fixed absorb velocity.
#[derive(Debug, Clone, Copy)]
pub struct AdjustableFriction {
    _level: u32,
}

impl AdjustableFriction {
    /// # Panics
    ///
    /// Panics if `level` is below [`FRICTION_PLATFORM_LEVEL`]. Constructing this
    /// strategy on an older host is a caller bug.
    pub fn new(level: u32) -> Self {
        assert!(
            level >= FRICTION_PLATFORM_LEVEL,
            "adjustable friction needs platform level {FRICTION_PLATFORM_LEVEL}, host is {level}"
        );
        Self { _level: level }
    }
}

impl PhysicsCapabilities for AdjustableFriction {
    fn apply_friction(&self, scroller: &mut Scroller, friction: f32) {
        scroller.set_friction(friction);
    }

    fn absorb_velocity(&self, _scroller: &Scroller) -> f32 {
        DEFAULT_ABSORB_VELOCITY
    }

    fn name(&self) -> &'static str {
        "adjustable-friction"
    }
}

/// Adjustable friction and the real fling velocity.
#[derive(Debug, Clone, Copy)]
pub struct FullCapabilities {
    _level: u32,
}

impl FullCapabilities {
    /// # Panics
    ///
    /// Panics if `level` is below [`VELOCITY_PLATFORM_LEVEL`].
    pub fn new(level: u32) -> Self {
        assert!(
            level >= VELOCITY_PLATFORM_LEVEL,
            "fling velocity readout needs platform level {VELOCITY_PLATFORM_LEVEL}, host is {level}"
        );
        Self { _level: level }
    }
}

impl PhysicsCapabilities for FullCapabilities {
    fn apply_friction(&self, scroller: &mut Scroller, friction: f32) {
        scroller.set_friction(friction);
    }

    fn absorb_velocity(&self, scroller: &Scroller) -> f32 {
        scroller.current_velocity().abs()
    }

    fn name(&self) -> &'static str {
        "full"
    }
}

/// Picks the richest strategy the host supports. `None` means a modern host.
pub fn detect_capabilities(platform_level: Option<u32>) -> Box<dyn PhysicsCapabilities> {
    match platform_level {
        None => Box::new(FullCapabilities::new(VELOCITY_PLATFORM_LEVEL)),
        Some(level) if level >= VELOCITY_PLATFORM_LEVEL => Box::new(FullCapabilities::new(level)),
        Some(level) if level >= FRICTION_PLATFORM_LEVEL => {
            Box::new(AdjustableFriction::new(level))
        }
        Some(_) => Box::new(BaselineCapabilities),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_clock::SystemFrameClock;
    use std::rc::Rc;

    fn scroller() -> Scroller {
        Scroller::new(Rc::new(SystemFrameClock::new()), 1.0)
    }

    #[test]
    fn detection_follows_platform_level() {
        assert_eq!(detect_capabilities(None).name(), "full");
        assert_eq!(detect_capabilities(Some(21)).name(), "full");
        assert_eq!(detect_capabilities(Some(14)).name(), "full");
        assert_eq!(detect_capabilities(Some(13)).name(), "adjustable-friction");
        assert_eq!(detect_capabilities(Some(11)).name(), "adjustable-friction");
        assert_eq!(detect_capabilities(Some(10)).name(), "baseline");
    }

    #[test]
    fn baseline_keeps_platform_friction() {
        let mut s = scroller();
        BaselineCapabilities.apply_friction(&mut s, 0.009);
        assert_eq!(s.friction(), crate::spline::FlingCalculator::PLATFORM_FRICTION);
        assert_eq!(BaselineCapabilities.absorb_velocity(&s), DEFAULT_ABSORB_VELOCITY);
    }

    #[test]
    fn adjustable_friction_applies() {
        let mut s = scroller();
        AdjustableFriction::new(11).apply_friction(&mut s, 0.009);
        assert_eq!(s.friction(), 0.009);
    }

    #[test]
    fn full_reports_real_velocity() {
        let mut s = scroller();
        s.fling(0, -1500.0, 0, 10_000);
        let caps = FullCapabilities::new(14);
        assert_eq!(caps.absorb_velocity(&s), 1500.0);
    }

    #[test]
    #[should_panic(expected = "platform level")]
    fn gated_constructor_rejects_old_host() {
        let _ = FullCapabilities::new(13);
    }
}
