//! Easing used for programmatic scrolls.

/// Strength of the viscous effect.
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// Unscaled viscous-fluid curve: exponential ease-in up to 1.0, then an
/// exponential approach to 1.0.
fn viscous_fluid_raw(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        let start = 0.367_879_44; // 1/e == exp(-1)
        let x = 1.0 - (1.0 - x).exp();
        start + x * (1.0 - start)
    }
}

/// Viscous-fluid interpolation of normalized time `t` in `0.0..=1.0`.
///
/// The curve is normalized so that `viscous_fluid(1.0) == 1.0` and then
/// offset so that `viscous_fluid(0.0) == 0.0`.
pub fn viscous_fluid(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let normalize = 1.0 / viscous_fluid_raw(1.0);
    let offset = 1.0 - normalize * viscous_fluid_raw(1.0);
    let value = normalize * viscous_fluid_raw(t) + offset;
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_pinned() {
        assert_eq!(viscous_fluid(0.0), 0.0);
        assert!((viscous_fluid(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn monotonic_between_endpoints() {
        let mut prev = 0.0;
        for i in 0..=50 {
            let v = viscous_fluid(i as f32 / 50.0);
            assert!(v >= prev, "curve went backwards at step {i}");
            prev = v;
        }
    }
}
