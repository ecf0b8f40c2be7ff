//! Turns raw pointer events into list gestures.
//!
//! The detector is a small state machine over one pointer. Scrolls start once
//! the pointer leaves the touch-slop circle around the press; a release inside
//! the circle is a tap, a release outside it may be a fling. Long presses are
//! time-based, so the owner polls [`GestureDetector::on_frame`] while a
//! pointer is down.

use smallvec::SmallVec;

use crate::geometry::Point;
use crate::gesture_constants::{
    LONG_PRESS_TIMEOUT_MS, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, TOUCH_SLOP,
};
use crate::input::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    pub long_press_timeout_ms: i64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            long_press_timeout_ms: LONG_PRESS_TIMEOUT_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Down(Point),
    /// Pointer movement since the previous scroll, as `previous - current`:
    /// positive `distance_x` means the finger moved left.
    Scroll { distance_x: f32, distance_y: f32 },
    /// Release velocity in px/s, positive when the finger moved right.
    Fling { velocity_x: f32, velocity_y: f32 },
    SingleTapConfirmed(Point),
    LongPress(Point),
    Up,
    Cancel,
}

pub type Gestures = SmallVec<[Gesture; 2]>;

#[derive(Clone, Copy, Debug)]
struct Press {
    origin: Point,
    time_ms: i64,
}

#[derive(Debug, Default)]
pub struct GestureDetector {
    config: GestureConfig,
    press: Option<Press>,
    last: Point,
    in_tap_region: bool,
    in_long_press: bool,
    tracker_x: VelocityTracker,
    tracker_y: VelocityTracker,
}

impl GestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether a pointer is currently down.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Gestures {
        let mut out = Gestures::new();
        let position = event.position;
        match event.kind {
            PointerEventKind::Down => {
                self.tracker_x.reset();
                self.tracker_y.reset();
                self.track(event);
                self.press = Some(Press {
                    origin: position,
                    time_ms: event.time_ms,
                });
                self.last = position;
                self.in_tap_region = true;
                self.in_long_press = false;
                out.push(Gesture::Down(position));
            }
            PointerEventKind::Move => {
                let Some(press) = self.press else {
                    return out;
                };
                self.track(event);
                if self.in_long_press {
                    return out;
                }
                let distance_x = self.last.x - position.x;
                let distance_y = self.last.y - position.y;
                if self.in_tap_region {
                    let from_x = position.x - press.origin.x;
                    let from_y = position.y - press.origin.y;
                    let slop = self.config.touch_slop;
                    if from_x * from_x + from_y * from_y > slop * slop {
                        self.in_tap_region = false;
                        self.last = position;
                        out.push(Gesture::Scroll {
                            distance_x,
                            distance_y,
                        });
                    }
                } else if distance_x.abs() >= 1.0 || distance_y.abs() >= 1.0 {
                    self.last = position;
                    out.push(Gesture::Scroll {
                        distance_x,
                        distance_y,
                    });
                }
            }
            PointerEventKind::Up => {
                if self.press.take().is_some() {
                    self.track(event);
                    if self.in_long_press {
                        self.in_long_press = false;
                    } else if self.in_tap_region {
                        out.push(Gesture::SingleTapConfirmed(position));
                    } else {
                        let max = self.config.max_fling_velocity;
                        let velocity_x = self.tracker_x.velocity_with_max(max);
                        let velocity_y = self.tracker_y.velocity_with_max(max);
                        let min = self.config.min_fling_velocity;
                        if velocity_x.abs() > min || velocity_y.abs() > min {
                            out.push(Gesture::Fling {
                                velocity_x,
                                velocity_y,
                            });
                        }
                    }
                }
                out.push(Gesture::Up);
            }
            PointerEventKind::Cancel => {
                self.press = None;
                self.in_tap_region = false;
                self.in_long_press = false;
                out.push(Gesture::Cancel);
            }
        }
        out
    }

    /// Fires a long press once the pointer has been held still long enough.
    pub fn on_frame(&mut self, now_ms: i64) -> Option<Gesture> {
        let press = self.press?;
        if !self.in_tap_region || self.in_long_press {
            return None;
        }
        if now_ms - press.time_ms < self.config.long_press_timeout_ms {
            return None;
        }
        self.in_long_press = true;
        Some(Gesture::LongPress(press.origin))
    }

    fn track(&mut self, event: &PointerEvent) {
        self.tracker_x.add_position(event.time_ms, event.position.x);
        self.tracker_y.add_position(event.time_ms, event.position.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(gestures: &Gestures) -> Vec<&'static str> {
        gestures
            .iter()
            .map(|g| match g {
                Gesture::Down(_) => "down",
                Gesture::Scroll { .. } => "scroll",
                Gesture::Fling { .. } => "fling",
                Gesture::SingleTapConfirmed(_) => "tap",
                Gesture::LongPress(_) => "long",
                Gesture::Up => "up",
                Gesture::Cancel => "cancel",
            })
            .collect()
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut detector = GestureDetector::default();
        assert_eq!(kinds(&detector.on_event(&PointerEvent::down(10.0, 5.0, 0))), ["down"]);
        assert!(detector.on_event(&PointerEvent::moved(13.0, 5.0, 16)).is_empty());
        let out = detector.on_event(&PointerEvent::up(13.0, 5.0, 60));
        assert_eq!(kinds(&out), ["tap", "up"]);
    }

    #[test]
    fn leaving_slop_starts_scrolling() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(100.0, 5.0, 0));
        let out = detector.on_event(&PointerEvent::moved(80.0, 5.0, 16));
        assert_eq!(
            out.as_slice(),
            [Gesture::Scroll {
                distance_x: 20.0,
                distance_y: 0.0
            }]
        );
        let out = detector.on_event(&PointerEvent::moved(70.0, 5.0, 32));
        assert_eq!(
            out.as_slice(),
            [Gesture::Scroll {
                distance_x: 10.0,
                distance_y: 0.0
            }]
        );
        // Sub-pixel jitter is swallowed.
        assert!(detector.on_event(&PointerEvent::moved(69.5, 5.0, 40)).is_empty());
    }

    #[test]
    fn fast_release_flings() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(300.0, 5.0, 0));
        for step in 1..=4 {
            detector.on_event(&PointerEvent::moved(300.0 - step as f32 * 30.0, 5.0, step * 10));
        }
        let out = detector.on_event(&PointerEvent::up(150.0, 5.0, 50));
        assert_eq!(kinds(&out), ["fling", "up"]);
        match out[0] {
            Gesture::Fling { velocity_x, .. } => {
                assert!(velocity_x < -1_000.0, "velocity {velocity_x}");
                assert!(velocity_x >= -MAX_FLING_VELOCITY);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn slow_release_does_not_fling() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(100.0, 5.0, 0));
        detector.on_event(&PointerEvent::moved(80.0, 5.0, 100));
        let out = detector.on_event(&PointerEvent::up(80.0, 5.0, 200));
        assert_eq!(kinds(&out), ["up"]);
    }

    #[test]
    fn long_press_fires_once_and_suppresses_tap() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(10.0, 10.0, 1_000));
        assert_eq!(detector.on_frame(1_200), None);
        assert_eq!(
            detector.on_frame(1_000 + LONG_PRESS_TIMEOUT_MS),
            Some(Gesture::LongPress(Point::new(10.0, 10.0)))
        );
        assert_eq!(detector.on_frame(2_000), None);
        let out = detector.on_event(&PointerEvent::up(10.0, 10.0, 2_100));
        assert_eq!(kinds(&out), ["up"]);
    }

    #[test]
    fn scrolling_cancels_long_press() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(100.0, 10.0, 0));
        detector.on_event(&PointerEvent::moved(50.0, 10.0, 100));
        assert_eq!(detector.on_frame(1_000), None);
    }

    #[test]
    fn cancel_ends_the_gesture() {
        let mut detector = GestureDetector::default();
        detector.on_event(&PointerEvent::down(100.0, 10.0, 0));
        assert_eq!(kinds(&detector.on_event(&PointerEvent::cancel(10))), ["cancel"]);
        assert!(!detector.is_pressed());
        assert!(detector.on_event(&PointerEvent::moved(10.0, 10.0, 20)).is_empty());
    }
}
