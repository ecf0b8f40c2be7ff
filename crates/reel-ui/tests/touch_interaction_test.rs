//! Pointer input end to end: taps, long presses, drags and flings fed as raw
//! events through gesture recognition into the list.

use reel_animation::FlingCalculator;
use reel_foundation::GlowState;
use reel_testing::prelude::*;
use reel_ui::DEFAULT_FLING_FRICTION as DEFAULT_FRICTION;

fn strip() -> ListHarness {
    ListHarness::with_config(
        TestAdapter::uniform(100, 50),
        Viewport::new(320, 100),
        ListConfig::default().with_divider_width(2),
    )
}

/// Twelve items: the bound (302) is not known until the list scrolls.
fn short_strip(config: ListConfig) -> ListHarness {
    ListHarness::with_config(
        TestAdapter::uniform(12, 50),
        Viewport::new(320, 100),
        config.with_divider_width(2),
    )
}

fn item_pressed(harness: &ListHarness, index: usize) -> bool {
    harness
        .list
        .window()
        .get(index)
        .is_some_and(|item| item.instance().is_pressed())
}

#[test]
fn tap_on_item_reports_its_index_and_id() {
    let mut harness = strip();

    harness.tap(180.0);

    assert_eq!(
        harness.events.events(),
        vec![ListEvent::ItemClick {
            index: 3,
            id: ID_BASE + 3,
        }]
    );
    assert!(!item_pressed(&harness, 3));
}

#[test]
fn tap_falls_back_to_plain_click_without_item_listener() {
    let mut harness = strip();
    harness.list.listeners_mut().set_item_click(None);

    harness.tap(180.0);

    assert_eq!(harness.events.count(&ListEvent::Click), 1);
    assert!(harness.events.item_clicks().is_empty());
}

#[test]
fn tap_past_the_last_item_is_a_plain_click() {
    let mut harness = ListHarness::new(TestAdapter::uniform(3, 50), Viewport::new(320, 100));

    harness.tap(250.0);

    assert_eq!(harness.events.events(), vec![ListEvent::Click]);
}

#[test]
fn press_highlights_until_the_finger_moves() {
    let mut harness = strip();
    let invalidations = harness.list.host().invalidations;

    harness.press(180.0);
    assert!(item_pressed(&harness, 3));
    assert_eq!(harness.list.touch().pressed_index(), Some(3));
    assert!(harness.list.host().invalidations > invalidations);

    harness.move_to(150.0);
    assert!(!item_pressed(&harness, 3));
    assert_eq!(harness.list.touch().pressed_index(), None);
    harness.release();
    assert!(harness.events.item_clicks().is_empty());
}

#[test]
fn long_press_reports_item_and_gives_haptic_feedback() {
    let mut harness = strip();

    harness.long_press(180.0);

    assert_eq!(
        harness.events.events(),
        vec![ListEvent::ItemLongClick {
            index: 3,
            id: ID_BASE + 3,
        }]
    );
    assert_eq!(harness.list.host().haptics, 1);
    assert!(!item_pressed(&harness, 3));
}

#[test]
fn unhandled_long_press_gives_no_haptic_feedback() {
    let mut harness = strip();
    harness.events.set_long_click_handled(false);

    harness.long_press(180.0);

    assert_eq!(harness.events.events().len(), 1);
    assert_eq!(harness.list.host().haptics, 0);
}

#[test]
fn fling_reports_states_and_decelerates_to_rest() {
    let mut harness = strip();

    harness.fling(300.0, 100.0);
    assert_eq!(harness.list.scroll_state(), ScrollState::Fling);

    let mut last_step = i32::MAX;
    let mut previous = harness.list.current_x();
    let mut frames = 0;
    while harness.list.scroll_state() == ScrollState::Fling {
        harness.frame();
        let step = harness.list.current_x() - previous;
        assert!(step >= 0, "fling reversed at frame {frames}");
        assert!(step <= last_step + 2, "fling sped up at frame {frames}");
        last_step = step;
        previous = harness.list.current_x();
        frames += 1;
        assert!(frames < 500, "fling never settled");
    }

    assert!(harness.list.current_x() > 200);
    assert_eq!(
        harness.events.scroll_states(),
        vec![
            ScrollState::TouchScroll,
            ScrollState::Fling,
            ScrollState::Idle,
        ]
    );
}

#[test]
fn slow_release_does_not_fling() {
    let mut harness = strip();

    harness.drag(300.0, 100.0, 10);

    assert_eq!(harness.list.scroll_state(), ScrollState::Idle);
    assert!(!harness.list.driver().is_moving());
    assert_eq!(harness.list.current_x(), 200);
}

#[test]
fn press_that_catches_a_fling_stops_it_and_swallows_the_tap() {
    let mut harness = strip();
    harness.fling(300.0, 100.0);
    for _ in 0..3 {
        harness.frame();
    }
    assert!(harness.list.driver().is_moving());

    harness.tap(180.0);
    let held = harness.list.current_x();

    assert!(harness.list.touch().is_blocked());
    assert_eq!(harness.list.scroll_state(), ScrollState::Idle);
    assert!(harness.events.item_clicks().is_empty());
    assert_eq!(harness.events.count(&ListEvent::Click), 0);

    harness.settle();
    assert_eq!(harness.list.current_x(), held);

    // The next press starts fresh.
    harness.tap(180.0);
    assert!(!harness.list.touch().is_blocked());
    assert_eq!(harness.events.item_clicks().len(), 1);
}

#[test]
fn scrollable_ancestor_is_locked_out_during_a_drag() {
    let mut harness = ListHarness::with_host(
        TestAdapter::uniform(100, 50),
        Viewport::new(320, 100),
        ListConfig::default(),
        RecordingHost::with_scrollable_ancestor(),
    );

    harness.press(300.0);
    harness.move_to(250.0);
    assert!(harness.list.touch().is_disallowing_intercept());
    harness.move_to(200.0);
    harness.pause(100);
    harness.release();

    assert_eq!(harness.list.host().intercept_requests, vec![true, false]);
    assert!(!harness.list.touch().is_disallowing_intercept());
}

#[test]
fn cancel_returns_the_touch_stream_to_the_ancestor() {
    let mut harness = ListHarness::with_host(
        TestAdapter::uniform(100, 50),
        Viewport::new(320, 100),
        ListConfig::default(),
        RecordingHost::with_scrollable_ancestor(),
    );

    harness.press(300.0);
    harness.move_to(250.0);
    harness.cancel();

    assert_eq!(harness.list.host().intercept_requests, vec![true, false]);
    assert!(!harness.list.touch().is_disallowing_intercept());
    assert!(harness.events.item_clicks().is_empty());
}

#[test]
fn without_ancestor_the_lock_is_requested_again_on_every_scroll() {
    let mut harness = strip();

    harness.drag(300.0, 100.0, 10);

    let requests = &harness.list.host().intercept_requests;
    assert_eq!(requests.len(), 10);
    assert!(requests.iter().all(|disallow| *disallow));
    assert!(!harness.list.touch().is_disallowing_intercept());
}

#[test]
fn dragging_past_the_start_pulls_the_left_glow() {
    let mut harness = strip();

    harness.press(100.0);
    harness.move_to(140.0);

    assert_eq!(harness.list.current_x(), 0);
    let glows = harness.list.edge_glows().expect("glows enabled");
    let left = glows.glow(Edge::Left);
    assert_eq!(left.state(), GlowState::Pull);
    assert_approx_eq(left.amount(), 40.0 / 320.0, 1e-6, "left pull");
    assert!(glows.glow(Edge::Right).is_finished());

    harness.pause(100);
    harness.release();
    let glows = harness.list.edge_glows().expect("glows enabled");
    assert_eq!(glows.glow(Edge::Left).state(), GlowState::Recede);

    harness.settle();
    let glows = harness.list.edge_glows().expect("glows enabled");
    assert!(glows.is_finished());
    assert_eq!(glows.glow(Edge::Left).amount(), 0.0);
}

#[test]
fn dragging_past_the_end_pulls_the_right_glow() {
    let mut harness = strip();
    harness.list.scroll_to(10_000);
    harness.settle();

    harness.press(100.0);
    harness.move_to(60.0);

    assert_eq!(harness.list.current_x(), 4878);
    let glows = harness.list.edge_glows().expect("glows enabled");
    assert_eq!(glows.glow(Edge::Right).state(), GlowState::Pull);
    assert_approx_eq(glows.glow(Edge::Right).amount(), 0.125, 1e-6, "right pull");
}

#[test]
fn fling_into_a_late_bound_is_absorbed_by_the_glow() {
    let mut harness = short_strip(ListConfig::default());
    assert_eq!(harness.list.max_x(), None);

    harness.fling(300.0, 100.0);
    let mut clamped = None;
    for _ in 0..200 {
        let report = harness.frame();
        if report.clamped.is_some() {
            clamped = report.clamped;
            break;
        }
    }

    assert_eq!(clamped, Some(Edge::Right));
    assert_eq!(harness.list.max_x(), Some(12 * 52 - 2 - 320));
    assert_eq!(harness.list.current_x(), 302);
    assert_eq!(harness.list.scroll_state(), ScrollState::Idle);
    assert!(!harness.list.driver().is_moving());
    let glows = harness.list.edge_glows().expect("glows enabled");
    assert_eq!(glows.glow(Edge::Right).state(), GlowState::Absorb);

    harness.settle();
    assert!(harness.list.driver().overscroll().is_finished());
    assert_eq!(harness.list.current_x(), 302);
}

#[test]
fn physics_follow_platform_capabilities() {
    let full = short_strip(ListConfig::default());
    assert_eq!(full.list.driver().capabilities().name(), "full");
    assert_eq!(full.list.driver().scroller().friction(), DEFAULT_FRICTION);

    let adjustable = short_strip(ListConfig::default().with_platform_level(11));
    assert_eq!(
        adjustable.list.driver().capabilities().name(),
        "adjustable-friction"
    );
    assert_eq!(adjustable.list.driver().scroller().friction(), DEFAULT_FRICTION);

    let baseline = short_strip(ListConfig::default().with_platform_level(9));
    assert_eq!(baseline.list.driver().capabilities().name(), "baseline");
    assert_eq!(
        baseline.list.driver().scroller().friction(),
        FlingCalculator::PLATFORM_FRICTION
    );
}

#[test]
fn platform_friction_flings_stop_sooner() {
    let travel = |config: ListConfig| {
        let mut harness = ListHarness::with_config(
            TestAdapter::uniform(500, 50),
            Viewport::new(320, 100),
            config,
        );
        harness.fling(300.0, 100.0);
        harness.settle();
        harness.list.current_x()
    };

    let glide = travel(ListConfig::default());
    let platform = travel(ListConfig::default().with_platform_level(9));
    assert!(platform < glide, "{platform} should stop before {glide}");
}

#[test]
fn pointer_down_requests_a_frame() {
    let mut harness = strip();
    let before = harness.list.host().frames_requested;

    harness.press(10.0);

    assert!(harness.list.host().frames_requested > before);
}
