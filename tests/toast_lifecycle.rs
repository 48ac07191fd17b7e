// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of the toast lifecycle through the public API, driving
//! time with explicit instants so every scenario is deterministic.

use iced_bloom::ui::icons::Glyph;
use iced_bloom::ui::toast::{
    motion, Controller, Effect, Position, Preset, ToastOptions,
};
use std::time::{Duration, Instant};

const TRANSITION: Duration = motion::TRANSITION_DURATION;

fn base_options() -> ToastOptions {
    ToastOptions::new()
        .message("Saved")
        .preset(Preset::Success)
        .auto_dismiss(Duration::from_millis(2000))
        .dismiss_wired(true)
}

#[test]
fn success_preset_scenario_resolves_icon_and_announcement() {
    let controller = Controller::new(base_options());

    assert_eq!(controller.options().effective_glyph(), Glyph::Checkmark);
    assert_eq!(
        controller.accessibility_message(),
        "Success notification, Saved"
    );
}

#[test]
fn auto_dismiss_fires_exactly_once_after_the_configured_delay() {
    let mut controller = Controller::new(base_options());
    let start = Instant::now();

    controller.sync_visible(true, start);
    let shown = start + TRANSITION;
    controller.tick(shown);

    let mut dismissals = 0;
    // Sample well past the deadline at a coarse cadence
    for ms in (0..6000).step_by(50) {
        let effects = controller.tick(shown + Duration::from_millis(ms));
        dismissals += effects
            .iter()
            .filter(|effect| matches!(effect, Effect::DismissRequested))
            .count();

        // The embedding application reacts by flipping the intent off
        if dismissals == 1 && controller.visible() {
            controller.sync_visible(false, shown + Duration::from_millis(ms));
        }
    }

    assert_eq!(dismissals, 1);
    assert!(!controller.visible());
}

#[test]
fn deadline_fires_no_earlier_than_the_configured_delay() {
    let mut controller = Controller::new(base_options());
    let start = Instant::now();

    controller.sync_visible(true, start);
    let shown = start + TRANSITION;
    controller.tick(shown);

    let effects = controller.tick(shown + Duration::from_millis(1999));
    assert!(!effects.contains(&Effect::DismissRequested));

    let effects = controller.tick(shown + Duration::from_millis(2000));
    assert!(effects.contains(&Effect::DismissRequested));
}

#[test]
fn at_most_one_deadline_across_arbitrary_toggle_sequences() {
    let mut controller = Controller::new(base_options());
    let start = Instant::now();
    let mut now = start;

    // A hostile sequence of toggles at varying cadences
    let script = [
        (true, 30u64),
        (false, 70),
        (true, 150),
        (false, 400),
        (true, 20),
        (true, 500), // repeated intent is a no-op
    ];

    for (visible, advance_ms) in script {
        controller.sync_visible(visible, now);
        now += Duration::from_millis(advance_ms);
        controller.tick(now);
    }

    // Settle whatever transition is still running; afterwards at most one
    // deadline may be pending and the rendered state matches the intent.
    now += TRANSITION;
    controller.tick(now);
    assert!(controller.visible());
    assert_eq!(controller.progress(), 1.0);

    // The single pending deadline fires exactly once
    let effects = controller.tick(now + Duration::from_millis(2000));
    let dismissals = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::DismissRequested))
        .count();
    assert_eq!(dismissals, 1);
    assert!(!controller.has_pending_dismiss());
}

#[test]
fn hiding_before_the_show_settles_suppresses_dismissal() {
    let mut controller = Controller::new(base_options());
    let start = Instant::now();

    controller.sync_visible(true, start);
    controller.tick(start + Duration::from_millis(120));
    controller.sync_visible(false, start + Duration::from_millis(150));

    // Far beyond any deadline that could have been armed
    let effects = controller.tick(start + Duration::from_secs(30));
    assert!(!effects.contains(&Effect::DismissRequested));
    assert!(!controller.should_render_surface());
}

#[test]
fn repeated_measurements_only_update_state_on_change() {
    let mut controller = Controller::new(base_options());

    assert!(controller.measured(56.0));
    assert!(!controller.measured(56.0));
    assert_eq!(controller.measured_height(), Some(56.0));

    // The travel distance now derives from the measurement
    let frame = controller.frame();
    assert_eq!(frame.offset_y, 56.0);
}

#[test]
fn hidden_toast_at_rest_renders_no_surface() {
    let controller = Controller::new(base_options());

    // `visible=false, isAnimating=false`: the view layer mounts only a
    // configured attachment, never the surface.
    assert!(!controller.should_render_surface());
}

#[test]
fn rapid_flips_converge_on_the_last_requested_intent() {
    let mut controller = Controller::new(base_options());
    let start = Instant::now();

    let mut announcements = 0;
    let mut count_effects = |effects: Vec<Effect>| {
        announcements += effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Announce(_)))
            .count();
    };

    // true -> false -> true, all inside one transition window
    count_effects(controller.sync_visible(true, start));
    count_effects(controller.tick(start + Duration::from_millis(80)));
    count_effects(controller.sync_visible(false, start + Duration::from_millis(100)));
    count_effects(controller.tick(start + Duration::from_millis(180)));
    let restart = start + Duration::from_millis(200);
    count_effects(controller.sync_visible(true, restart));

    count_effects(controller.tick(restart + TRANSITION));

    assert_eq!(announcements, 1);
    assert!(controller.visible());
    assert_eq!(controller.progress(), 1.0);
    assert!(controller.has_pending_dismiss());
}

#[test]
fn dismiss_guard_requires_duration_and_wired_route() {
    let start = Instant::now();

    let halves = [
        ToastOptions::new()
            .message("half")
            .auto_dismiss(Duration::from_millis(2000)),
        ToastOptions::new().message("half").dismiss_wired(true),
    ];

    for options in halves {
        let mut controller = Controller::new(options);
        controller.sync_visible(true, start);
        controller.tick(start + TRANSITION);
        assert!(!controller.has_pending_dismiss());

        let effects = controller.tick(start + TRANSITION + Duration::from_secs(10));
        assert!(!effects.contains(&Effect::DismissRequested));
    }
}

#[test]
fn top_and_bottom_edges_travel_in_opposite_directions() {
    let start = Instant::now();

    for (position, sign) in [(Position::Top, -1.0_f32), (Position::Bottom, 1.0)] {
        let mut controller =
            Controller::new(ToastOptions::new().position(position).message("edge"));
        controller.sync_visible(true, start);
        controller.tick(start + Duration::from_millis(50));

        let frame = controller.frame();
        assert_eq!(frame.offset_y.signum(), sign);
    }
}

#[test]
fn measured_height_shrinks_the_travel_distance() {
    let start = Instant::now();
    let mut controller = Controller::new(ToastOptions::new().message("travel"));

    // Unmeasured: falls back to the configured travel
    assert_eq!(
        controller.frame().offset_y,
        controller.options().offscreen_travel
    );

    controller.measured(48.0);
    controller.sync_visible(true, start);
    controller.tick(start + TRANSITION);
    controller.sync_visible(false, start + TRANSITION);
    controller.tick(start + TRANSITION + Duration::from_millis(1));

    let frame = controller.frame();
    assert!(frame.offset_y.abs() <= 48.0);
}
