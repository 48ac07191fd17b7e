// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle state machine.
//!
//! The `Controller` sequences the show/hide animation, manages the
//! auto-dismiss deadline, and surfaces accessibility side effects. It follows
//! the "state down, messages up" shape used across the library: callers feed
//! it intent changes and ticks, it hands back `Effect` values to route.
//!
//! All time is injected as explicit `Instant` parameters. There are no
//! detached timers: the deadline is plain state, so dropping the controller
//! cancels everything and tests can simulate time deterministically.

use super::motion::{self, SlideFrame, INITIAL_SHOW_DELAY, TRANSITION_DURATION};
use super::options::ToastOptions;
use super::preset::Preset;
use std::time::Instant;

/// Side effects produced by the controller.
///
/// Every channel is best-effort: an embedding application may route any of
/// them or none, and failures to signal are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A failure-preset toast became visible; pulse the haptic/alert channel.
    Haptic,
    /// Issue a screen-reader announcement with the given text.
    Announce(String),
    /// Move accessibility focus to the toast's action control.
    FocusAction,
    /// A show or hide transition settled; `visible` is the current intent.
    AnimationEnded { visible: bool },
    /// The auto-dismiss deadline elapsed, or an explicit dismissal was
    /// requested. The caller is expected to flip its visible intent off.
    DismissRequested,
}

/// An in-flight eased transition of the progress value.
#[derive(Debug, Clone, Copy)]
struct Transition {
    start: Instant,
    from: f32,
    to: f32,
}

impl Transition {
    /// Progress at `now`, or `None` once the transition has settled.
    fn progress_at(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= TRANSITION_DURATION {
            return None;
        }
        let raw = elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32();
        Some(self.from + (self.to - self.from) * motion::ease(raw))
    }
}

/// Owns the toast's visibility state, animation progress, and dismissal
/// deadline.
#[derive(Debug)]
pub struct Controller {
    options: ToastOptions,
    /// Last synchronized external display intent.
    visible: bool,
    /// Normalized animation progress in `[0, 1]`.
    progress: f32,
    transition: Option<Transition>,
    /// True from the moment a transition starts until the toast settles
    /// hidden. While shown it stays true, keeping the surface mounted.
    is_animating: bool,
    measured_height: Option<f32>,
    dismiss_deadline: Option<Instant>,
}

impl Controller {
    /// Creates a controller for a toast that starts hidden and at rest.
    #[must_use]
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            visible: false,
            progress: 0.0,
            transition: None,
            is_animating: false,
            measured_height: None,
            dismiss_deadline: None,
        }
    }

    /// Creates a controller for a toast that is already requested visible
    /// when it mounts. The show transition starts after a short delay.
    #[must_use]
    pub fn new_shown(options: ToastOptions, now: Instant) -> (Self, Vec<Effect>) {
        let mut controller = Self::new(options);
        let effects = controller.start_transition(true, now + INITIAL_SHOW_DELAY);
        (controller, effects)
    }

    /// Replaces the configuration. A deadline that can no longer fire under
    /// the new options is cleared.
    pub fn set_options(&mut self, options: ToastOptions) {
        self.options = options;
        if self.options.auto_dismiss.is_none() || !self.options.dismiss_wired {
            self.dismiss_deadline = None;
        }
    }

    #[must_use]
    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    /// Synchronizes the externally owned visible intent.
    ///
    /// Does nothing when the intent is unchanged. A change restarts the
    /// animation from the current progress toward the new target; hiding
    /// cancels any pending dismiss deadline first.
    pub fn sync_visible(&mut self, visible: bool, now: Instant) -> Vec<Effect> {
        if visible == self.visible {
            return Vec::new();
        }

        if !visible {
            self.dismiss_deadline = None;
        }

        self.start_transition(visible, now)
    }

    fn start_transition(&mut self, visible: bool, start: Instant) -> Vec<Effect> {
        self.visible = visible;
        self.transition = Some(Transition {
            start,
            from: self.progress,
            to: if visible { 1.0 } else { 0.0 },
        });
        self.is_animating = true;

        let mut effects = Vec::new();
        if visible && self.options.preset == Some(Preset::Failure) {
            effects.push(Effect::Haptic);
        }
        effects
    }

    /// Advances the animation and the dismiss deadline to `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(transition) = self.transition {
            match transition.progress_at(now) {
                Some(progress) => self.progress = progress,
                None => {
                    self.progress = transition.to;
                    self.transition = None;
                    effects.extend(self.settle(now));
                }
            }
        }

        if let Some(deadline) = self.dismiss_deadline {
            if now >= deadline {
                self.dismiss_deadline = None;
                effects.push(Effect::DismissRequested);
            }
        }

        effects
    }

    /// Post-transition bookkeeping: arm the dismiss deadline or finish
    /// hiding, then surface the accessibility and observer effects.
    fn settle(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.visible {
            if let (Some(delay), true) = (self.options.auto_dismiss, self.options.dismiss_wired) {
                self.dismiss_deadline = Some(now + delay.as_duration());
            }
        } else {
            self.is_animating = false;
        }

        if self.visible {
            if self.options.action.is_some() {
                effects.push(Effect::FocusAction);
            } else if self.options.message.is_some() {
                effects.push(Effect::Announce(self.accessibility_message()));
            }
        }

        effects.push(Effect::AnimationEnded {
            visible: self.visible,
        });
        effects
    }

    /// Records the measured surface height. Returns whether the stored value
    /// actually changed, so unchanged layouts cause no state update.
    pub fn measured(&mut self, height: f32) -> bool {
        if self.measured_height == Some(height) {
            return false;
        }
        self.measured_height = Some(height);
        true
    }

    /// Cancels any pending deadline and requests dismissal. Idempotent
    /// beyond the effect itself.
    pub fn request_dismiss(&mut self) -> Vec<Effect> {
        self.dismiss_deadline = None;
        vec![Effect::DismissRequested]
    }

    /// Screen-reader text: the preset's severity label combined with the
    /// message.
    #[must_use]
    pub fn accessibility_message(&self) -> String {
        let message = self.options.message.as_deref().unwrap_or_default();
        match self.options.preset.unwrap_or_default().severity_label() {
            Some(label) => format!("{label} notification, {message}"),
            None => format!("notification, {message}"),
        }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn measured_height(&self) -> Option<f32> {
        self.measured_height
    }

    #[must_use]
    pub fn has_pending_dismiss(&self) -> bool {
        self.dismiss_deadline.is_some()
    }

    /// Whether the animation or a pending deadline still needs ticks.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.transition.is_some() || self.dismiss_deadline.is_some()
    }

    /// Whether the toast surface should be mounted at all. When false, only
    /// a configured attachment renders.
    #[must_use]
    pub fn should_render_surface(&self) -> bool {
        self.visible || self.is_animating
    }

    /// The surface's current offset and opacity.
    #[must_use]
    pub fn frame(&self) -> SlideFrame {
        motion::slide_frame(
            self.progress,
            self.options.position,
            self.measured_height,
            self.options.offscreen_travel,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::options::Position;
    use std::time::Duration;

    fn shown_options() -> ToastOptions {
        ToastOptions::new().message("Saved").preset(Preset::Success)
    }

    /// Runs the controller to the end of an in-flight transition.
    fn settle_transition(controller: &mut Controller, start: Instant) -> (Vec<Effect>, Instant) {
        let end = start + TRANSITION_DURATION;
        (controller.tick(end), end)
    }

    #[test]
    fn new_controller_is_hidden_and_at_rest() {
        let controller = Controller::new(ToastOptions::new());
        assert!(!controller.visible());
        assert!(!controller.is_animating());
        assert!(!controller.should_render_surface());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn sync_visible_starts_show_transition() {
        let mut controller = Controller::new(shown_options());
        let now = Instant::now();

        controller.sync_visible(true, now);
        assert!(controller.is_animating());
        assert!(controller.should_render_surface());

        // Mid-transition the progress is strictly between the endpoints
        controller.tick(now + Duration::from_millis(150));
        assert!(controller.progress() > 0.0);
        assert!(controller.progress() < 1.0);
    }

    #[test]
    fn unchanged_intent_is_a_no_op() {
        let mut controller = Controller::new(shown_options());
        let now = Instant::now();

        let effects = controller.sync_visible(false, now);
        assert!(effects.is_empty());
        assert!(!controller.is_animating());
    }

    #[test]
    fn settle_while_visible_announces_and_notifies() {
        let mut controller = Controller::new(shown_options());
        let now = Instant::now();

        controller.sync_visible(true, now);
        let (effects, _) = settle_transition(&mut controller, now);

        assert!(effects.contains(&Effect::Announce(
            "Success notification, Saved".to_string()
        )));
        assert!(effects.contains(&Effect::AnimationEnded { visible: true }));
    }

    #[test]
    fn action_takes_focus_instead_of_announcing() {
        use crate::ui::toast::options::ToastAction;

        let options = shown_options().action(ToastAction::label("Undo"));
        let mut controller = Controller::new(options);
        let now = Instant::now();

        controller.sync_visible(true, now);
        let (effects, _) = settle_transition(&mut controller, now);

        assert!(effects.contains(&Effect::FocusAction));
        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, Effect::Announce(_))));
    }

    #[test]
    fn failure_preset_signals_haptic_on_show_only() {
        let options = ToastOptions::new().preset(Preset::Failure);
        let mut controller = Controller::new(options);
        let now = Instant::now();

        let effects = controller.sync_visible(true, now);
        assert!(effects.contains(&Effect::Haptic));

        let (_, end) = settle_transition(&mut controller, now);
        let effects = controller.sync_visible(false, end);
        assert!(!effects.contains(&Effect::Haptic));
    }

    #[test]
    fn deadline_is_armed_only_after_settle() {
        let options = shown_options()
            .auto_dismiss(Duration::from_millis(2000))
            .dismiss_wired(true);
        let mut controller = Controller::new(options);
        let now = Instant::now();

        controller.sync_visible(true, now);
        assert!(!controller.has_pending_dismiss());

        let (_, end) = settle_transition(&mut controller, now);
        assert!(controller.has_pending_dismiss());

        // Fires exactly once, at the configured delay
        let effects = controller.tick(end + Duration::from_millis(1999));
        assert!(!effects.contains(&Effect::DismissRequested));

        let effects = controller.tick(end + Duration::from_millis(2000));
        assert!(effects.contains(&Effect::DismissRequested));
        assert!(!controller.has_pending_dismiss());

        let effects = controller.tick(end + Duration::from_millis(4001));
        assert!(!effects.contains(&Effect::DismissRequested));
    }

    #[test]
    fn deadline_requires_both_delay_and_wired_route() {
        let now = Instant::now();

        // Delay without a wired route
        let mut controller =
            Controller::new(shown_options().auto_dismiss(Duration::from_millis(2000)));
        controller.sync_visible(true, now);
        settle_transition(&mut controller, now);
        assert!(!controller.has_pending_dismiss());

        // Wired route without a delay
        let mut controller = Controller::new(shown_options().dismiss_wired(true));
        controller.sync_visible(true, now);
        settle_transition(&mut controller, now);
        assert!(!controller.has_pending_dismiss());
    }

    #[test]
    fn hiding_before_settle_never_fires_dismiss() {
        let options = shown_options()
            .auto_dismiss(Duration::from_millis(2000))
            .dismiss_wired(true);
        let mut controller = Controller::new(options);
        let now = Instant::now();

        controller.sync_visible(true, now);
        // Flip back before the show transition settles
        let midway = now + Duration::from_millis(100);
        controller.sync_visible(false, midway);

        // Run far past every deadline that could have been armed
        let effects = controller.tick(midway + Duration::from_secs(10));
        assert!(!effects.contains(&Effect::DismissRequested));
        assert!(!controller.has_pending_dismiss());
    }

    #[test]
    fn hiding_cancels_a_pending_deadline() {
        let options = shown_options()
            .auto_dismiss(Duration::from_millis(2000))
            .dismiss_wired(true);
        let mut controller = Controller::new(options);
        let now = Instant::now();

        controller.sync_visible(true, now);
        let (_, end) = settle_transition(&mut controller, now);
        assert!(controller.has_pending_dismiss());

        controller.sync_visible(false, end);
        assert!(!controller.has_pending_dismiss());
    }

    #[test]
    fn rapid_toggling_keeps_at_most_one_deadline_and_one_announcement() {
        let options = shown_options()
            .auto_dismiss(Duration::from_millis(2000))
            .dismiss_wired(true);
        let mut controller = Controller::new(options);
        let now = Instant::now();

        // true -> false -> true inside a single transition window
        let mut all_effects = Vec::new();
        all_effects.extend(controller.sync_visible(true, now));
        all_effects.extend(controller.tick(now + Duration::from_millis(50)));
        all_effects.extend(controller.sync_visible(false, now + Duration::from_millis(100)));
        all_effects.extend(controller.tick(now + Duration::from_millis(150)));
        let restart = now + Duration::from_millis(200);
        all_effects.extend(controller.sync_visible(true, restart));

        // Let the final transition settle
        all_effects.extend(controller.tick(restart + TRANSITION_DURATION));

        let announcements = all_effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Announce(_)))
            .count();
        assert_eq!(announcements, 1);

        assert!(controller.visible());
        assert_eq!(controller.progress(), 1.0);
        assert!(controller.has_pending_dismiss());
    }

    #[test]
    fn hide_transition_settles_to_fully_unmounted() {
        let mut controller = Controller::new(shown_options());
        let now = Instant::now();

        controller.sync_visible(true, now);
        let (_, shown) = settle_transition(&mut controller, now);

        controller.sync_visible(false, shown);
        assert!(controller.should_render_surface());

        let (effects, _) = settle_transition(&mut controller, shown);
        assert!(!controller.is_animating());
        assert!(!controller.should_render_surface());
        assert!(effects.contains(&Effect::AnimationEnded { visible: false }));
    }

    #[test]
    fn measured_ignores_unchanged_height() {
        let mut controller = Controller::new(ToastOptions::new());

        assert!(controller.measured(64.0));
        assert!(!controller.measured(64.0));
        assert!(controller.measured(72.0));
        assert_eq!(controller.measured_height(), Some(72.0));
    }

    #[test]
    fn request_dismiss_clears_deadline_and_is_idempotent() {
        let options = shown_options()
            .auto_dismiss(Duration::from_millis(2000))
            .dismiss_wired(true);
        let mut controller = Controller::new(options);
        let now = Instant::now();

        controller.sync_visible(true, now);
        settle_transition(&mut controller, now);
        assert!(controller.has_pending_dismiss());

        let effects = controller.request_dismiss();
        assert_eq!(effects, vec![Effect::DismissRequested]);
        assert!(!controller.has_pending_dismiss());

        // Nothing pending: still just the dismissal effect
        let effects = controller.request_dismiss();
        assert_eq!(effects, vec![Effect::DismissRequested]);
    }

    #[test]
    fn new_shown_delays_the_show_transition() {
        let now = Instant::now();
        let (mut controller, _) = Controller::new_shown(shown_options(), now);

        assert!(controller.is_animating());

        // Still parked at zero during the initial delay
        controller.tick(now + Duration::from_millis(50));
        assert_eq!(controller.progress(), 0.0);

        controller.tick(now + INITIAL_SHOW_DELAY + TRANSITION_DURATION);
        assert_eq!(controller.progress(), 1.0);
    }

    #[test]
    fn accessibility_message_without_preset_omits_label() {
        let controller = Controller::new(ToastOptions::new().message("Plain"));
        assert_eq!(controller.accessibility_message(), "notification, Plain");
    }

    #[test]
    fn frame_reflects_position_and_measurement() {
        let options = ToastOptions::new().position(Position::Top);
        let mut controller = Controller::new(options);

        // Unmeasured: fallback travel, hidden above the top edge
        let frame = controller.frame();
        assert_eq!(frame.offset_y, -controller.options().offscreen_travel);

        controller.measured(48.0);
        let frame = controller.frame();
        assert_eq!(frame.offset_y, -48.0);
    }
}
