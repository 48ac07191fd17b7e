// SPDX-License-Identifier: MPL-2.0
//! Pure animation math for the toast's slide/fade transition.
//!
//! Everything here is independent of the Iced binding so the mapping from
//! progress to on-screen position can be unit-tested without a rendering
//! environment.

use super::options::Position;
use std::time::Duration;

/// Duration of a show or hide transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Delay before the show transition of a toast that is already visible when
/// it mounts.
pub const INITIAL_SHOW_DELAY: Duration = Duration::from_millis(100);

/// Progress below which the surface is fully transparent. The ramp hides the
/// one-frame flash of a fully-opaque surface before its transform applies.
pub const OPACITY_THRESHOLD: f32 = 0.01;

// Control points of the transition's easing curve, cubic-bezier(0.215, 0.61, 0.355, 1).
const EASE_X1: f32 = 0.215;
const EASE_Y1: f32 = 0.61;
const EASE_X2: f32 = 0.355;
const EASE_Y2: f32 = 1.0;

/// The visual state of the toast surface at a given animation progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    /// Vertical translation in logical pixels. Positive values move the
    /// surface downward.
    pub offset_y: f32,
    /// Surface opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Maps a normalized progress value to the surface's offset and opacity.
///
/// At progress 0 the surface sits fully offscreen on the side matching its
/// edge (top edges offset upward, bottom edges downward); at progress 1 it
/// sits at its natural position. The travel distance is the measured surface
/// height, or `fallback_travel` before the first measurement.
#[must_use]
pub fn slide_frame(
    progress: f32,
    position: Position,
    measured_height: Option<f32>,
    fallback_travel: f32,
) -> SlideFrame {
    let progress = progress.clamp(0.0, 1.0);

    let travel = measured_height
        .filter(|height| *height > 0.0)
        .unwrap_or(fallback_travel);
    let direction = match position {
        Position::Top => -1.0,
        Position::Bottom => 1.0,
    };

    let offset_y = direction * travel * (1.0 - progress);
    let opacity = if progress < OPACITY_THRESHOLD {
        progress / OPACITY_THRESHOLD
    } else {
        1.0
    };

    SlideFrame { offset_y, opacity }
}

/// Evaluates the transition's easing curve at `t` in `[0, 1]`.
///
/// Standard CSS-style cubic bezier: the curve parameter is solved for the
/// time axis with a few Newton iterations, then the progress axis is sampled.
#[must_use]
pub fn ease(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    sample(solve_curve_x(t), EASE_Y1, EASE_Y2)
}

/// One-dimensional cubic bezier through (0, 0) and (1, 1) with the given
/// inner control values.
fn sample(t: f32, p1: f32, p2: f32) -> f32 {
    let one_t = 1.0 - t;
    3.0 * one_t * one_t * t * p1 + 3.0 * one_t * t * t * p2 + t * t * t
}

fn sample_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let one_t = 1.0 - t;
    3.0 * one_t * one_t * p1 + 6.0 * one_t * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Finds the curve parameter whose x-coordinate equals `x`.
fn solve_curve_x(x: f32) -> f32 {
    // Newton-Raphson from a linear guess converges in a handful of steps for
    // well-behaved curves.
    let mut t = x;
    for _ in 0..8 {
        let error = sample(t, EASE_X1, EASE_X2) - x;
        if error.abs() < 1e-5 {
            return t;
        }
        let derivative = sample_derivative(t, EASE_X1, EASE_X2);
        if derivative.abs() < 1e-6 {
            break;
        }
        t -= error / derivative;
    }

    // Bisection fallback when the derivative vanished.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    while hi - lo > 1e-5 {
        if sample(t, EASE_X1, EASE_X2) < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_are_exact() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = ease(i as f32 / 100.0);
            assert!(
                value >= previous,
                "easing regressed at step {i}: {value} < {previous}"
            );
            previous = value;
        }
    }

    #[test]
    fn ease_decelerates_toward_the_end() {
        // cubic-bezier(0.215, 0.61, 0.355, 1) is an ease-out style curve:
        // the first half covers more ground than the second.
        assert!(ease(0.5) > 0.5);
    }

    #[test]
    fn slide_frame_uses_fallback_before_measurement() {
        let frame = slide_frame(0.0, Position::Bottom, None, 500.0);
        assert_eq!(frame.offset_y, 500.0);
    }

    #[test]
    fn slide_frame_uses_measured_height_once_known() {
        let frame = slide_frame(0.0, Position::Bottom, Some(64.0), 500.0);
        assert_eq!(frame.offset_y, 64.0);
    }

    #[test]
    fn slide_frame_ignores_zero_measurement() {
        let frame = slide_frame(0.0, Position::Bottom, Some(0.0), 500.0);
        assert_eq!(frame.offset_y, 500.0);
    }

    #[test]
    fn top_position_offsets_upward() {
        let frame = slide_frame(0.5, Position::Top, Some(100.0), 500.0);
        assert!(frame.offset_y < 0.0);
    }

    #[test]
    fn bottom_position_offsets_downward() {
        let frame = slide_frame(0.5, Position::Bottom, Some(100.0), 500.0);
        assert!(frame.offset_y > 0.0);
    }

    #[test]
    fn surface_rests_at_natural_position_when_fully_shown() {
        let frame = slide_frame(1.0, Position::Top, Some(100.0), 500.0);
        assert_eq!(frame.offset_y, 0.0);
        assert_eq!(frame.opacity, 1.0);
    }

    #[test]
    fn opacity_is_transparent_only_below_threshold() {
        assert_eq!(
            slide_frame(0.0, Position::Bottom, None, 500.0).opacity,
            0.0
        );
        assert_eq!(
            slide_frame(OPACITY_THRESHOLD, Position::Bottom, None, 500.0).opacity,
            1.0
        );
        assert_eq!(
            slide_frame(0.5, Position::Bottom, None, 500.0).opacity,
            1.0
        );
    }
}
