// SPDX-License-Identifier: MPL-2.0
//! Configuration surface of the toast component.
//!
//! `ToastOptions` mirrors the recognized props of the component: everything
//! the embedding application can configure short of the externally owned
//! `visible` intent, which stays with the caller.

use super::preset::Preset;
use crate::config::{
    DEFAULT_OFFSCREEN_TRAVEL, MAX_AUTO_DISMISS_MS, MIN_AUTO_DISMISS_MS,
};
use crate::ui::icons::Glyph;
use std::time::Duration;

/// Screen edge the toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Top,
    #[default]
    Bottom,
}

/// Auto-dismiss delay, clamped to a sane range.
///
/// This newtype enforces validity at the type level: a delay is always within
/// `MIN_AUTO_DISMISS_MS..=MAX_AUTO_DISMISS_MS`.
///
/// # Example
///
/// ```
/// use iced_bloom::ui::toast::AutoDismiss;
/// use std::time::Duration;
///
/// let delay = AutoDismiss::new(Duration::from_secs(2));
/// assert_eq!(delay.as_duration(), Duration::from_secs(2));
///
/// // Values outside range are clamped
/// let too_short = AutoDismiss::new(Duration::from_millis(1));
/// assert_eq!(too_short.as_duration().as_millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDismiss(Duration);

impl AutoDismiss {
    /// Creates a new auto-dismiss delay, clamping to the valid range.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let ms = (delay.as_millis() as u64).clamp(MIN_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS);
        Self(Duration::from_millis(ms))
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

/// Trailing action control of a toast: a label, an icon, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub label: Option<String>,
    pub icon: Option<Glyph>,
}

impl ToastAction {
    /// Action rendered as a text label.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            icon: None,
        }
    }

    /// Action rendered as an icon.
    #[must_use]
    pub fn icon(glyph: Glyph) -> Self {
        Self {
            label: None,
            icon: Some(glyph),
        }
    }
}

/// Shadow level of the toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elevation {
    Low,
    #[default]
    Medium,
    High,
}

/// Recognized toast configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    /// Edge anchor.
    pub position: Position,
    /// Message text shown in the surface and announced to screen readers.
    pub message: Option<String>,
    /// Whether the message is centered rather than left-aligned.
    pub center_message: bool,
    /// Preset look driving default icon and announcement phrasing.
    pub preset: Option<Preset>,
    /// Explicit icon override; takes precedence over the preset icon.
    pub icon: Option<Glyph>,
    /// Trailing action control. A loader takes precedence when requested.
    pub action: Option<ToastAction>,
    /// Whether to render a loader as the trailing element.
    pub show_loader: bool,
    /// Auto-dismiss delay. Only armed when a dismiss route is wired too.
    pub auto_dismiss: Option<AutoDismiss>,
    /// Whether the embedding application routes `Effect::DismissRequested`.
    /// Without it, an auto-dismiss delay is policy-ignored.
    pub dismiss_wired: bool,
    /// Offscreen travel used before the surface height is measured.
    pub offscreen_travel: f32,
    /// Shadow level of the surface.
    pub elevation: Elevation,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: Position::default(),
            message: None,
            center_message: false,
            preset: None,
            icon: None,
            action: None,
            show_loader: false,
            auto_dismiss: None,
            dismiss_wired: false,
            offscreen_travel: DEFAULT_OFFSCREEN_TRAVEL,
            elevation: Elevation::default(),
        }
    }
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn center_message(mut self, center: bool) -> Self {
        self.center_message = center;
        self
    }

    #[must_use]
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    #[must_use]
    pub fn icon(mut self, glyph: Glyph) -> Self {
        self.icon = Some(glyph);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn show_loader(mut self, show: bool) -> Self {
        self.show_loader = show;
        self
    }

    /// Sets the auto-dismiss delay (clamped). The timer is only ever armed
    /// when `dismiss_wired` is also set.
    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.auto_dismiss = Some(AutoDismiss::new(delay));
        self
    }

    #[must_use]
    pub fn dismiss_wired(mut self, wired: bool) -> Self {
        self.dismiss_wired = wired;
        self
    }

    /// Overrides the offscreen travel distance used before first measurement.
    #[must_use]
    pub fn offscreen_travel(mut self, travel: f32) -> Self {
        self.offscreen_travel = travel;
        self
    }

    #[must_use]
    pub fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    /// The icon glyph actually rendered: explicit override, else the preset's,
    /// else the general icon.
    #[must_use]
    pub fn effective_glyph(&self) -> Glyph {
        self.icon
            .unwrap_or_else(|| self.preset.unwrap_or_default().glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_dismiss_clamps_to_valid_range() {
        let too_short = AutoDismiss::new(Duration::from_millis(1));
        assert_eq!(too_short.as_duration().as_millis() as u64, MIN_AUTO_DISMISS_MS);

        let too_long = AutoDismiss::new(Duration::from_secs(600));
        assert_eq!(too_long.as_duration().as_millis() as u64, MAX_AUTO_DISMISS_MS);
    }

    #[test]
    fn auto_dismiss_accepts_values_in_range() {
        let delay = AutoDismiss::new(Duration::from_millis(2000));
        assert_eq!(delay.as_duration(), Duration::from_millis(2000));
    }

    #[test]
    fn explicit_icon_overrides_preset() {
        let options = ToastOptions::new()
            .preset(Preset::Success)
            .icon(Glyph::Plus);
        assert_eq!(options.effective_glyph(), Glyph::Plus);
    }

    #[test]
    fn preset_provides_default_icon() {
        let options = ToastOptions::new().preset(Preset::Failure);
        assert_eq!(options.effective_glyph(), Glyph::Exclamation);
    }

    #[test]
    fn missing_preset_falls_back_to_general_icon() {
        let options = ToastOptions::new();
        assert_eq!(options.effective_glyph(), Glyph::Info);
    }

    #[test]
    fn default_travel_comes_from_config() {
        assert_eq!(
            ToastOptions::default().offscreen_travel,
            DEFAULT_OFFSCREEN_TRAVEL
        );
    }
}
