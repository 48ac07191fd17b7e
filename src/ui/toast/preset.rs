// SPDX-License-Identifier: MPL-2.0
//! Preset looks for the toast: severity category driving the default icon,
//! accent color, and accessibility phrasing.

use crate::ui::design_tokens::palette;
use crate::ui::icons::Glyph;
use iced::Color;

/// Named severity category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Neutral informational toast.
    #[default]
    General,
    /// Operation completed successfully.
    Success,
    /// Operation failed; becoming visible also signals the haptic channel.
    Failure,
}

impl Preset {
    /// Returns the default icon glyph for this preset.
    #[must_use]
    pub fn glyph(self) -> Glyph {
        match self {
            Preset::General => Glyph::Info,
            Preset::Success => Glyph::Checkmark,
            Preset::Failure => Glyph::Exclamation,
        }
    }

    /// Returns the accent color used to tint the default icon.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            Preset::General => palette::PRIMARY_200,
            Preset::Success => palette::SUCCESS_500,
            Preset::Failure => palette::FAILURE_500,
        }
    }

    /// Severity label prepended to screen-reader announcements.
    /// `None` for the general preset, which announces the message alone.
    #[must_use]
    pub fn severity_label(self) -> Option<&'static str> {
        match self {
            Preset::General => None,
            Preset::Success => Some("Success"),
            Preset::Failure => Some("Alert"),
        }
    }
}
