// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (demo toggle button, attachment banner action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Trailing action control of a toast.
///
/// Rendered flush against the surface's right edge, so only the outer corners
/// are rounded, matching the surface radius.
pub fn toast_action(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => Some(Background::Color(Color {
            a: 0.08,
            ..palette::GRAY_400
        })),
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::NONE,
                top_right: radius::MD,
                bottom_right: radius::MD,
                bottom_left: radius::NONE,
            },
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_disabled_is_grayed_out() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn toast_action_rounds_only_outer_corners() {
        let theme = Theme::Light;
        let style = toast_action(&theme, button::Status::Active);
        assert_eq!(style.border.radius.top_left, radius::NONE);
        assert_eq!(style.border.radius.top_right, radius::MD);
        assert_eq!(style.border.radius.bottom_right, radius::MD);
        assert_eq!(style.border.radius.bottom_left, radius::NONE);
    }
}
