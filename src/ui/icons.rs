// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are drawn as Canvas geometry rather than shipped as image assets, so
//! the library stays asset-free and icons can be tinted with any theme color.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `exclamation` not `failure_icon`).

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Available icon glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Circled lowercase "i".
    Info,
    /// Flat checkmark.
    Checkmark,
    /// Filled circle with an exclamation mark.
    Exclamation,
    /// Plus sign.
    Plus,
}

/// A tintable, canvas-drawn icon.
pub struct Icon {
    cache: Cache,
    glyph: Glyph,
    color: Color,
    size: f32,
}

impl Icon {
    #[must_use]
    pub fn new(glyph: Glyph, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            glyph,
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Overrides the rendered size (width and height) in logical pixels.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this icon.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Circled information icon.
#[must_use]
pub fn info(color: Color) -> Icon {
    Icon::new(Glyph::Info, color)
}

/// Flat checkmark icon.
#[must_use]
pub fn checkmark(color: Color) -> Icon {
    Icon::new(Glyph::Checkmark, color)
}

/// Filled exclamation icon.
#[must_use]
pub fn exclamation(color: Color) -> Icon {
    Icon::new(Glyph::Exclamation, color)
}

/// Plus sign icon.
#[must_use]
pub fn plus(color: Color) -> Icon {
    Icon::new(Glyph::Plus, color)
}

impl<Message> canvas::Program<Message> for Icon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                match self.glyph {
                    Glyph::Info => draw_info(frame, self.color),
                    Glyph::Checkmark => draw_checkmark(frame, self.color),
                    Glyph::Exclamation => draw_exclamation(frame, self.color),
                    Glyph::Plus => draw_plus(frame, self.color),
                }
            });

        vec![geometry]
    }
}

fn stroke(color: Color, width: f32) -> Stroke<'static> {
    Stroke::default()
        .with_width(width)
        .with_color(color)
        .with_line_cap(canvas::LineCap::Round)
}

fn draw_info(frame: &mut Frame, color: Color) {
    let center = frame.center();
    let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

    let ring = Path::circle(center, radius);
    frame.stroke(&ring, stroke(color, 2.0));

    // Dot of the "i"
    let dot = Path::circle(Point::new(center.x, center.y - radius * 0.45), radius * 0.12);
    frame.fill(&dot, color);

    // Stem of the "i"
    let stem = Path::line(
        Point::new(center.x, center.y - radius * 0.1),
        Point::new(center.x, center.y + radius * 0.5),
    );
    frame.stroke(&stem, stroke(color, 2.0));
}

fn draw_checkmark(frame: &mut Frame, color: Color) {
    let center = frame.center();
    let scale = frame.width().min(frame.height()) / 2.0;

    let mut path = canvas::path::Builder::new();
    path.move_to(Point::new(center.x - scale * 0.6, center.y + scale * 0.05));
    path.line_to(Point::new(center.x - scale * 0.15, center.y + scale * 0.5));
    path.line_to(Point::new(center.x + scale * 0.6, center.y - scale * 0.45));
    frame.stroke(&path.build(), stroke(color, 2.5));
}

fn draw_exclamation(frame: &mut Frame, color: Color) {
    let center = frame.center();
    let radius = frame.width().min(frame.height()) / 2.0 - 1.0;

    let disc = Path::circle(center, radius);
    frame.fill(&disc, color);

    // Bar and dot punched out in white
    let bar = Path::line(
        Point::new(center.x, center.y - radius * 0.5),
        Point::new(center.x, center.y + radius * 0.15),
    );
    frame.stroke(&bar, stroke(Color::WHITE, 2.5));

    let dot = Path::circle(Point::new(center.x, center.y + radius * 0.55), radius * 0.13);
    frame.fill(&dot, Color::WHITE);
}

fn draw_plus(frame: &mut Frame, color: Color) {
    let center = frame.center();
    let scale = frame.width().min(frame.height()) / 2.0 - 2.0;

    let horizontal = Path::line(
        Point::new(center.x - scale, center.y),
        Point::new(center.x + scale, center.y),
    );
    let vertical = Path::line(
        Point::new(center.x, center.y - scale),
        Point::new(center.x, center.y + scale),
    );
    frame.stroke(&horizontal, stroke(color, 2.5));
    frame.stroke(&vertical, stroke(color, 2.5));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn icons_default_to_medium_size() {
        let icon = info(palette::INFO_500);
        assert_eq!(icon.size, sizing::ICON_MD);
    }

    #[test]
    fn with_size_overrides_dimension() {
        let icon = checkmark(palette::SUCCESS_500).with_size(sizing::ICON_SM);
        assert_eq!(icon.size, sizing::ICON_SM);
    }

    #[test]
    fn glyph_constructors_pick_correct_glyph() {
        assert_eq!(info(palette::INFO_500).glyph, Glyph::Info);
        assert_eq!(checkmark(palette::SUCCESS_500).glyph, Glyph::Checkmark);
        assert_eq!(exclamation(palette::FAILURE_500).glyph, Glyph::Exclamation);
        assert_eq!(plus(palette::GRAY_700).glyph, Glyph::Plus);
    }
}
