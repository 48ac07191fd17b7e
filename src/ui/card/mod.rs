// SPDX-License-Identifier: MPL-2.0
//! Card layout component.
//!
//! A card is a rounded, shadowed content surface. A cover section (an image
//! or any element) can be anchored to one of the card's edges; only its
//! outer corners are rounded so it sits flush with the card's silhouette.

use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing};
use iced::widget::{container, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Edge of the card a cover section is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Corner rounding for a cover section anchored at `edge`.
///
/// `None` means the section fills the card and all corners follow the card's
/// radius. Kept as a pure function so the layout math is testable without a
/// rendering environment.
#[must_use]
pub fn section_radius(edge: Option<Edge>) -> iced::border::Radius {
    let rounding = radius::LG;
    let (top_left, top_right, bottom_right, bottom_left) = match edge {
        None => (rounding, rounding, rounding, rounding),
        Some(Edge::Top) => (rounding, rounding, 0.0, 0.0),
        Some(Edge::Bottom) => (0.0, 0.0, rounding, rounding),
        Some(Edge::Left) => (rounding, 0.0, 0.0, rounding),
        Some(Edge::Right) => (0.0, rounding, rounding, 0.0),
    };

    iced::border::Radius {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    }
}

/// Builder for a card surface.
pub struct Card<'a, Message> {
    cover: Option<(Element<'a, Message>, Edge)>,
    sections: Vec<Element<'a, Message>>,
    selected: bool,
    width: f32,
}

impl<'a, Message: 'a> Card<'a, Message> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cover: None,
            sections: Vec::new(),
            selected: false,
            width: sizing::CARD_WIDTH,
        }
    }

    /// Anchors a cover section to the given edge.
    #[must_use]
    pub fn cover(mut self, cover: impl Into<Element<'a, Message>>, edge: Edge) -> Self {
        self.cover = Some((cover.into(), edge));
        self
    }

    /// Appends a content section below (or beside) the cover.
    #[must_use]
    pub fn push(mut self, section: impl Into<Element<'a, Message>>) -> Self {
        self.sections.push(section.into());
        self
    }

    /// Draws a brand-colored outline around the card.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Builds the card element.
    pub fn view(self) -> Element<'a, Message> {
        let content = Column::with_children(self.sections)
            .spacing(spacing::XS)
            .padding(spacing::SM)
            .width(Length::Fill);

        let body: Element<'a, Message> = match self.cover {
            None => content.into(),
            Some((cover, edge)) => {
                let cover = cover_section(cover, edge);
                match edge {
                    Edge::Top => Column::new().push(cover).push(content).into(),
                    Edge::Bottom => Column::new().push(content).push(cover).into(),
                    Edge::Left => Row::new()
                        .push(cover)
                        .push(content)
                        .align_y(alignment::Vertical::Center)
                        .into(),
                    Edge::Right => Row::new()
                        .push(content)
                        .push(cover)
                        .align_y(alignment::Vertical::Center)
                        .into(),
                }
            }
        };

        let selected = self.selected;
        Container::new(body)
            .width(Length::Fixed(self.width))
            .style(move |theme: &Theme| card_style(theme, selected))
            .into()
    }
}

impl<'a, Message: 'a> Default for Card<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a cover element so it spans the card edge with outer-only rounding.
fn cover_section<'a, Message: 'a>(
    cover: Element<'a, Message>,
    edge: Edge,
) -> Element<'a, Message> {
    let sized = match edge {
        Edge::Top | Edge::Bottom => Container::new(cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_COVER_HEIGHT)),
        Edge::Left | Edge::Right => Container::new(cover)
            .width(Length::Fixed(sizing::CARD_COVER_HEIGHT))
            .height(Length::Fill),
    };

    sized
        .clip(true)
        .style(move |theme: &Theme| cover_style(theme, edge))
        .into()
}

fn card_style(theme: &Theme, selected: bool) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: if selected {
                palette::PRIMARY_500
            } else {
                iced::Color::TRANSPARENT
            },
            width: if selected {
                border::WIDTH_MD
            } else {
                0.0
            },
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(base.text),
        ..Default::default()
    }
}

fn cover_style(theme: &Theme, edge: Edge) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(iced::Background::Color(weak.color)),
        border: iced::Border {
            radius: section_radius(Some(edge)),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_cover_rounds_only_top_corners() {
        let corners = section_radius(Some(Edge::Top));
        assert_eq!(corners.top_left, radius::LG);
        assert_eq!(corners.top_right, radius::LG);
        assert_eq!(corners.bottom_left, 0.0);
        assert_eq!(corners.bottom_right, 0.0);
    }

    #[test]
    fn left_cover_rounds_only_left_corners() {
        let corners = section_radius(Some(Edge::Left));
        assert_eq!(corners.top_left, radius::LG);
        assert_eq!(corners.bottom_left, radius::LG);
        assert_eq!(corners.top_right, 0.0);
        assert_eq!(corners.bottom_right, 0.0);
    }

    #[test]
    fn full_bleed_section_rounds_all_corners() {
        let corners = section_radius(None);
        assert_eq!(corners.top_left, radius::LG);
        assert_eq!(corners.top_right, radius::LG);
        assert_eq!(corners.bottom_left, radius::LG);
        assert_eq!(corners.bottom_right, radius::LG);
    }

    #[test]
    fn opposite_edges_round_disjoint_corners() {
        let top = section_radius(Some(Edge::Top));
        let bottom = section_radius(Some(Edge::Bottom));
        assert_eq!(top.top_left, bottom.bottom_left);
        assert_eq!(top.bottom_right, bottom.top_right);
    }
}
