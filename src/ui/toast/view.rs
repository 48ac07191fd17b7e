// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! The view layer reproduces the component's rendering contract: an
//! edge-anchored overlay whose surface slides in by the distance computed in
//! [`super::motion`], with an optional permanent attachment that survives the
//! toast's own visibility.

use super::controller::Controller;
use super::options::{Elevation, Position, ToastAction};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::{Slide, Spinner};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Theme};

/// Builder for the toast's overlay layer.
///
/// The layer fills the window, anchors content to the configured edge, and
/// passes pointer events through empty space. Intended to be stacked above
/// the application's base view with [`layered`].
pub struct ToastView<'a, Message> {
    controller: &'a Controller,
    on_measure: Box<dyn Fn(f32) -> Message + 'a>,
    on_action: Option<Message>,
    attachment: Option<Element<'a, Message>>,
    custom_content: Option<Element<'a, Message>>,
    custom_loader: Option<Element<'a, Message>>,
    spinner_rotation: f32,
}

impl<'a, Message: Clone + 'static> ToastView<'a, Message> {
    pub fn new(controller: &'a Controller, on_measure: impl Fn(f32) -> Message + 'a) -> Self {
        Self {
            controller,
            on_measure: Box::new(on_measure),
            on_action: None,
            attachment: None,
            custom_content: None,
            custom_loader: None,
            spinner_rotation: 0.0,
        }
    }

    /// Message published when the trailing action control is pressed.
    #[must_use]
    pub fn on_action(mut self, message: Message) -> Self {
        self.on_action = Some(message);
        self
    }

    /// Permanent companion view rendered adjacent to the toast surface,
    /// regardless of the toast's visibility.
    #[must_use]
    pub fn attachment(mut self, attachment: impl Into<Element<'a, Message>>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    /// Replaces the interior icon/message/trailing row entirely.
    #[must_use]
    pub fn custom_content(mut self, content: impl Into<Element<'a, Message>>) -> Self {
        self.custom_content = Some(content.into());
        self
    }

    /// Custom loader rendered instead of the default spinner.
    #[must_use]
    pub fn custom_loader(mut self, loader: impl Into<Element<'a, Message>>) -> Self {
        self.custom_loader = Some(loader.into());
        self
    }

    /// Rotation angle fed to the default loader spinner.
    #[must_use]
    pub fn spinner_rotation(mut self, rotation: f32) -> Self {
        self.spinner_rotation = rotation;
        self
    }

    /// Builds the overlay layer.
    pub fn view(self) -> Element<'a, Message> {
        let controller = self.controller;
        let options = controller.options();
        let position = options.position;

        if !controller.should_render_surface() {
            // Fully at rest and hidden: only the attachment survives.
            return match self.attachment {
                Some(attachment) => anchored(attachment, position),
                None => Space::new().into(),
            };
        }

        let interior: Element<'a, Message> = match self.custom_content {
            Some(content) => content,
            None => {
                interior_row(
                    controller,
                    self.on_action,
                    self.custom_loader,
                    self.spinner_rotation,
                )
            }
        };

        let elevation = options.elevation;
        let surface = Container::new(interior)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .style(move |theme: &Theme| surface_style(theme, elevation));

        let frame = controller.frame();
        let sliding_surface: Element<'a, Message> = Slide::new(surface)
            .offset_y(frame.offset_y)
            .opacity(frame.opacity)
            .interactive(controller.visible())
            .measure(controller.measured_height(), move |height| {
                (self.on_measure)(height)
            })
            .into();

        // The attachment sits adjacent to the surface on the side implied by
        // the edge: above for bottom toasts, below for top toasts.
        let mut column = Column::new().align_x(alignment::Horizontal::Center);
        match (position, self.attachment) {
            (Position::Bottom, Some(attachment)) => {
                column = column.push(attachment).push(sliding_surface);
            }
            (Position::Top, Some(attachment)) => {
                column = column.push(sliding_surface).push(attachment);
            }
            (_, None) => {
                column = column.push(sliding_surface);
            }
        }

        anchored(column, position)
    }
}

/// Stacks a toast layer above the application's base view.
pub fn layered<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    toast_layer: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    iced::widget::Stack::new()
        .push(base)
        .push(toast_layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Full-size container anchoring its content to the given edge.
fn anchored<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    position: Position,
) -> Element<'a, Message> {
    let vertical = match position {
        Position::Top => alignment::Vertical::Top,
        Position::Bottom => alignment::Vertical::Bottom,
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

/// Default interior: `[icon] [message] [loader | action]`.
fn interior_row<'a, Message: Clone + 'static>(
    controller: &'a Controller,
    on_action: Option<Message>,
    custom_loader: Option<Element<'a, Message>>,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    let options = controller.options();

    let tint = match options.icon {
        // An explicit icon keeps a neutral tint; presets bring their accent.
        Some(_) => palette::GRAY_400,
        None => options.preset.unwrap_or_default().accent_color(),
    };
    let icon_widget = icons::Icon::new(options.effective_glyph(), tint)
        .with_size(sizing::ICON_MD)
        .into_element();

    let message_alignment = if options.center_message {
        alignment::Horizontal::Center
    } else {
        alignment::Horizontal::Left
    };
    let message_widget = text(options.message.clone().unwrap_or_default()).size(typography::BODY);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(message_alignment)
                .padding([spacing::SM, 0.0]),
        );

    // NOTE: order does matter - a requested loader overrides the action.
    if options.show_loader {
        let loader = match custom_loader {
            Some(loader) => loader,
            None => Spinner::new(palette::PRIMARY_500, spinner_rotation).into_element(),
        };
        row = row.push(Container::new(loader).padding(spacing::SM));
    } else if let Some(action) = options.action.clone() {
        row = row.push(action_control(&action, on_action));
    } else {
        row = row.push(Space::new().width(spacing::XS));
    }

    row.into()
}

fn action_control<'a, Message: Clone + 'static>(
    action: &ToastAction,
    on_action: Option<Message>,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (&action.label, action.icon) {
        (Some(label), _) => text(label.clone()).size(typography::BODY_SM).into(),
        (None, Some(glyph)) => icons::Icon::new(glyph, palette::GRAY_700)
            .with_size(sizing::ICON_SM)
            .into_element(),
        (None, None) => Space::new().into(),
    };

    let mut control = button(
        Container::new(content)
            .align_y(alignment::Vertical::Center)
            .padding([0.0, spacing::SM]),
    )
    .style(styles::button::toast_action)
    .height(Length::Fixed(sizing::TOAST_MIN_HEIGHT));

    if let Some(message) = on_action {
        control = control.on_press(message);
    }

    control.into()
}

/// Style of the toast surface: themed background, rounded corners, and a
/// shadow scaled by the configured elevation.
fn surface_style(theme: &Theme, elevation: Elevation) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: match elevation {
            Elevation::Low => shadow::SM,
            Elevation::Medium => shadow::MD,
            Elevation::High => shadow::LG,
        },
        text_color: Some(base.text),
        ..Default::default()
    }
}
