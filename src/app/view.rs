// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! Renders the current screen and stacks the toast overlay above it.

use super::{ActionChoice, App, Message, PresetChoice, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::card::{Card, Edge};
use crate::ui::controls;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::toast::{self, ToastView};
use iced::widget::{button, mouse_area, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Theme};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = match app.screen {
        Screen::Toasts => toasts_screen(app),
        Screen::Cards => cards_screen(app),
    };

    let page = Column::new()
        .push(top_bar(app))
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill);

    toast::view::layered(page, toast_layer(app))
}

/// Screen switcher row.
fn top_bar(app: &App) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center);

    for screen in [Screen::Toasts, Screen::Cards] {
        let label = text(app.i18n.tr(screen.title_key())).size(typography::BODY);
        let mut control = button(label).on_press(Message::SwitchScreen(screen));
        if screen == app.screen {
            control = control.style(styles::button::primary);
        }
        row = row.push(control);
    }

    row.into()
}

// ============================================================================
// Toasts screen
// ============================================================================

fn toasts_screen(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(text(i18n.tr("screen-toasts")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("toast-toggle-button")).size(typography::BODY))
                .on_press(Message::ToggleVisible)
                .style(styles::button::primary),
        );

    let position_state = if app.position_top {
        i18n.tr("toast-position-top")
    } else {
        i18n.tr("toast-position-bottom")
    };
    let loader_state = if app.show_loader {
        i18n.tr("toast-loader-show")
    } else {
        i18n.tr("toast-loader-hide")
    };
    let custom_state = if app.custom_content {
        i18n.tr("toast-custom-on")
    } else {
        i18n.tr("toast-custom-off")
    };
    let attachment_state = if app.has_attachment {
        i18n.tr("toast-attachment-on")
    } else {
        i18n.tr("toast-attachment-off")
    };
    let auto_dismiss_state = if app.auto_dismiss {
        i18n.tr("toast-auto-dismiss-on")
    } else {
        i18n.tr("toast-auto-dismiss-off")
    };

    let action_choices = vec![
        (i18n.tr("toast-action-none"), ActionChoice::None),
        (i18n.tr("toast-action-label"), ActionChoice::Label),
        (i18n.tr("toast-action-icon"), ActionChoice::Icon),
    ];
    let preset_choices = vec![
        (i18n.tr("toast-preset-none"), PresetChoice::None),
        (i18n.tr("toast-preset-general"), PresetChoice::General),
        (i18n.tr("toast-preset-success"), PresetChoice::Success),
        (i18n.tr("toast-preset-failure"), PresetChoice::Failure),
    ];

    let mut controls_column = Column::new()
        .spacing(spacing::LG)
        .push(controls::switch_row(
            i18n.tr("toast-position-label"),
            app.position_top,
            Message::PositionToggled,
            position_state,
        ))
        .push(controls::switch_row(
            i18n.tr("toast-loader-label"),
            app.show_loader,
            Message::LoaderToggled,
            loader_state,
        ))
        .push(controls::radio_group(
            i18n.tr("toast-actions-title"),
            &action_choices,
            Some(app.action_choice),
            Message::ActionSelected,
        ))
        .push(controls::switch_row(
            i18n.tr("toast-custom-label"),
            app.custom_content,
            Message::CustomContentToggled,
            custom_state,
        ))
        .push(controls::switch_row(
            i18n.tr("toast-attachment-label"),
            app.has_attachment,
            Message::AttachmentToggled,
            attachment_state,
        ))
        .push(controls::switch_row(
            i18n.tr("toast-auto-dismiss-label"),
            app.auto_dismiss,
            Message::AutoDismissToggled,
            auto_dismiss_state,
        ))
        .push(controls::radio_group(
            i18n.tr("toast-presets-title"),
            &preset_choices,
            Some(app.preset_choice),
            Message::PresetSelected,
        ));

    if let Some(visible) = app.last_animation {
        let key = if visible {
            "toast-last-animation-shown"
        } else {
            "toast-last-animation-hidden"
        };
        controls_column = controls_column.push(text(i18n.tr(key)).size(typography::CAPTION));
    }
    if let Some(announcement) = &app.last_announcement {
        controls_column =
            controls_column.push(text(announcement.clone()).size(typography::CAPTION));
    }

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(header)
        .push(scrollable(controls_column).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Builds the toast overlay layer from the screen's control state.
fn toast_layer(app: &App) -> Element<'_, Message> {
    let mut layer = ToastView::new(&app.toast, Message::ToastMeasured)
        .spinner_rotation(app.spinner_rotation);

    if app.action_choice != ActionChoice::None {
        layer = layer.on_action(Message::ToastActionPressed);
    }
    if app.custom_content {
        layer = layer.custom_content(custom_content(&app.i18n));
    }
    if app.has_attachment {
        layer = layer.attachment(attachment(app));
    }

    layer.view()
}

fn custom_content(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .push(text(i18n.tr("toast-custom-title")).size(typography::BODY_LG))
        .push(text(i18n.tr("toast-custom-body")).size(typography::BODY_SM))
        .into()
}

/// The attachment demo: a floating round button above a bottom toast, or a
/// banner below a top toast.
fn attachment(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;

    if app.position_top {
        let banner = Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(text(i18n.tr("toast-attachment-banner")).size(typography::BODY))
                .push(
                    button(text(i18n.tr("toast-attachment-noted")).size(typography::BODY_SM))
                        .on_press(Message::AttachmentNoted)
                        .style(styles::button::primary),
                ),
        )
        .padding(spacing::SM)
        .style(|theme: &Theme| styles::container::attachment_banner(theme));

        Container::new(banner)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XS)
            .into()
    } else {
        let floating = button(
            icons::plus(iced::Color::WHITE)
                .with_size(sizing::ICON_MD)
                .into_element(),
        )
        .on_press(Message::AttachmentNoted)
        .style(styles::button::primary)
        .padding(spacing::SM);

        Container::new(floating)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::SM)
            .into()
    }
}

// ============================================================================
// Cards screen
// ============================================================================

fn cards_screen(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;

    let header = text(i18n.tr("screen-cards")).size(typography::TITLE_LG);
    let hint = text(i18n.tr("card-select-hint")).size(typography::BODY_SM);

    let covers = [Some(Edge::Top), Some(Edge::Left), None];
    let mut cards_row = Row::new().spacing(spacing::LG);
    for (index, cover_edge) in covers.into_iter().enumerate() {
        cards_row = cards_row.push(sample_card(app, index, cover_edge));
    }

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(header)
        .push(hint)
        .push(scrollable(cards_row))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn sample_card(app: &App, index: usize, cover_edge: Option<Edge>) -> Element<'_, Message> {
    let i18n = &app.i18n;

    let mut card = Card::new()
        .selected(app.selected_card == Some(index))
        .push(text(i18n.tr("card-sample-title")).size(typography::BODY_LG))
        .push(text(i18n.tr("card-sample-body")).size(typography::BODY))
        .push(
            text(i18n.tr_with_args("card-subtitle", &[("count", "3")]))
                .size(typography::CAPTION),
        );

    if let Some(edge) = cover_edge {
        let placeholder = Space::new().width(Length::Fill).height(Length::Fill);
        card = card.cover(placeholder, edge);
    }

    mouse_area(card.view())
        .on_press(Message::CardSelected(index))
        .into()
}
