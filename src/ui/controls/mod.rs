// SPDX-License-Identifier: MPL-2.0
//! Form controls: labeled switch rows and radio groups.
//!
//! Thin rendering glue over Iced's `toggler` and `radio` widgets, styled to
//! the library's spacing and typography tokens.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{radio, text, toggler, Column, Row};
use iced::{alignment, Element};

/// A labeled switch with a trailing state description.
///
/// Renders as `label [switch] state_text`, vertically centered.
pub fn switch_row<'a, Message: Clone + 'a>(
    label: impl text::IntoFragment<'a>,
    value: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
    state_text: impl text::IntoFragment<'a>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(label).size(typography::BODY_LG))
        .push(toggler(value).on_toggle(on_toggle))
        .push(text(state_text).size(typography::BODY_SM))
        .into()
}

/// A titled group of radio buttons laid out in a wrapping row.
///
/// `choices` pairs each label with its value; the selected value is
/// highlighted and `on_select` fires with the value of the pressed button.
pub fn radio_group<'a, V, Message>(
    title: impl text::IntoFragment<'a>,
    choices: &[(String, V)],
    selected: Option<V>,
    on_select: impl Fn(V) -> Message + Clone + 'a,
) -> Element<'a, Message>
where
    V: Copy + Eq + 'a,
    Message: Clone + 'a,
{
    let mut buttons = Row::new().spacing(spacing::MD);
    for (label, value) in choices {
        let on_select = on_select.clone();
        buttons = buttons.push(
            radio(label.clone(), *value, selected, move |choice| {
                on_select(choice)
            })
            .size(typography::BODY_LG)
            .text_size(typography::BODY),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(text(title).size(typography::BODY_LG))
        .push(buttons)
        .into()
}
