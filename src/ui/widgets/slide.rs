// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that offsets its content vertically during draw, hides it
//! entirely at zero opacity, gates pointer events while the content is not
//! meant to be interactive, and reports the content's laid-out height.
//!
//! This is the rendering half of the toast's slide animation: the pure motion
//! math decides the offset and opacity, this widget applies them.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size, Vector};

/// Height difference below which a re-measure is not reported.
const MEASURE_EPSILON: f32 = 0.5;

/// A widget that translates its content along the vertical axis.
pub struct Slide<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset_y: f32,
    opacity: f32,
    interactive: bool,
    measured: Option<f32>,
    on_measure: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    /// Creates a new `Slide` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset_y: 0.0,
            opacity: 1.0,
            interactive: true,
            measured: None,
            on_measure: None,
        }
    }

    /// Sets the vertical translation applied at draw time.
    #[must_use]
    pub fn offset_y(mut self, offset: f32) -> Self {
        self.offset_y = offset;
        self
    }

    /// Sets the content opacity. At `0.0` the content is not drawn at all.
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Whether pointer events reach the content.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Reports the content height through `on_measure` whenever it differs
    /// from `current` by more than a fraction of a pixel.
    #[must_use]
    pub fn measure(
        mut self,
        current: Option<f32>,
        on_measure: impl Fn(f32) -> Message + 'a,
    ) -> Self {
        self.measured = current;
        self.on_measure = Some(Box::new(on_measure));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if self.opacity <= 0.0 {
            return;
        }

        if self.offset_y == 0.0 {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
            return;
        }

        let translation = Vector::new(0.0, self.offset_y);
        renderer.with_translation(translation, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        // Report the laid-out height once it settles on a new value.
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            if let Some(on_measure) = &self.on_measure {
                let height = layout.bounds().height;
                let changed = self
                    .measured
                    .is_none_or(|current| (current - height).abs() > MEASURE_EPSILON);
                if changed && height > 0.0 {
                    shell.publish(on_measure(height));
                }
            }
        }

        if !self.interactive && is_pointer_event(event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if !self.interactive {
            return mouse::Interaction::default();
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

fn is_pointer_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(_) | Event::Touch(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_events_are_detected() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(is_pointer_event(&event));
    }

    #[test]
    fn window_events_are_not_pointer_events() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!is_pointer_event(&event));
    }
}
