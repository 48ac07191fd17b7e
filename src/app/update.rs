// SPDX-License-Identifier: MPL-2.0
//! Message handling for the demo application.

use super::{ActionChoice, App, Message, PresetChoice};
use crate::ui::icons::Glyph;
use crate::ui::toast::{Controller, Effect, Position, Preset, ToastAction, ToastOptions};
use iced::{window, Task};
use std::time::{Duration, Instant};

/// Auto-dismiss delay used when the demo's switch is on.
const DEMO_AUTO_DISMISS: Duration = Duration::from_millis(2500);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.15;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SwitchScreen(screen) => {
            app.screen = screen;
            Task::none()
        }
        Message::ToggleVisible => {
            app.toast_visible = !app.toast_visible;
            let effects = app.toast.sync_visible(app.toast_visible, Instant::now());
            route_effects(app, effects)
        }
        Message::PositionToggled(top) => {
            app.position_top = top;
            remount_toast(app)
        }
        Message::LoaderToggled(show) => {
            app.show_loader = show;
            refresh_options(app);
            Task::none()
        }
        Message::CustomContentToggled(custom) => {
            app.custom_content = custom;
            remount_toast(app)
        }
        Message::AttachmentToggled(attachment) => {
            app.has_attachment = attachment;
            remount_toast(app)
        }
        Message::AutoDismissToggled(auto) => {
            app.auto_dismiss = auto;
            refresh_options(app);
            Task::none()
        }
        Message::ActionSelected(choice) => {
            app.action_choice = choice;
            refresh_options(app);
            Task::none()
        }
        Message::PresetSelected(choice) => {
            app.preset_choice = choice;
            refresh_options(app);
            Task::none()
        }
        Message::ToastMeasured(height) => {
            app.toast.measured(height);
            Task::none()
        }
        Message::ToastActionPressed => {
            let effects = app.toast.request_dismiss();
            route_effects(app, effects)
        }
        Message::AttachmentNoted => Task::none(),
        Message::CardSelected(index) => {
            app.selected_card = Some(index);
            Task::none()
        }
        Message::Tick(now) => handle_tick(app, now),
    }
}

fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    if app.show_loader && app.toast.should_render_surface() {
        app.spinner_rotation += SPINNER_SPEED;
        if app.spinner_rotation > std::f32::consts::TAU {
            app.spinner_rotation -= std::f32::consts::TAU;
        }
    }

    let effects = app.toast.tick(now);
    route_effects(app, effects)
}

/// Routes controller effects to their demo-side channels. Every channel is
/// best-effort.
fn route_effects(app: &mut App, effects: Vec<Effect>) -> Task<Message> {
    let mut tasks = Vec::new();

    for effect in effects {
        match effect {
            Effect::DismissRequested => {
                // The dismiss callback: flip the intent off and let the
                // controller animate out.
                app.toast_visible = false;
                let follow_up = app.toast.sync_visible(false, Instant::now());
                tasks.push(route_effects(app, follow_up));
            }
            Effect::AnimationEnded { visible } => {
                app.last_animation = Some(visible);
            }
            Effect::Announce(text) => {
                app.last_announcement = Some(text);
            }
            Effect::Haptic => {
                tasks.push(window::latest().and_then(|id| {
                    window::request_user_attention(id, Some(window::UserAttention::Informational))
                }));
            }
            // No focusable target on desktop; skipped.
            Effect::FocusAction => {}
        }
    }

    Task::batch(tasks)
}

/// Builds the toast configuration from the screen's control state.
pub(super) fn toast_options(app: &App) -> ToastOptions {
    let mut options = ToastOptions::new()
        .position(if app.position_top {
            Position::Top
        } else {
            Position::Bottom
        })
        .message(toast_message(app))
        .show_loader(app.show_loader)
        .offscreen_travel(app.offscreen_travel)
        .dismiss_wired(true);

    if app.auto_dismiss {
        options = options.auto_dismiss(DEMO_AUTO_DISMISS);
    }

    options = match app.preset_choice {
        PresetChoice::None => options,
        PresetChoice::General => options.preset(Preset::General),
        PresetChoice::Success => options.preset(Preset::Success),
        PresetChoice::Failure => options.preset(Preset::Failure),
    };

    match app.action_choice {
        ActionChoice::None => options,
        ActionChoice::Label => {
            options.action(ToastAction::label(app.i18n.tr("toast-action-undo")))
        }
        ActionChoice::Icon => options.action(ToastAction::icon(Glyph::Plus)),
    }
}

fn toast_message(app: &App) -> String {
    let key = match app.preset_choice {
        PresetChoice::None | PresetChoice::General => "toast-message-general",
        PresetChoice::Success => "toast-message-success",
        PresetChoice::Failure => "toast-message-failure",
    };
    app.i18n.tr(key)
}

fn refresh_options(app: &mut App) {
    app.toast.set_options(toast_options(app));
}

/// Rebuilds the controller from scratch, like the original demo remounting
/// the component when its structure changes. A visible toast re-enters with
/// the mount delay.
fn remount_toast(app: &mut App) -> Task<Message> {
    let options = toast_options(app);

    if app.toast_visible {
        let (controller, effects) = Controller::new_shown(options, Instant::now());
        app.toast = controller;
        route_effects(app, effects)
    } else {
        app.toast = Controller::new(options);
        Task::none()
    }
}
