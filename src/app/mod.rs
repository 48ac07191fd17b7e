// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the demo showcase.
//!
//! The `App` struct wires together the component library (toast controller,
//! cards, controls), localization, and theming, and translates messages into
//! side effects. This file keeps policy decisions (window sizing, theme
//! selection, demo defaults) close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{ActionChoice, Flags, Message, PresetChoice};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::toast;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Root Iced application state for the component showcase.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,

    // Toasts screen state. The visible intent is owned here, outside the
    // controller, exactly like an embedding application would hold it.
    toast_visible: bool,
    position_top: bool,
    show_loader: bool,
    custom_content: bool,
    has_attachment: bool,
    auto_dismiss: bool,
    action_choice: ActionChoice,
    preset_choice: PresetChoice,
    toast: toast::Controller,
    spinner_rotation: f32,
    last_animation: Option<bool>,
    last_announcement: Option<String>,
    offscreen_travel: f32,

    // Cards screen state
    selected_card: Option<usize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("toast_visible", &self.toast_visible)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme_mode: ThemeMode::System,
            toast_visible: false,
            position_top: false,
            show_loader: false,
            custom_content: false,
            has_attachment: false,
            auto_dismiss: false,
            action_choice: ActionChoice::default(),
            preset_choice: PresetChoice::default(),
            toast: toast::Controller::new(toast::ToastOptions::new()),
            spinner_rotation: 0.0,
            last_animation: None,
            last_announcement: None,
            offscreen_travel: config::DEFAULT_OFFSCREEN_TRAVEL,
            selected_card: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags and saved config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(mode) = config.theme_mode {
            app.theme_mode = mode;
        }
        if let Some(travel) = config.offscreen_travel {
            app.offscreen_travel = travel;
        }
        app.toast = toast::Controller::new(update::toast_options(&app));

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.toast.is_busy(),
            self.show_loader && self.toast.should_render_surface(),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
