// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use super::Screen;
use std::time::Instant;

/// Trailing element choice on the Toasts screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionChoice {
    #[default]
    None,
    Label,
    Icon,
}

/// Preset choice on the Toasts screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetChoice {
    #[default]
    None,
    General,
    Success,
    Failure,
}

/// Top-level messages consumed by `App::update`. The variants forward UI
/// events while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    /// Flip the toast's externally owned visible intent.
    ToggleVisible,
    /// Toast position switch; `true` anchors to the top edge.
    PositionToggled(bool),
    LoaderToggled(bool),
    CustomContentToggled(bool),
    AttachmentToggled(bool),
    AutoDismissToggled(bool),
    ActionSelected(ActionChoice),
    PresetSelected(PresetChoice),
    /// The toast surface reported its rendered height.
    ToastMeasured(f32),
    /// The toast's trailing action control was pressed.
    ToastActionPressed,
    /// The attachment banner's button was pressed.
    AttachmentNoted,
    CardSelected(usize),
    /// Periodic tick driving the toast animation and the loader spinner.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
