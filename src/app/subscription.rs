// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription driving the toast animation, the
/// auto-dismiss deadline, and the loader spinner.
///
/// Ticks at roughly frame rate, but only while something actually needs
/// them; an idle app has no subscription at all.
pub fn create_tick_subscription(
    toast_busy: bool,
    loader_spinning: bool,
) -> Subscription<Message> {
    if toast_busy || loader_spinning {
        time::every(Duration::from_millis(16)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
