// SPDX-License-Identifier: MPL-2.0
//! Transient notification banner with an animated show/hide lifecycle.
//!
//! The toast is a non-blocking surface anchored to a screen edge. An
//! externally owned `visible` intent drives a 300 ms eased slide/fade
//! transition; once fully shown, an optional auto-dismiss deadline fires a
//! dismissal request back to the caller.
//!
//! # Components
//!
//! - [`controller`] - `Controller` state machine owning progress, deadline,
//!   and accessibility side effects
//! - [`motion`] - pure progress-to-position math and the easing curve
//! - [`options`] - `ToastOptions` configuration surface
//! - [`preset`] - General/Success/Failure severity categories
//! - [`view`] - Iced rendering of the overlay layer
//!
//! # Usage
//!
//! ```ignore
//! use iced_bloom::ui::toast::{Controller, ToastOptions, Preset, ToastView};
//!
//! // Keep a controller in your application state
//! let mut controller = Controller::new(
//!     ToastOptions::new().message("Saved").preset(Preset::Success),
//! );
//!
//! // Forward intent changes and ticks from your update function
//! let effects = controller.sync_visible(true, now);
//! let effects = controller.tick(now);
//!
//! // In your view function, stack the toast layer over your content
//! let layer = ToastView::new(&controller, Message::ToastMeasured).view();
//! toast::view::layered(content, layer)
//! ```

pub mod controller;
pub mod motion;
pub mod options;
pub mod preset;
pub mod view;

pub use controller::{Controller, Effect};
pub use motion::SlideFrame;
pub use options::{AutoDismiss, Elevation, Position, ToastAction, ToastOptions};
pub use preset::Preset;
pub use view::ToastView;
