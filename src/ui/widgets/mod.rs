// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets shared by the components.
//!
//! - [`spinner`] - Canvas-based animated loading spinner (default toast loader)
//! - [`slide`] - Wrapper that offsets its content vertically, gates pointer
//!   events, and reports measured heights

pub mod slide;
pub mod spinner;

pub use slide::Slide;
pub use spinner::Spinner;
