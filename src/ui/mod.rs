// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`toast`] - Transient notification banner with animated show/hide lifecycle
//! - [`card`] - Rounded, shadowed content surface with edge-anchored cover sections
//! - [`controls`] - Form controls (switch rows, radio groups)
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, slide wrapper)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Canvas-drawn icon primitives

pub mod card;
pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod toast;
pub mod widgets;
