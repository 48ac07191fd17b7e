// SPDX-License-Identifier: MPL-2.0
//! `iced_bloom` is a small library of themeable presentational widgets for the
//! Iced GUI toolkit: toast notifications, card layouts, and form controls.
//!
//! The crate also ships a demo showcase binary demonstrating every component,
//! with internationalization via Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_bloom/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
