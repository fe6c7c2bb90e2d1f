//! Lumo Viewer: a single-site desktop shell for the Lumo chat service.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod bridge;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
