//! Character Gallery UI Components
//!
//! Stateless Dioxus widgets shared by the gallery shell. They take plain
//! props and event handlers; all state lives in `gallery-core`.
//!
//! ## Conventions
//!
//! - Class names follow a `block__element--modifier` scheme
//! - Every interactive widget is a native `button` or `input`, so Enter and
//!   Space activation come for free
//! - Icons are inline characters, never images

pub mod components;

pub use components::*;
