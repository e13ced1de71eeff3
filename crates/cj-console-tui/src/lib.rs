//! CloudJunction admin console TUI
//!
//! Terminal front-end over `cj-console-core`: screens render whatever the
//! core router decides, key handlers translate input into reducer actions
//! and form-buffer edits.

pub mod app;
pub mod ui;

pub use app::App;
