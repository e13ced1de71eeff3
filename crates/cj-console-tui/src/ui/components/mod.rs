//! Reusable UI components

pub mod header;
pub mod progress;
pub mod status_bar;
pub mod table;
