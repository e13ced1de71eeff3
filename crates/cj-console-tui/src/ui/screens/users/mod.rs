//! User management screens

pub mod groups;
pub mod list;
pub mod menu;
