//! Screen rendering modules

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod resources;
pub mod signup;
pub mod users;
