//! Page components, grouped by audience

pub mod admin;
pub mod public;
