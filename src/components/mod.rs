//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod footer;
mod header;
mod loading;
mod otp_input;
mod pagination;
mod toast;

pub use admin_layout::*;
pub use admin_nav::*;
pub use footer::*;
pub use header::*;
pub use loading::*;
pub use otp_input::*;
pub use pagination::*;
pub use toast::*;
