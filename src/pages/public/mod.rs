//! Public-facing pages

mod forgot_password;
mod home;
mod login;
mod not_found;
mod register;

pub use forgot_password::*;
pub use home::*;
pub use login::*;
pub use not_found::*;
pub use register::*;

/// How long a success toast stays on screen before the auth flows move on
/// to the login page.
#[cfg(feature = "web")]
pub(crate) const REDIRECT_DELAY_MS: u32 = 3_000;
