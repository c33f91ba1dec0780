//! Session persistence and the authentication context

mod context;
mod session;

pub use context::*;
pub use session::*;
