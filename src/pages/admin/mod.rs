//! Admin console pages

mod dashboard;
mod rooms;
mod services;
mod shifts;
mod staff;
mod staff_detail;
mod staff_edit;

pub use dashboard::*;
pub use rooms::*;
pub use services::*;
pub use shifts::*;
pub use staff::*;
pub use staff_detail::*;
pub use staff_edit::*;
