//! HTML template rendering handlers.

mod home;
mod view;

pub use home::home_handler;
pub use view::{ResultTemplate, ViewForm, view_handler};
