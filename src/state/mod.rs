//! Application state module

mod app_state;
mod controller;
mod forms;
mod validation;

pub use app_state::*;
pub use controller::*;
pub use forms::*;
