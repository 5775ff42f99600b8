//! Application state module

mod app_state;
mod forms;
mod toast_state;

pub use app_state::*;
pub use forms::*;
pub use toast_state::*;
