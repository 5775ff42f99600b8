//! Form rendering module
//!
//! - `field_renderer`: single input rendering
//! - `registration_form`: the registration card

mod field_renderer;
mod registration_form;

pub use registration_form::{draw as draw_registration, FORM_HEIGHT, FORM_WIDTH};
