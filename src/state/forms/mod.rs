//! Form domain layer
//!
//! Field values, the registration form state holder and its validation rules.

mod field;
mod registration_form;
mod validation;

pub use field::{FieldName, FormField};
pub use registration_form::{Form, RegistrationForm, SUCCESS_MESSAGE};
pub use validation::ValidationError;
