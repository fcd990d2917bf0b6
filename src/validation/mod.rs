//! Validation of captured fields into a person record

mod person;
mod traits;

pub use person::{Person, PersonValidator};
pub use traits::Validator;

#[cfg(test)]
pub use traits::MockValidator;
