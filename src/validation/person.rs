//! Person record and the rules that produce it

use super::traits::Validator;
use crate::state::{FieldErrors, FieldName, Fields};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

const AGE_RANGE: (u8, u8) = (1, 120);
const HEIGHT_RANGE: (u16, u16) = (50, 272);
const PINCODE_LEN: usize = 6;

/// A fully validated person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub height_cm: u16,
    pub pincode: String,
    pub city: String,
    pub company: String,
}

/// Why a single field failed validation. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Email is not a valid address")]
    InvalidEmail,

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),

    #[error("{label} must be between {min} and {max}")]
    OutOfRange {
        label: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Pincode must be 6 digits and cannot start with 0")]
    InvalidPincode,
}

/// Default validator for the person form
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl Validator for PersonValidator {
    fn validate(&self, fields: &Fields) -> Result<Person, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = record(&mut errors, FieldName::Name, required(fields, FieldName::Name));
        let email = record(&mut errors, FieldName::Email, email(fields));
        let age = record(
            &mut errors,
            FieldName::Age,
            whole_number(fields, FieldName::Age, "Age", AGE_RANGE),
        );
        let height = record(
            &mut errors,
            FieldName::Height,
            whole_number(fields, FieldName::Height, "Height", HEIGHT_RANGE),
        );
        let pincode = record(&mut errors, FieldName::Pincode, pincode(fields));
        let city = record(&mut errors, FieldName::City, required(fields, FieldName::City));
        let company = record(
            &mut errors,
            FieldName::Company,
            required(fields, FieldName::Company),
        );

        match (name, email, age, height, pincode, city, company) {
            (
                Some(name),
                Some(email),
                Some(age),
                Some(height),
                Some(pincode),
                Some(city),
                Some(company),
            ) => Ok(Person {
                name,
                email,
                age,
                height_cm: height,
                pincode,
                city,
                company,
            }),
            _ => Err(errors),
        }
    }
}

/// Store a failure message and turn the result into an option
fn record<T>(
    errors: &mut FieldErrors,
    field: FieldName,
    result: Result<T, FieldError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.set(field, err.to_string());
            None
        }
    }
}

fn required(fields: &Fields, field: FieldName) -> Result<String, FieldError> {
    let value = fields.get(field).trim();
    if value.is_empty() {
        return Err(FieldError::Required(field.label()));
    }
    Ok(value.to_string())
}

fn email(fields: &Fields) -> Result<String, FieldError> {
    let value = required(fields, FieldName::Email)?;
    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FieldError::InvalidEmail);
    };
    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || !domain_ok {
        return Err(FieldError::InvalidEmail);
    }

    Ok(value)
}

fn whole_number<T>(
    fields: &Fields,
    field: FieldName,
    label: &'static str,
    (min, max): (T, T),
) -> Result<T, FieldError>
where
    T: FromStr + PartialOrd + Copy + Into<u32>,
{
    let value = fields.get(field).trim();
    if value.is_empty() {
        return Err(FieldError::Required(label));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::NotANumber(label));
    }
    let out_of_range = FieldError::OutOfRange {
        label,
        min: min.into(),
        max: max.into(),
    };
    // All digits, so a parse failure can only be overflow
    let number: T = value.parse().map_err(|_| out_of_range.clone())?;
    if !(min..=max).contains(&number) {
        return Err(out_of_range);
    }
    Ok(number)
}

fn pincode(fields: &Fields) -> Result<String, FieldError> {
    let value = required(fields, FieldName::Pincode)?;
    let valid = value.len() == PINCODE_LEN
        && value.chars().all(|c| c.is_ascii_digit())
        && !value.starts_with('0');
    if !valid {
        return Err(FieldError::InvalidPincode);
    }
    Ok(value)
}
