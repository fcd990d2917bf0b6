//! Form field names and the raw/error records keyed by them

use super::section::Section;
use std::str::FromStr;
use thiserror::Error;

/// Every input the form captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Age,
    Height,
    Pincode,
    City,
    Company,
}

/// Raised when an input event names a field the form doesn't know about
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field name: {0}")]
pub struct UnknownFieldName(pub String);

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Age,
        FieldName::Height,
        FieldName::Pincode,
        FieldName::City,
        FieldName::Company,
    ];

    /// Input name used on change events
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Height => "height",
            Self::Pincode => "pincode",
            Self::City => "city",
            Self::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::Height => "Height in cms",
            Self::Pincode => "Pincode",
            Self::City => "City",
            Self::Company => "Company",
        }
    }

    /// The section in which this field is filled
    pub fn section(&self) -> Section {
        match self {
            Self::Name | Self::Email => Section::Social,
            Self::Age | Self::Height => Section::Physiological,
            Self::Pincode | Self::City => Section::Geographical,
            Self::Company => Section::Financial,
        }
    }
}

impl FromStr for FieldName {
    type Err = UnknownFieldName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "age" => Ok(Self::Age),
            "height" => Ok(Self::Height),
            "pincode" => Ok(Self::Pincode),
            "city" => Ok(Self::City),
            "company" => Ok(Self::Company),
            other => Err(UnknownFieldName(other.to_string())),
        }
    }
}

/// Raw, unvalidated text for every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub email: String,
    pub age: String,
    pub height: String,
    pub pincode: String,
    pub city: String,
    pub company: String,
}

impl Fields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Age => &self.age,
            FieldName::Height => &self.height,
            FieldName::Pincode => &self.pincode,
            FieldName::City => &self.city,
            FieldName::Company => &self.company,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Age => self.age = value,
            FieldName::Height => self.height = value,
            FieldName::Pincode => self.pincode = value,
            FieldName::City => self.city = value,
            FieldName::Company => self.company = value,
        }
    }

    /// Copy of these fields with one value replaced
    pub fn with(&self, field: FieldName, value: String) -> Self {
        let mut fields = self.clone();
        fields.set(field, value);
        fields
    }
}

/// Per-field error messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub age: String,
    pub height: String,
    pub pincode: String,
    pub city: String,
    pub company: String,
}

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Age => &self.age,
            FieldName::Height => &self.height,
            FieldName::Pincode => &self.pincode,
            FieldName::City => &self.city,
            FieldName::Company => &self.company,
        }
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        let message = message.into();
        match field {
            FieldName::Name => self.name = message,
            FieldName::Email => self.email = message,
            FieldName::Age => self.age = message,
            FieldName::Height => self.height = message,
            FieldName::Pincode => self.pincode = message,
            FieldName::City => self.city = message,
            FieldName::Company => self.company = message,
        }
    }

    pub fn clear(&mut self, field: FieldName) {
        self.set(field, String::new());
    }

    /// True if any field carries a message
    pub fn has_errors(&self) -> bool {
        self.iter().any(|(_, message)| !message.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
