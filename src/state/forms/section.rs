//! Section sequencing and error scoping

use super::field::{FieldErrors, FieldName};

/// One step of the form, in the order the user walks through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Section {
    #[default]
    Social,
    Physiological,
    Geographical,
    Financial,
    Review,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Social,
        Section::Physiological,
        Section::Geographical,
        Section::Financial,
        Section::Review,
    ];

    pub fn first() -> Self {
        Self::Social
    }

    /// Following section; `Review` stays put
    pub fn next(&self) -> Self {
        match self {
            Self::Social => Self::Physiological,
            Self::Physiological => Self::Geographical,
            Self::Geographical => Self::Financial,
            Self::Financial => Self::Review,
            Self::Review => Self::Review,
        }
    }

    /// Preceding section; `Social` stays put
    pub fn previous(&self) -> Self {
        match self {
            Self::Social => Self::Social,
            Self::Physiological => Self::Social,
            Self::Geographical => Self::Physiological,
            Self::Financial => Self::Geographical,
            Self::Review => Self::Financial,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Social => "Social",
            Self::Physiological => "Physiological",
            Self::Geographical => "Geographical",
            Self::Financial => "Financial",
            Self::Review => "Review",
        }
    }

    /// 1-based step number
    pub fn position(&self) -> usize {
        match self {
            Self::Social => 1,
            Self::Physiological => 2,
            Self::Geographical => 3,
            Self::Financial => 4,
            Self::Review => 5,
        }
    }

    /// Fields the user fills in this section
    pub fn fields(&self) -> &'static [FieldName] {
        match self {
            Self::Social => &[FieldName::Name, FieldName::Email],
            Self::Physiological => &[FieldName::Age, FieldName::Height],
            Self::Geographical => &[FieldName::Pincode, FieldName::City],
            Self::Financial => &[FieldName::Company],
            Self::Review => &[],
        }
    }

    pub fn is_review(&self) -> bool {
        matches!(self, Self::Review)
    }
}

/// Drop errors for fields the user hasn't been asked to fill yet.
///
/// Validation always runs over the whole record, so errors belonging to
/// sections after `section` are cleared regardless of what was reported.
pub fn errors_until_current_section(section: Section, errors: &FieldErrors) -> FieldErrors {
    let mut scoped = errors.clone();
    for field in FieldName::ALL {
        if field.section() > section {
            scoped.clear(field);
        }
    }
    scoped
}
