//! Recognized company profile fields.
//!
//! Every key a source record can carry is one of these variants. The wire
//! label is what collaborators, prompts and JSON payloads use; the kind
//! decides which fusion rule applies.

use crate::error::FirmfuseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized profile field. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Field {
    CompanyName,
    Description,
    Address,
    State,
    PostalCode,
    Phone,
    Email,
    Employees,
    Website,
    Country,
    IndustryType,
}

/// How the reconciliation engine resolves a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Source A, then source B, then generative fallback.
    Scalar,
    /// Both sources combined, then generative fallback.
    MultiValue,
    /// Never taken from a source.
    GenerativeOnly,
}

impl Field {
    /// Fields every source collaborator reports, besides the company name.
    pub const SOURCE_FIELDS: [Field; 8] = [
        Field::Description,
        Field::Address,
        Field::State,
        Field::PostalCode,
        Field::Phone,
        Field::Email,
        Field::Employees,
        Field::Website,
    ];

    pub const ALL: [Field; 11] = [
        Field::CompanyName,
        Field::Description,
        Field::Address,
        Field::State,
        Field::PostalCode,
        Field::Phone,
        Field::Email,
        Field::Employees,
        Field::Website,
        Field::Country,
        Field::IndustryType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CompanyName => "Company Name",
            Field::Description => "Description",
            Field::Address => "Address",
            Field::State => "State",
            Field::PostalCode => "Postal Code",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Employees => "Employees",
            Field::Website => "Website",
            Field::Country => "country",
            Field::IndustryType => "industry_type",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Address | Field::Phone => FieldKind::MultiValue,
            Field::Country | Field::IndustryType => FieldKind::GenerativeOnly,
            _ => FieldKind::Scalar,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = FirmfuseError;

    /// Case-insensitive; spaces and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(' ', "_");
        let field = match key.as_str() {
            "company_name" | "name" => Field::CompanyName,
            "description" => Field::Description,
            "address" => Field::Address,
            "state" => Field::State,
            "postal_code" | "zip" | "zip_code" => Field::PostalCode,
            "phone" => Field::Phone,
            "email" => Field::Email,
            "employees" => Field::Employees,
            "website" => Field::Website,
            "country" => Field::Country,
            "industry_type" | "industry" => Field::IndustryType,
            _ => return Err(FirmfuseError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

impl TryFrom<String> for Field {
    type Error = FirmfuseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.label().to_string()
    }
}
