//! # Validated Inputs
//!
//! Value objects that can only be built from arguments which passed the
//! presence/shape checks. Once an operation holds a [`Text`] or an [`Id`] it
//! no longer needs to re-check anything before talking to a backend.

use std::fmt;

use crate::error::DomainError;

/// A string that is non-empty after trimming. Stores the trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_input(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Optional arguments: absent or blank both mean "not supplied".
    pub fn parse_optional(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A strictly positive identifier as used by the payment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(i32);

impl Id {
    /// Accepts any integer width so callers never truncate before validating.
    pub fn parse(field: &'static str, raw: i64) -> Result<Self, DomainError> {
        if raw <= 0 {
            return Err(DomainError::invalid_input(field));
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::invalid_input(field))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated arguments shared by purchase-order and booking generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub rack_id_reference: Id,
    pub group_id: Id,
    pub coupon_code: Option<Text>,
    pub email: Text,
    pub phone: Text,
    pub trace_id: Text,
}
