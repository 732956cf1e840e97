//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! labels) so that once a value reaches the filter core it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided text is not an integer identifier.
    #[error("invalid id: {0}")]
    InvalidId(String),
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided token is not a member of the enumeration.
    #[error("unknown value: {0}")]
    UnknownValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            /// Parses the text typed into an identifier input.
            ///
            /// Any finite numeral denoting a whole number is accepted, so
            /// `5.0` and `1e2` are ids as well as `5` and `100`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let invalid = || TypeConstraintError::InvalidId(trimmed.to_string());
                let value = match trimmed.parse::<i32>() {
                    Ok(value) => value,
                    Err(_) => {
                        let number = trimmed.parse::<f64>().map_err(|_| invalid())?;
                        if !number.is_finite()
                            || number.fract() != 0.0
                            || number < f64::from(i32::MIN)
                            || number > f64::from(i32::MAX)
                        {
                            return Err(invalid());
                        }
                        number as i32
                    }
                };
                Self::new(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ContractId, "Unique identifier for a purchase/sale contract.");
id_newtype!(ClientId, "Unique identifier for a client (person or company).");
id_newtype!(UserId, "Unique identifier for a staff user.");
id_newtype!(VehicleId, "Unique identifier for a vehicle.");

/// Display label of a reference option, trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct OptionLabel(String);

impl OptionLabel {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against an already lower-cased term.
    pub fn contains_term(&self, normalized_term: &str) -> bool {
        self.0.to_lowercase().contains(normalized_term)
    }
}

impl Display for OptionLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OptionLabel {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for OptionLabel {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionLabel> for String {
    fn from(value: OptionLabel) -> Self {
        value.0
    }
}
