//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers and constrained text values are enforced at the boundary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
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

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(ProductId, "Identifier of a product record.", "product id");

/// Human-readable secondary key used for detail-page routing.
///
/// Distinct from the store-assigned [`ProductId`]; trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductSlug(String);

impl ProductSlug {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString("slug"))
        } else {
            Ok(Self(trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ProductSlug {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Canonical price representation.
///
/// Prices are normalized to a single `f64` at the write boundary. Parsing a
/// malformed string yields the defined not-a-number value instead of an
/// error; readers must treat NaN as "price unknown".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProductPrice(f64);

impl ProductPrice {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Coerce a free-text price into the canonical representation.
    pub fn parse(value: &str) -> Self {
        Self(value.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    /// Whether the price carries a usable numeric value.
    pub fn is_known(self) -> bool {
        !self.0.is_nan()
    }
}

impl Display for ProductPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for ProductPrice {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_non_positive() {
        assert!(ProductId::new(0).is_err());
        assert!(ProductId::new(-3).is_err());
        assert_eq!(ProductId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn slug_is_trimmed_and_non_empty() {
        assert_eq!(ProductSlug::new("  night-cream ").unwrap().as_str(), "night-cream");
        assert!(ProductSlug::new("   ").is_err());
    }

    #[test]
    fn price_parses_valid_strings() {
        assert_eq!(ProductPrice::parse("19.99").get(), 19.99);
        assert_eq!(ProductPrice::parse(" 5 ").get(), 5.0);
    }

    #[test]
    fn malformed_price_becomes_nan() {
        assert!(!ProductPrice::parse("nineteen").is_known());
        assert!(!ProductPrice::parse("").is_known());
    }
}
