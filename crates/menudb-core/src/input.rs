//! Typed parsing of caller-supplied names, prices and quantities.
//!
//! Every value that reaches the stores has gone through one of these types,
//! so a malformed price or quantity surfaces as [`Error::MalformedInput`]
//! instead of a storage error.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Normalize a product name: trim surrounding whitespace and lowercase.
///
/// The normalized form is the uniqueness key of the `menu` table.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized, non-empty product name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Normalize `raw` and reject names that are empty afterwards.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = normalize_name(raw);
        if name.is_empty() {
            return Err(Error::malformed("name", raw, "name is empty"));
        }
        Ok(Self(name))
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the normalized string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finite, non-negative price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Validate a numeric price.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::malformed("price", value.to_string(), "not a finite number"));
        }
        if value < 0.0 {
            return Err(Error::malformed("price", value.to_string(), "must not be negative"));
        }
        Ok(Self(value))
    }

    /// The price as stored.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| Error::malformed("price", s, "not a number"))?;
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i64);

impl Quantity {
    /// Validate a quantity.
    pub fn new(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(Error::malformed("quantity", value.to_string(), "must be positive"));
        }
        Ok(Self(value))
    }

    /// The quantity as stored.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::malformed("quantity", s, "not an integer"))?;
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
