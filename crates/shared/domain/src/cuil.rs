//! CUIL value object.
//!
//! A CUIL (Código Único de Identificación Laboral) is the Argentine national
//! labor identification code, written as `DD-DDDDDDDD-D`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::constants::{CUIL_EMPTY_MESSAGE, CUIL_FORMAT_MESSAGE, CUIL_PATTERN};
use crate::error::{DomainError, DomainResult};

static CUIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(CUIL_PATTERN).expect("CUIL pattern is a valid regex"));

/// Validated CUIL.
///
/// Only obtainable through [`Cuil::new`], so holding one means the string
/// matched the structural pattern. The check digit is not verified
/// arithmetically.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cuil(String);

impl Cuil {
    /// Validate and normalize a raw CUIL string.
    ///
    /// # Errors
    /// * [`DomainError::EmptyValue`] if the input is empty or whitespace only
    /// * [`DomainError::Format`] if it does not match `DD-DDDDDDDD-D`
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::empty_value(CUIL_EMPTY_MESSAGE));
        }

        if !CUIL_REGEX.is_match(trimmed) {
            return Err(DomainError::format(CUIL_FORMAT_MESSAGE));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Validate an optional raw value; `None` is treated as empty.
    pub fn parse_optional(raw: Option<&str>) -> DomainResult<Self> {
        Self::new(raw.unwrap_or_default())
    }

    /// Get the normalized string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Cuil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cuil").field(&self.0).finish()
    }
}

impl fmt::Display for Cuil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cuil {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Cuil {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cuil::new(value)
    }
}

impl TryFrom<&str> for Cuil {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Cuil::new(value)
    }
}

impl From<Cuil> for String {
    fn from(cuil: Cuil) -> Self {
        cuil.0
    }
}

impl Serialize for Cuil {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
