use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RegistryError, Result};

static SIREN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").unwrap());
static SIRET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{14}$").unwrap());

/// A structurally valid company identifier.
///
/// Classification only looks at the shape of the string; whether the number
/// is actually registered is the registry's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyIdentifier {
    /// 9 digits identifying a legal entity, never starting with `0`.
    Siren(String),
    /// 14 digits identifying one establishment (SIREN + 5 digit suffix).
    Siret(String),
}

impl CompanyIdentifier {
    pub fn parse(value: &str) -> Result<Self> {
        if SIREN_PATTERN.is_match(value) {
            if value.starts_with('0') {
                return Err(RegistryError::InvalidFormat);
            }
            return Ok(CompanyIdentifier::Siren(value.to_string()));
        }

        if SIRET_PATTERN.is_match(value) {
            return Ok(CompanyIdentifier::Siret(value.to_string()));
        }

        Err(RegistryError::InvalidFormat)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CompanyIdentifier::Siren(value) | CompanyIdentifier::Siret(value) => value,
        }
    }

    /// The SIREN part of the identifier.
    pub fn siren(&self) -> &str {
        &self.as_str()[..9]
    }

    pub fn is_siret(&self) -> bool {
        matches!(self, CompanyIdentifier::Siret(_))
    }
}

impl fmt::Display for CompanyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
