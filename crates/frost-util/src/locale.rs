//! Locale identifiers such as `en_US` or `de-DE`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// A language, optional country and optional variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    pub language: String,
    pub country: String,
    pub variant: String,
}

impl Locale {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: String::new(),
            variant: String::new(),
        }
    }

    pub fn with_country(language: &str, country: &str) -> Self {
        Self {
            country: country.to_ascii_uppercase(),
            ..Self::new(language)
        }
    }

    /// Parse `lang`, `lang_COUNTRY` or `lang_COUNTRY_VARIANT`; `-` is
    /// accepted in place of `_`. Case is normalized.
    pub fn parse(input: &str) -> Result<Self, LocaleError> {
        let normalized = input.trim().replace('-', "_");
        if normalized.is_empty() {
            return Err(LocaleError::Empty);
        }

        let parts: Vec<&str> = normalized.split('_').collect();
        if parts.len() > 3 {
            return Err(LocaleError::TooManyParts {
                input: input.to_string(),
            });
        }

        let language = parts[0].to_ascii_lowercase();
        let country = parts.get(1).map(|c| c.to_ascii_uppercase()).unwrap_or_default();
        let variant = parts.get(2).map(|v| v.to_ascii_uppercase()).unwrap_or_default();

        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocaleError::InvalidLanguage { code: language });
        }
        let alpha_country = country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic());
        let numeric_country = country.len() == 3 && country.chars().all(|c| c.is_ascii_digit());
        if !country.is_empty() && !alpha_country && !numeric_country {
            return Err(LocaleError::InvalidCountry { code: country });
        }
        if parts.len() == 3 && (variant.is_empty() || !variant.chars().all(|c| c.is_ascii_alphanumeric())) {
            return Err(LocaleError::InvalidVariant { code: variant });
        }

        Ok(Self {
            language,
            country,
            variant,
        })
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}
