//! Narrow boundary to the phone-number widget.
//!
//! The widget owns the country and dial-code database; the form only consumes what it reports
//! on every keystroke: the current value and the country it detected.

use serde::{Deserialize, Serialize};

/// Country reported by the phone widget alongside each value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDescriptor {
    pub dial_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CountryDescriptor {
    pub fn with_dial_code(dial_code: impl Into<String>) -> Self {
        Self {
            dial_code: dial_code.into(),
            ..Self::default()
        }
    }
}

/// One keystroke worth of phone input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneChange {
    pub raw: String,
    pub country: CountryDescriptor,
}

impl PhoneChange {
    pub fn new(raw: impl Into<String>, country: CountryDescriptor) -> Self {
        Self {
            raw: raw.into(),
            country,
        }
    }

    pub fn digits(&self) -> String {
        strip_non_digits(&self.raw)
    }
}

/// Keep only ASCII digits, dropping formatting such as `+`, spaces, dashes and parentheses.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Contract of the external phone widget.
pub trait PhoneInputAdapter: Send + Sync {
    fn detect(&self, raw: &str) -> PhoneChange;
}

/// Adapter that reports the same country for every value, matching a widget pinned to one
/// default country.
#[derive(Debug, Clone)]
pub struct FixedCountryAdapter {
    country: CountryDescriptor,
}

impl FixedCountryAdapter {
    pub fn new(country: CountryDescriptor) -> Self {
        Self { country }
    }

    pub fn with_dial_code(dial_code: impl Into<String>) -> Self {
        Self::new(CountryDescriptor::with_dial_code(dial_code))
    }

    pub fn country(&self) -> &CountryDescriptor {
        &self.country
    }
}

impl PhoneInputAdapter for FixedCountryAdapter {
    fn detect(&self, raw: &str) -> PhoneChange {
        PhoneChange::new(raw, self.country.clone())
    }
}
