//! Settings accessor for the PayU Latam configuration block
//!
//! Exposes a fixed universe of named settings sourced from user-supplied
//! values with declared defaults. Mandatory settings are validated lazily on
//! first access and resolved values are cached for the lifetime of the
//! accessor.

use crate::{Error, Result};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

/// API login credential issued by PayU
pub const API_LOGIN: &str = "API_LOGIN";
/// API key credential issued by PayU
pub const API_KEY: &str = "API_KEY";
/// Numeric merchant identifier
pub const MERCHANT_ID: &str = "MERCHANT_ID";
/// Mapping from ISO country code to numeric account identifier
pub const ACCOUNT_ID_DICT: &str = "ACCOUNT_ID_DICT";

/// The full universe of recognized setting names
pub const DECLARED_SETTINGS: [&str; 4] = [API_LOGIN, API_KEY, MERCHANT_ID, ACCOUNT_ID_DICT];

/// Lazily validated, cached accessor for PayU Latam settings
///
/// Construction performs no validation; each setting is checked on first
/// access and the resolved value is cached so later reads never re-consult
/// the user-supplied mapping or re-run the mandatory check.
#[derive(Debug)]
pub struct PayuSettings {
    /// Caller-supplied overrides, fixed at construction
    user_values: HashMap<String, Value>,
    /// Declared defaults; the key set is the universe of valid names
    defaults: HashMap<String, Value>,
    /// Names that must resolve to a non-empty value
    mandatory: HashSet<String>,
    /// Resolved values, written once per name
    cache: RwLock<HashMap<String, Value>>,
}

impl PayuSettings {
    /// Create an accessor from explicit user values, defaults and mandatory names
    ///
    /// Absent inputs are normalized to empty collections. Nothing is
    /// validated here; misconfigured but never-read settings never fail.
    pub fn new(
        user_values: Option<HashMap<String, Value>>,
        defaults: Option<HashMap<String, Value>>,
        mandatory: Option<HashSet<String>>,
    ) -> Self {
        Self {
            user_values: user_values.unwrap_or_default(),
            defaults: defaults.unwrap_or_default(),
            mandatory: mandatory.unwrap_or_default(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create an accessor over the declared PayU Latam universe
    ///
    /// All four recognized settings default to null and all four are
    /// mandatory, so each must be supplied through `user_values` before its
    /// first access succeeds.
    pub fn declared(user_values: Option<HashMap<String, Value>>) -> Self {
        let defaults = DECLARED_SETTINGS
            .iter()
            .map(|name| (name.to_string(), Value::Null))
            .collect();
        let mandatory = DECLARED_SETTINGS.iter().map(|name| name.to_string()).collect();
        Self::new(user_values, Some(defaults), Some(mandatory))
    }

    /// Resolve a setting by name
    ///
    /// Resolution order: cached value, then user-supplied value, then the
    /// declared default. A name outside the declared universe fails with
    /// [`Error::InvalidSetting`]; a mandatory name resolving to an
    /// empty-like value fails with [`Error::MandatorySettingMissing`] and is
    /// not cached, so the accessor state stays clean after a failure.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(cached) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Ok(cached.clone());
        }

        let default = self
            .defaults
            .get(name)
            .ok_or_else(|| Error::invalid_setting(name))?;
        let value = self.user_values.get(name).unwrap_or(default).clone();

        if self.mandatory.contains(name) && is_empty_value(&value) {
            return Err(Error::mandatory_missing(name));
        }

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.clone());

        Ok(value)
    }

    /// Resolve `API_LOGIN` as a string
    pub fn api_login(&self) -> Result<String> {
        self.get_string(API_LOGIN)
    }

    /// Resolve `API_KEY` as a string
    pub fn api_key(&self) -> Result<String> {
        self.get_string(API_KEY)
    }

    /// Resolve `MERCHANT_ID` as an integer
    pub fn merchant_id(&self) -> Result<i64> {
        let value = self.get(MERCHANT_ID)?;
        value.as_i64().ok_or_else(|| {
            Error::config(format!("{MERCHANT_ID} must be an integer, got {value}"))
        })
    }

    /// Resolve the account identifier for a country code from `ACCOUNT_ID_DICT`
    pub fn account_id(&self, country: &str) -> Result<i64> {
        let dict = self.get(ACCOUNT_ID_DICT)?;
        let entry = dict.get(country).ok_or_else(|| {
            Error::config(format!("no PayU account id configured for country {country:?}"))
        })?;
        entry.as_i64().ok_or_else(|| {
            Error::config(format!(
                "account id for country {country:?} must be an integer, got {entry}"
            ))
        })
    }

    fn get_string(&self, name: &str) -> Result<String> {
        match self.get(name)? {
            Value::String(s) => Ok(s),
            other => Err(Error::config(format!("{name} must be a string, got {other}"))),
        }
    }
}

/// Whether a resolved value counts as missing for mandatory validation
///
/// Mirrors the generic truthiness check of the upstream integration: null,
/// false, zero, empty strings and empty collections are all treated as
/// missing. Note that a legitimately zero-valued mandatory setting can
/// therefore never validate; this is a known quirk kept for compatibility.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
