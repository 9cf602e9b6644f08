//! Configuration loading utilities
//!
//! Assembles the user-supplied PayU Latam values from a configuration file
//! and environment variables. The loader only gathers values; validation is
//! deferred to the accessor's first read of each setting.

use crate::config::settings::{
    ACCOUNT_ID_DICT, API_KEY, API_LOGIN, MERCHANT_ID, PayuSettings,
};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Host application configuration document, reduced to the block we own
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    /// The `[payu_latam]` table; other sections are ignored
    payu_latam: Option<HashMap<String, toml::Value>>,
}

/// Configuration loader with multiple source support
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self
    }

    /// Load user values with precedence order:
    /// 1. Environment variables (highest priority)
    /// 2. The `[payu_latam]` table of the configuration file
    /// 3. Declared defaults (lowest priority, applied by the accessor)
    pub fn load(&self, config_file: Option<&Path>) -> Result<PayuSettings> {
        let mut user_values = HashMap::new();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading PayU Latam configuration from file: {:?}", path);
                user_values = read_file_section(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        apply_env_overrides(&mut user_values)?;

        info!("PayU Latam configuration assembled");

        Ok(PayuSettings::declared(Some(user_values)))
    }

    /// Load user values from environment variables only
    pub fn from_env_only(&self) -> Result<PayuSettings> {
        let mut user_values = HashMap::new();
        apply_env_overrides(&mut user_values)?;
        Ok(PayuSettings::declared(Some(user_values)))
    }
}

fn read_file_section(path: &Path) -> Result<HashMap<String, Value>> {
    let raw = std::fs::read_to_string(path)?;
    let document: ConfigDocument = toml::from_str(&raw)?;

    let Some(section) = document.payu_latam else {
        debug!("No [payu_latam] section in {:?}", path);
        return Ok(HashMap::new());
    };

    let mut values = HashMap::new();
    for (name, value) in section {
        values.insert(name, serde_json::to_value(value)?);
    }
    Ok(values)
}

fn apply_env_overrides(values: &mut HashMap<String, Value>) -> Result<()> {
    if let Ok(login) = std::env::var("PAYU_LATAM_API_LOGIN") {
        values.insert(API_LOGIN.to_string(), Value::String(login));
    }

    if let Ok(key) = std::env::var("PAYU_LATAM_API_KEY") {
        values.insert(API_KEY.to_string(), Value::String(key));
    }

    if let Ok(merchant) = std::env::var("PAYU_LATAM_MERCHANT_ID") {
        values.insert(MERCHANT_ID.to_string(), parse_merchant_id(&merchant)?);
    }

    if let Ok(dict) = std::env::var("PAYU_LATAM_ACCOUNT_ID_DICT") {
        values.insert(ACCOUNT_ID_DICT.to_string(), parse_account_id_dict(&dict)?);
    }

    Ok(())
}

fn parse_merchant_id(raw: &str) -> Result<Value> {
    let id: i64 = raw
        .parse()
        .map_err(|e| Error::Config(format!("Invalid merchant id: {}", e)))?;
    Ok(Value::from(id))
}

/// Parses the account id dictionary override, given as a JSON object literal
fn parse_account_id_dict(raw: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|e| Error::Config(format!("Invalid account id dict: {}", e)))?;
    if !parsed.is_object() {
        return Err(Error::Config(format!(
            "Invalid account id dict: expected object, got {}",
            parsed
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_falls_through() {
        let loader = ConfigLoader::new();
        let settings = loader
            .load(Some(Path::new("/nonexistent/payu.toml")))
            .unwrap();

        // Nothing supplied, so the mandatory setting fails on access
        assert!(settings.get(API_LOGIN).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[payu_latam]
API_LOGIN = "pRRXKOl8ikMmt9u"
MERCHANT_ID = 508029
"#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader.load(Some(temp_file.path())).unwrap();

        assert_eq!(settings.get(API_LOGIN).unwrap(), json!("pRRXKOl8ikMmt9u"));
        assert_eq!(settings.get(MERCHANT_ID).unwrap(), json!(508029));
    }

    #[test]
    fn test_load_file_with_nested_table() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[payu_latam]
MERCHANT_ID = 508029

[payu_latam.ACCOUNT_ID_DICT]
CO = 512321
"#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader.load(Some(temp_file.path())).unwrap();

        assert_eq!(
            settings.get(ACCOUNT_ID_DICT).unwrap(),
            json!({"CO": 512321})
        );
        assert_eq!(settings.account_id("CO").unwrap(), 512321);
    }

    #[test]
    fn test_load_file_without_section() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
port = 8080
"#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader.load(Some(temp_file.path())).unwrap();

        assert!(settings.get(API_LOGIN).is_err());
    }

    #[test]
    fn test_env_var_override() {
        unsafe {
            std::env::set_var("PAYU_LATAM_API_KEY", "4Vj8eK4rloUd272L48hsrarnUA");
        }

        let loader = ConfigLoader::new();
        let settings = loader.from_env_only().unwrap();

        assert_eq!(settings.api_key().unwrap(), "4Vj8eK4rloUd272L48hsrarnUA");

        unsafe {
            std::env::remove_var("PAYU_LATAM_API_KEY");
        }
    }

    #[test]
    fn test_parse_merchant_id() {
        assert_eq!(parse_merchant_id("508029").unwrap(), json!(508029));

        let err = parse_merchant_id("not-a-number").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Invalid merchant id"));
    }

    #[test]
    fn test_parse_account_id_dict() {
        assert_eq!(
            parse_account_id_dict(r#"{"CO": 512321}"#).unwrap(),
            json!({"CO": 512321})
        );

        assert!(matches!(
            parse_account_id_dict("not json").unwrap_err(),
            Error::Config(_)
        ));
        assert!(matches!(
            parse_account_id_dict("[1, 2]").unwrap_err(),
            Error::Config(_)
        ));
    }
}
