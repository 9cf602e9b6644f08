//! PayU Latam Settings Accessor
//!
//! Configuration access for a PayU Latam payment integration. The crate
//! exposes a fixed universe of recognized settings (`API_LOGIN`, `API_KEY`,
//! `MERCHANT_ID`, `ACCOUNT_ID_DICT`), sourced from user-supplied values with
//! declared defaults. Mandatory settings are validated lazily on first
//! access and resolved values are cached for the lifetime of the accessor,
//! so a misconfigured but never-read setting never fails.
//!
//! Construct the accessor once during application startup, either directly
//! from a value mapping or through [`ConfigLoader`], and share it by
//! reference for the rest of the process.
//!
//! # Examples
//!
//! ```rust
//! use payu_latam_settings::{PayuSettings, settings::API_LOGIN};
//! use serde_json::Value;
//! use std::collections::HashMap;
//!
//! # fn main() -> payu_latam_settings::Result<()> {
//! let mut user_values = HashMap::new();
//! user_values.insert(API_LOGIN.to_string(), Value::from("pRRXKOl8ikMmt9u"));
//!
//! let settings = PayuSettings::declared(Some(user_values));
//! assert_eq!(settings.api_login()?, "pRRXKOl8ikMmt9u");
//! # Ok(())
//! # }
//! ```
//!
//! Loading the `[payu_latam]` block from an application config file:
//!
//! ```rust,no_run
//! use payu_latam_settings::ConfigLoader;
//! use std::path::Path;
//!
//! # fn main() -> payu_latam_settings::Result<()> {
//! let settings = ConfigLoader::new().load(Some(Path::new("app.toml")))?;
//! let merchant_id = settings.merchant_id()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use config::settings;
pub use config::{ConfigLoader, PayuSettings};
pub use error::{Error, Result};
