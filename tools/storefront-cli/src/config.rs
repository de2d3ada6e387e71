//! CLI configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront::StorefrontConfig;
use storefront_commerce::Currency;
use storefront_observability::{LogFormat, LogLevel};

/// Config file names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store presentation and pricing.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog content source.
    #[serde(default)]
    pub content: ContentConfig,

    /// Payment provider sessions.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Build the storefront configuration, validating the currency.
    pub fn to_storefront_config(&self) -> Result<StorefrontConfig> {
        let currency = Currency::from_code(&self.store.currency)
            .with_context(|| format!("Unknown currency code: {}", self.store.currency))?;
        if self.store.shipping_cents < 0 {
            bail!("store.shipping_cents must not be negative");
        }

        let mut config = StorefrontConfig::new(&self.store.name)
            .with_title(&self.store.title)
            .with_currency(currency)
            .with_shipping_cents(self.store.shipping_cents);
        if let Some(ref css) = self.store.css_path {
            config = config.with_css(css);
        }
        Ok(config)
    }

    /// Minimum log level.
    pub fn log_level(&self) -> Result<LogLevel> {
        Ok(self.logging.level.parse()?)
    }

    /// Log line format.
    pub fn log_format(&self) -> Result<LogFormat> {
        Ok(self.logging.format.parse()?)
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Default page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Flat shipping charge in minor units.
    #[serde(default = "default_shipping_cents")]
    pub shipping_cents: i64,

    /// Stylesheet linked from every page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_path: Option<String>,
}

fn default_name() -> String {
    "Storefront".to_string()
}

fn default_title() -> String {
    "Apple Store Online".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_shipping_cents() -> i64 {
    storefront_commerce::basket::FLAT_SHIPPING_CENTS
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            currency: default_currency(),
            shipping_cents: default_shipping_cents(),
            css_path: None,
        }
    }
}

/// Content source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// CMS export with categories and products.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

fn default_catalog_path() -> String {
    "workloads/storefront/fixtures/catalog.json".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
        }
    }
}

/// Payment provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfig {
    /// Export of completed checkout sessions.
    #[serde(default = "default_sessions_path")]
    pub sessions_path: String,
}

fn default_sessions_path() -> String {
    "workloads/storefront/fixtures/sessions.json".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            sessions_path: default_sessions_path(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Line format: json or human.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[store]
name = "{name}"
title = "Apple Store Online"
currency = "USD"
# Flat shipping charge in cents
shipping_cents = 2000
# css_path = "/pkg/storefront.css"

[content]
catalog_path = "workloads/storefront/fixtures/catalog.json"

[payment]
sessions_path = "workloads/storefront/fixtures/sessions.json"

[logging]
# trace, debug, info, warn, error
level = "warn"
# json or human
format = "human"
"#,
        name = name
    )
}
