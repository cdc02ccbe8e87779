use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub auth: AuthConfig,
    pub shipping: ShippingConfig,
    pub storage: StorageKeys,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StoreSection {
    pub name: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "LUMINA".to_string(),
        }
    }
}

/// Demo credentials and password policy.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub admin_email: String,
    pub min_password_len: usize,
    /// Simulated network delay of the sign-in form, in milliseconds.
    pub login_delay_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            admin_email: "admin@lumina.com".to_string(),
            min_password_len: 4,
            login_delay_ms: 800,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShippingConfig {
    /// CEPs starting with this prefix get the near rate.
    pub near_prefix: String,
    pub near_cost: f64,
    pub far_cost: f64,
    pub delivery_days: u32,
    pub quote_delay_ms: u32,
    pub payment_delay_ms: u32,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            near_prefix: "0".to_string(),
            near_cost: 15.90,
            far_cost: 29.90,
            delivery_days: 5,
            quote_delay_ms: 1000,
            payment_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    pub cart: String,
    pub user: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: "lumina_cart".to_string(),
            user: "lumina_user".to_string(),
            theme: "lumina_theme".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub toast_ms: u32,
    pub low_stock_threshold: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ms: 4000,
            low_stock_threshold: 10,
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[store]
name = "LUMINA"

[auth]
admin_username = "admin"
admin_password = "admin"
admin_email = "admin@lumina.com"
min_password_len = 4
login_delay_ms = 800

[shipping]
near_prefix = "0"
near_cost = 15.90
far_cost = 29.90
delivery_days = 5
quote_delay_ms = 1000
payment_delay_ms = 2000

[storage]
cart = "lumina_cart"
user = "lumina_user"
theme = "lumina_theme"

[ui]
toast_ms = 4000
low_stock_threshold = 10
"#;

/// Load configuration
///
/// Uses the override document when one is given (missing keys keep their
/// defaults), otherwise falls back to the embedded default config.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<StoreConfig> {
    if let Some(contents) = override_toml {
        log::info!("Loading store config from override document");
        let config: StoreConfig = toml::from_str(contents)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: StoreConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.storage.cart, "lumina_cart");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[shipping]\nfar_cost = 40.0\n")).unwrap();
        assert_eq!(config.shipping.far_cost, 40.0);
        assert_eq!(config.shipping.near_cost, 15.90);
        assert_eq!(config.auth.admin_username, "admin");
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("[shipping]\nfar_cost = \"free\"\n")).is_err());
    }
}
