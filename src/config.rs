use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "STOCKWATCH_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub zip_code: String,
    pub products_file: String,
    pub poll_interval_secs: u64,
    pub request_timeout_ms: u64,
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zip_code: "560085".to_string(),
            products_file: "products.json".to_string(),
            poll_interval_secs: 10,
            request_timeout_ms: 10_000,
            api_url: "https://api.croma.com/inventory/oms/v2/tms/details-pwa/".to_string(),
        }
    }
}

/// Config from ENV (STOCKWATCH_*) over defaults.
pub fn load() -> Config {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.zip_code, "560085");
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.products_file, "products.json");
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("STOCKWATCH_ZIP_CODE", "400001");
            jail.set_env("STOCKWATCH_POLL_INTERVAL_SECS", "30");
            let config = load();
            assert_eq!(config.zip_code, "400001");
            assert_eq!(config.poll_interval_secs, 30);
            assert_eq!(config.products_file, "products.json");
            Ok(())
        });
    }
}
