use std::env;

use crate::models::entry::Currency;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub currency: Currency,
    pub no_color: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let currency_code = env::var("DEFAULT_CURRENCY").unwrap_or("ARS".to_string());
        let config = Config {
            log_level: env::var("LOG_LEVEL").unwrap_or("info".to_string()),
            environment: env::var("APP_ENV").unwrap_or("development".to_string()),
            currency: Currency::from_code(&currency_code).ok_or_else(|| {
                anyhow::anyhow!("DEFAULT_CURRENCY '{}' is not a known code", currency_code)
            })?,
            no_color: env::var("NO_COLOR").is_ok(),
        };

        Ok(config)
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
