// config.rs
use std::env;

const DEFAULT_PHONEPE_BASE_URL: &str = "https://api-preprod.phonepe.com/apis/pg-sandbox";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub merchant_id: String,
    pub salt_key: String,
    pub salt_index: String,
    pub phonepe_base_url: String,
    pub app_base_url: String,
    pub database_url: String,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            merchant_id: env::var("MERCHANT_ID")
                .expect("MERCHANT_ID must be set"),
            salt_key: env::var("SALT_KEY")
                .expect("SALT_KEY must be set"),
            salt_index: env::var("SALT_INDEX")
                .expect("SALT_INDEX must be set"),
            phonepe_base_url: env::var("PHONEPE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PHONEPE_BASE_URL.to_string()),
            app_base_url: env::var("APP_BASE_URL")
                .expect("APP_BASE_URL must be set"),
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("PORT must be a number"),
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    /// Externally visible URL the gateway delivers the status callback to.
    pub fn callback_url(&self) -> String {
        format!("{}/payment-callback", self.app_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            merchant_id: "MERCHANTUAT".to_string(),
            salt_key: "salt-key".to_string(),
            salt_index: "1".to_string(),
            phonepe_base_url: DEFAULT_PHONEPE_BASE_URL.to_string(),
            app_base_url: "https://pay.example.com".to_string(),
            database_url: "mongodb://localhost:27017".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }

    #[test]
    fn callback_url_points_at_payment_callback() {
        let config = test_config();
        assert_eq!(config.callback_url(), "https://pay.example.com/payment-callback");
    }

    #[test]
    fn callback_url_tolerates_trailing_slash() {
        let mut config = test_config();
        config.app_base_url = "https://pay.example.com/".to_string();
        assert_eq!(config.callback_url(), "https://pay.example.com/payment-callback");
    }
}
