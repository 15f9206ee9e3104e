use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_APP_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_SALT_ROUNDS: u32 = 12;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub server_addr: SocketAddr,
    pub cors_origin: String,
    pub salt_rounds: u32,
    pub app_base_url: String,
    pub email: Option<EmailConfig>,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub from: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| lookup(key).context(format!("Missing env: {key}"));
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mongo_uri = required("MONGO_URI")?;
        let db_name = required("DB_NAME")?;
        let jwt_secret = required("JWT_SECRET")?;

        let server_addr = or_default("SERVER_ADDR", DEFAULT_SERVER_ADDR)
            .parse::<SocketAddr>()
            .context("SERVER_ADDR must be a socket address such as 0.0.0.0:8000")?;

        let salt_rounds = match lookup("SALT_ROUNDS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("SALT_ROUNDS must be an integer")?,
            None => DEFAULT_SALT_ROUNDS,
        };
        if !(4..=31).contains(&salt_rounds) {
            return Err(anyhow!("SALT_ROUNDS must be between 4 and 31, got {salt_rounds}"));
        }

        let email = lookup("EMAIL_API_URL").map(|api_url| EmailConfig {
            api_url,
            api_key: lookup("EMAIL_API_KEY"),
            from: or_default("EMAIL_FROM", "no-reply@survey-voting.local"),
        });

        Ok(Self {
            mongo_uri,
            db_name,
            jwt_secret,
            server_addr,
            cors_origin: or_default("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            salt_rounds,
            app_base_url: or_default("APP_BASE_URL", DEFAULT_APP_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            email,
        })
    }
}
