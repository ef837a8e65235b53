use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_AVATAR_BASE_URL, DEFAULT_BCRYPT_COST};

#[derive(Debug)]
pub struct Config {
    pub host: [u8; 4],
    pub port: u16,
    pub log_level: String,
    pub bcrypt_cost: u32,
    pub avatar_base_url: String,
    pub request_timeout_secs: u64,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_host(value: &str) -> Option<[u8; 4]> {
    let addr: std::net::Ipv4Addr = value.trim().parse().ok()?;
    Some(addr.octets())
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|v| parse_host(&v))
                .unwrap_or([127, 0, 0, 1]),
            port: env_or("PORT", 3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            bcrypt_cost: env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST),
            avatar_base_url: env::var("AVATAR_BASE_URL").unwrap_or_else(|_| DEFAULT_AVATAR_BASE_URL.to_string()),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_ipv4_host() {
        assert_eq!(parse_host("0.0.0.0"), Some([0, 0, 0, 0]));
        assert_eq!(parse_host(" 10.1.2.3 "), Some([10, 1, 2, 3]));
        assert_eq!(parse_host("localhost"), None);
    }

    #[test]
    fn missing_variable_falls_back_to_default() {
        assert_eq!(env_or("REGISTRAR_TEST_UNSET_VARIABLE", 42u32), 42);
    }
}
