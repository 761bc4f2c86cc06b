use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default polling endpoint of the review API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
    #[error("{variable} is not valid: {message}")]
    InvalidValue {
        variable: &'static str,
        message: String,
    },
}

/// Process-wide configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub bot_token: String,
    pub chat_id: i64,
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Reads the environment. Every missing required variable is reported
    /// at once rather than one per restart.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let api_token = require("PRACTICUM_TOKEN", &mut missing);
        let bot_token = require("TELEGRAM_TOKEN", &mut missing);
        let chat_id_raw = require("CHAT_ID", &mut missing);
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let chat_id = chat_id_raw
            .parse::<i64>()
            .map_err(|err| ConfigError::InvalidValue {
                variable: "CHAT_ID",
                message: err.to_string(),
            })?;

        let endpoint = env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = match env::var("POLL_INTERVAL_SECONDS") {
            Ok(raw) => {
                let seconds = raw
                    .parse::<u64>()
                    .map_err(|err| ConfigError::InvalidValue {
                        variable: "POLL_INTERVAL_SECONDS",
                        message: err.to_string(),
                    })?;
                Duration::from_secs(seconds)
            }
            Err(_) => DEFAULT_POLL_INTERVAL,
        };

        Ok(Self {
            api_token,
            bot_token,
            chat_id,
            endpoint,
            poll_interval,
        })
    }
}

fn require(name: &'static str, missing: &mut Vec<String>) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(name.to_string());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // The environment is process-global; serialize the tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all() {
        for name in [
            "PRACTICUM_TOKEN",
            "TELEGRAM_TOKEN",
            "CHAT_ID",
            "ENDPOINT",
            "POLL_INTERVAL_SECONDS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn reports_every_missing_variable() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        env::set_var("TELEGRAM_TOKEN", "bot-token");

        let err = Config::from_env().unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("PRACTICUM_TOKEN"));
        assert!(rendered.contains("CHAT_ID"));
        assert!(!rendered.contains("TELEGRAM_TOKEN"));
    }

    #[test]
    fn full_environment_parses_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        env::set_var("PRACTICUM_TOKEN", "api-token");
        env::set_var("TELEGRAM_TOKEN", "bot-token");
        env::set_var("CHAT_ID", "-1001234");

        let config = Config::from_env().unwrap();
        assert_eq!(config.chat_id, -1_001_234);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(300));
    }

    #[test]
    fn non_numeric_chat_id_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        env::set_var("PRACTICUM_TOKEN", "api-token");
        env::set_var("TELEGRAM_TOKEN", "bot-token");
        env::set_var("CHAT_ID", "@my_chat");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                variable: "CHAT_ID",
                ..
            }
        ));
    }

    #[test]
    fn interval_override_is_honoured() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        env::set_var("PRACTICUM_TOKEN", "api-token");
        env::set_var("TELEGRAM_TOKEN", "bot-token");
        env::set_var("CHAT_ID", "42");
        env::set_var("POLL_INTERVAL_SECONDS", "15");

        let config = Config::from_env().unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(15));
    }
}
