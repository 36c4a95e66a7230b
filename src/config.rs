use std::fmt;

/// Environment variable holding the Telegram bot token.
pub const TOKEN_ENV: &str = "tgapikey";

/// Errors that can occur when building the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The token environment variable is absent or empty.
    MissingToken,
    /// The token does not look like a Telegram bot token.
    InvalidToken(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => {
                write!(f, "bot token not defined (set the {TOKEN_ENV} environment variable)")
            }
            Self::InvalidToken(token) => {
                write!(
                    f,
                    "bot token '{token}' appears invalid (expected format: 123456789:ABCdefGHI...)"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Process-wide configuration, built once at startup.
pub struct Config {
    pub telegram_bot_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV).unwrap_or_default();
        Self::from_token(token)
    }

    fn from_token(token: String) -> Result<Self, ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() != 2 || parts[0].parse::<u64>().is_err() || parts[1].is_empty() {
            return Err(ConfigError::InvalidToken(token));
        }

        Ok(Self {
            telegram_bot_token: token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_err(result: Result<Config, ConfigError>) -> ConfigError {
        match result {
            Ok(_) => panic!("expected error, got Ok"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_valid_token() {
        let config = Config::from_token("123456789:ABCdefGHIjklMNOpqrsTUVwxyz".to_string())
            .expect("should accept a well-formed token");
        assert_eq!(config.telegram_bot_token, "123456789:ABCdefGHIjklMNOpqrsTUVwxyz");
    }

    #[test]
    fn test_empty_token() {
        let err = assert_err(Config::from_token(String::new()));
        assert!(matches!(err, ConfigError::MissingToken));
        assert!(err.to_string().contains(TOKEN_ENV));
    }

    #[test]
    fn test_token_without_colon() {
        let err = assert_err(Config::from_token("invalid_token_no_colon".to_string()));
        assert!(matches!(err, ConfigError::InvalidToken(_)));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_token_with_non_numeric_id() {
        let err = assert_err(Config::from_token("notanumber:ABCdef".to_string()));
        assert!(matches!(err, ConfigError::InvalidToken(_)));
    }

    #[test]
    fn test_token_with_empty_secret() {
        let err = assert_err(Config::from_token("123456789:".to_string()));
        assert!(matches!(err, ConfigError::InvalidToken(_)));
    }
}
