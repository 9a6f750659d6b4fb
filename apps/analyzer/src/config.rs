use thiserror::Error;

pub const BRAVE_API_KEY: &str = "BRAVE_API_KEY";
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required API keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),
}

impl ConfigError {
    /// What the user should do about it. Printed after the error itself.
    pub fn remediation(&self) -> &'static str {
        match self {
            ConfigError::MissingKeys(_) => {
                "Please create a .env file with the required API keys. See .env.example for the format."
            }
        }
    }
}

/// Run configuration, read once at startup and passed into the pipeline.
/// Both API keys are mandatory; every missing key is reported together.
#[derive(Debug, Clone)]
pub struct Config {
    pub brave_api_key: String,
    pub anthropic_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let brave_api_key = get(BRAVE_API_KEY);
        let anthropic_api_key = get(ANTHROPIC_API_KEY);

        match (brave_api_key, anthropic_api_key) {
            (Some(brave_api_key), Some(anthropic_api_key)) => Ok(Config {
                brave_api_key,
                anthropic_api_key,
            }),
            (brave, anthropic) => {
                let mut missing = Vec::new();
                if brave.is_none() {
                    missing.push(BRAVE_API_KEY);
                }
                if anthropic.is_none() {
                    missing.push(ANTHROPIC_API_KEY);
                }
                Err(ConfigError::MissingKeys(missing))
            }
        }
    }
}
