use core_config::{ConfigError, FromEnv, env_or_default};

/// Where the villa API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl FromEnv for ClientConfig {
    /// - VILLA_API_URL: defaults to http://localhost:8080
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_or_default("VILLA_API_URL", "http://localhost:8080")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_default() {
        temp_env::with_var_unset("VILLA_API_URL", || {
            assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
        });
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        temp_env::with_var("VILLA_API_URL", Some("https://villas.example.com/"), || {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config.base_url, "https://villas.example.com");
        });
    }
}
