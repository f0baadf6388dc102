#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Backend connection settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

impl ApiSettings {
    pub fn resolve(
        endpoint: Option<String>,
        token: Option<String>,
        timeout_seconds: Option<u64>,
        file: &TomlConfig,
    ) -> Result<Self> {
        let endpoint = endpoint.or_else(|| file.api.endpoint.clone());
        let endpoint = validation::validate_required_field("api.endpoint", &endpoint)?;

        Ok(Self {
            endpoint: endpoint.clone(),
            token: token.or_else(|| file.api.token.clone()),
            timeout_seconds: timeout_seconds
                .or(file.api.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        })
    }
}

impl ConfigProvider for ApiSettings {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.endpoint", &self.endpoint)?;
        validation::validate_range("api.timeout_seconds", self.timeout_seconds, 1, 600)?;
        if let Some(token) = &self.token {
            validation::validate_non_empty_string("api.token", token)?;
        }
        Ok(())
    }
}
