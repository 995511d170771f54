//! Public SDK client shared by the core CLI and its extensions.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::{validate_config, Configuration};
use crate::logging::{format_duration, Logger};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Main SDK client. Owns its configuration and a logger tagged `SDK`.
#[derive(Debug, Clone)]
pub struct Client {
    logger: Logger,
    config: Option<Configuration>,
}

impl Client {
    /// Creates a client. A missing configuration is treated as empty.
    pub fn new(config: Option<Configuration>) -> Self {
        Self {
            logger: Logger::new("SDK"),
            config,
        }
    }

    /// Runs a deployment for `app_name`.
    ///
    /// # Errors
    /// Returns [`SdkError::Configuration`] when the configuration is empty.
    #[instrument(skip(self))]
    pub fn deploy(&self, app_name: &str) -> Result<(), SdkError> {
        let started = Instant::now();
        self.logger
            .info(&format!("Starting deployment for app: {app_name}"));

        let valid = self.config.as_ref().is_some_and(validate_config);
        if !valid {
            self.logger
                .error(&format!("Deployment aborted for app: {app_name}"));
            return Err(SdkError::Configuration(
                "configuration is empty".to_string(),
            ));
        }

        self.logger
            .info(&format!("Deployment completed for app: {app_name}"));
        debug!("deploy {} took {}", app_name, format_duration(started.elapsed()));
        Ok(())
    }

    /// Returns a copy of the current configuration. Mutating it does not
    /// affect the client.
    pub fn get_config(&self) -> Configuration {
        self.config.clone().unwrap_or_default()
    }

    /// Inserts or overwrites `key`, initializing the configuration if absent.
    pub fn set_config(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        self.logger
            .info(&format!("Configuration updated: {key} = {value}"));
        self.config.get_or_insert_with(Configuration::new).insert(key, value);
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
