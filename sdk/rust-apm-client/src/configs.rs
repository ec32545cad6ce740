use std::path::PathBuf;

use common_utils::{consts, fp_utils::when};
use hyperswitch_masking::{PeekInterface, Secret};

use crate::{error::ConfigurationError, logger::config::Log};

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub merchant: Merchant,
    #[serde(default)]
    pub log: Log,
}

/// Credentials issued by the processor to a merchant.
#[derive(Clone, serde::Deserialize, Debug)]
pub struct Merchant {
    pub merchant_id: String,
    /// Sub-account the transactions are booked against; the processor's default when unset.
    #[serde(default)]
    pub account: Option<String>,
    pub shared_secret: Secret<String>,
}

impl Merchant {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        when(self.merchant_id.trim().is_empty(), || {
            Err(ConfigurationError::InvalidMerchant(
                "merchant_id must not be empty",
            ))
        })?;

        when(self.shared_secret.peek().is_empty(), || {
            Err(ConfigurationError::InvalidMerchant(
                "shared_secret must not be empty",
            ))
        })
    }
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::new_with_config_path(None)
    }

    /// Builds the configuration from the given file, or the environment's default file when
    /// none is given, overridden by `APM__` prefixed environment variables.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::NAME)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        config.merchant.validate()?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // Here, it should be `set_override()` not `set_default()`.
            // "env" can't be altered by config field.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        explicit_config_path.unwrap_or_else(|| {
            let mut config_path = workspace_path();
            config_path.push("config");
            config_path.push(environment.config_path());
            config_path
        })
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
