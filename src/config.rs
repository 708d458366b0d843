use ::config::{Environment, Source};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ENDPOINT: &str = "https://api.avax.network";
pub const DEFAULT_API_KEY: &str = "YOUR_API_KEY";
pub const DEFAULT_NETWORK: &str = "Avalanche";
pub const ENV_PREFIX: &str = "TOOLING";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub api_key: String,
    /// Label used in messages only; every network behaves the same.
    pub network: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub chain_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            request_timeout_secs: None,
            chain_name: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by `TOOLING_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load<S>(overrides: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let builder = ::config::Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("api_key", DEFAULT_API_KEY)?
            .set_default("network", DEFAULT_NETWORK)?
            .add_source(overrides);

        Ok(builder.build()?.try_deserialize()?)
    }
}
