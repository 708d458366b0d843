//! Creates a subnet through a blockchain-tooling service, then a chain inside it.

pub mod client;
pub mod config;
pub mod deploy;
pub mod error;
pub mod types;

pub use client::{ToolingApi, ToolingClient};
pub use config::Settings;
pub use deploy::{deploy, run, DeployError, DeployPlan, Deployment, Progress, Step};
pub use error::{Error, Result};
pub use types::{ChainConfig, SubnetConfig};
