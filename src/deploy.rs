use std::fmt;

use log::{error, info};
use thiserror::Error;

use crate::client::ToolingApi;
use crate::config::Settings;
use crate::types::{ChainConfig, Result, SubnetConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Subnet,
    Chain,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Subnet => f.write_str("subnet"),
            Step::Chain => f.write_str("chain"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("failed to create {network} client: {source}")]
    ClientConstruction {
        network: String,
        #[source]
        source: crate::error::Error,
    },

    /// A created subnet is left in place when the chain step fails.
    #[error("failed to create {step}: {source}")]
    RemoteCall {
        step: Step,
        #[source]
        source: crate::error::Error,
    },
}

impl DeployError {
    pub fn step(&self) -> Option<Step> {
        match self {
            DeployError::ClientConstruction { .. } => None,
            DeployError::RemoteCall { step, .. } => Some(*step),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    SubnetCreated(&'a str),
    ChainCreated(&'a str),
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::SubnetCreated(id) => write!(f, "Subnet created successfully with ID: {}", id),
            Progress::ChainCreated(id) => write!(f, "Chain created successfully with ID: {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeployPlan {
    pub subnet: SubnetConfig,
    pub vm_id: String,
    pub genesis: String,
    pub chain_name: Option<String>,
}

impl DeployPlan {
    /// Fixed example values; nothing here is read from the environment.
    pub fn example() -> Self {
        Self {
            subnet: SubnetConfig {
                name: "MySubnet".to_string(),
                description: "This is an example subnet".to_string(),
                chain_id: 12345,
                token_symbol: "MYTOKEN".to_string(),
                gas_fee: 0.0001,
            },
            vm_id: "SubnetEVM".to_string(),
            genesis: "genesis.json".to_string(),
            chain_name: None,
        }
    }

    pub fn with_chain_name(mut self, name: Option<String>) -> Self {
        self.chain_name = name;
        self
    }

    pub fn chain_config(&self, subnet_id: &str) -> ChainConfig {
        ChainConfig {
            subnet_id: subnet_id.to_string(),
            vm_id: self.vm_id.clone(),
            genesis: self.genesis.clone(),
            name: self.chain_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub subnet_id: String,
    pub chain_id: String,
}

/// Creates the subnet, then a chain inside it. Stops at the first failure.
pub async fn deploy<A, F>(
    api: &A,
    plan: &DeployPlan,
    mut on_progress: F,
) -> std::result::Result<Deployment, DeployError>
where
    A: ToolingApi,
    F: FnMut(Progress<'_>),
{
    let subnet_id = api
        .create_subnet(&plan.subnet)
        .await
        .map_err(|source| DeployError::RemoteCall { step: Step::Subnet, source })?;
    info!("deploy::subnet_id::{}", subnet_id);
    on_progress(Progress::SubnetCreated(&subnet_id));

    let chain_config = plan.chain_config(&subnet_id);
    let chain_id = api
        .create_chain(&chain_config)
        .await
        .map_err(|source| {
            error!("deploy::chain_failed::subnet {} left in place", subnet_id);
            DeployError::RemoteCall { step: Step::Chain, source }
        })?;
    info!("deploy::chain_id::{}", chain_id);
    on_progress(Progress::ChainCreated(&chain_id));

    Ok(Deployment { subnet_id, chain_id })
}

/// Connects with `connect`, then deploys. A failed connect makes no remote calls.
pub async fn run<A, C, F>(
    settings: &Settings,
    plan: &DeployPlan,
    connect: C,
    on_progress: F,
) -> std::result::Result<Deployment, DeployError>
where
    A: ToolingApi,
    C: FnOnce(&Settings) -> Result<A>,
    F: FnMut(Progress<'_>),
{
    let api = connect(settings).map_err(|source| DeployError::ClientConstruction {
        network: settings.network.clone(),
        source,
    })?;
    deploy(&api, plan, on_progress).await
}
