use serde::{Serialize, Deserialize};

pub use crate::error::Result;

/// Parameters for a new subnet. Validity is decided by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetConfig {
	pub name: String,
	pub description: String,
	pub chain_id: u64,
	pub token_symbol: String,
	pub gas_fee: f64,
}

/// Parameters for a chain inside an existing subnet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
	pub subnet_id: String,
	pub vm_id: String,
	pub genesis: String,
	#[serde(rename = "chainName", default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetCreated {
	#[serde(alias = "txID", alias = "txId", alias = "id")]
	pub subnet_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainCreated {
	#[serde(alias = "txID", alias = "txId", alias = "id")]
	pub chain_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
	pub message: Option<String>,
	pub error: Option<String>,
}

impl ErrorBody {
	pub fn into_message(self) -> Option<String> {
		self.message.or(self.error)
	}
}
