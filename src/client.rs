use std::time::Duration;

use log::info;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Settings;
use crate::error::Error;
use crate::types::{ChainConfig, ChainCreated, ErrorBody, Result, SubnetConfig, SubnetCreated};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Remote operations of the tooling service.
#[allow(async_fn_in_trait)]
pub trait ToolingApi {
    /// Returns the new subnet's id.
    async fn create_subnet(&self, config: &SubnetConfig) -> Result<String>;
    /// Returns the new chain's id.
    async fn create_chain(&self, config: &ChainConfig) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ToolingClient {
    http: reqwest::Client,
    base: Url,
}

impl ToolingClient {
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self> {
        Self::build(endpoint, api_key, None)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::build(
            &settings.endpoint,
            &settings.api_key,
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(endpoint: &str, api_key: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = parse_base(endpoint)?;
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        let mut key = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        info!("client::new::base({})", base);
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base.join(path).map_err(|e| Error::InvalidEndpoint {
            url: self.base.to_string(),
            reason: e.to_string(),
        })?;
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        info!("post::{}::status({})", path, status);

        let response_text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Rejected {
                status: status.as_u16(),
                message: rejection_message(status, &response_text),
            });
        }
        serde_json::from_str(&response_text)
            .map_err(|e| Error::MalformedResponse(format!("{}: {}", e, response_text.trim())))
    }
}

impl ToolingApi for ToolingClient {
    async fn create_subnet(&self, config: &SubnetConfig) -> Result<String> {
        info!("create_subnet::body::{:?}", config);
        let created: SubnetCreated = self.post("v1/subnets", config).await?;
        non_empty(created.subnet_id, "subnet id")
    }

    async fn create_chain(&self, config: &ChainConfig) -> Result<String> {
        info!("create_chain::body::{:?}", config);
        let created: ChainCreated = self.post("v1/chains", config).await?;
        non_empty(created.chain_id, "chain id")
    }
}

fn parse_base(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidEndpoint {
        url: endpoint.to_string(),
        reason,
    };
    let mut url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    // Joining relative paths drops the last segment unless it ends in '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
    {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status.canonical_reason().unwrap_or("unknown status").to_string()
}

fn non_empty(id: String, what: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(Error::MalformedResponse(format!("empty {}", what)));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn base_gets_trailing_slash() {
        let client = ToolingClient::new("https://api.avax.network/tooling", "key").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.avax.network/tooling/");
        assert_eq!(
            client.base_url().join("v1/subnets").unwrap().as_str(),
            "https://api.avax.network/tooling/v1/subnets"
        );
    }

    #[test]
    fn construction_rejects_bad_endpoints() {
        assert!(matches!(
            ToolingClient::new("not a url", "key"),
            Err(Error::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            ToolingClient::new("ftp://api.avax.network", "key"),
            Err(Error::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn construction_rejects_bad_keys() {
        assert!(matches!(
            ToolingClient::new(crate::config::DEFAULT_ENDPOINT, ""),
            Err(Error::MissingApiKey)
        ));
        assert!(matches!(
            ToolingClient::new(crate::config::DEFAULT_ENDPOINT, "bad\nkey"),
            Err(Error::InvalidApiKey)
        ));
    }

    #[test]
    fn from_settings_uses_endpoint() {
        let settings = Settings {
            endpoint: "http://127.0.0.1:9650".to_string(),
            request_timeout_secs: Some(5),
            ..Default::default()
        };
        let client = ToolingClient::from_settings(&settings).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9650/");
    }

    #[test]
    fn rejection_message_sources() {
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, r#"{"error":"Missing required fields"}"#),
            "Missing required fields"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, r#"{"message":"a","error":"b"}"#),
            "a"
        );
        assert_eq!(rejection_message(StatusCode::BAD_GATEWAY, " upstream down \n"), "upstream down");
        assert_eq!(rejection_message(StatusCode::INTERNAL_SERVER_ERROR, ""), "Internal Server Error");
    }
}
