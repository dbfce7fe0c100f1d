use crate::api::types::{HostMembership, HostRecord, InventoryRecord, Page};
use crate::api::ControllerApi;
use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: StatusCode, url: String },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for the controller's REST API.
pub struct AwxClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl AwxClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(AwxClient {
            http,
            base_url: config.base_url(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, ApiError> {
        debug!("sending HTTP GET for {url}");
        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        response.json().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches a list endpoint page by page, following `next` links until
    /// the final page.
    async fn get_all<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ApiError> {
        let mut url = self.url(endpoint);
        let mut results = Vec::new();

        loop {
            let page: Page<T> = self.get_page(&url).await?;
            results.extend(page.results);

            match page.next {
                // `next` is a root-relative URL including the /api prefix
                Some(next) => url = self.absolute_url(&next),
                None => break,
            }
        }

        Ok(results)
    }

    fn absolute_url(&self, next: &str) -> String {
        if next.starts_with("http://") || next.starts_with("https://") {
            return next.to_string();
        }
        // base_url ends with /api/{version}; strip back to the origin
        match self.base_url.find("/api/") {
            Some(idx) => format!("{}{}", &self.base_url[..idx], next),
            None => format!("{}{}", self.base_url, next),
        }
    }

    async fn send_write(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<(), ApiError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!("response status code is {status}");
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl ControllerApi for AwxClient {
    async fn list_inventories(&self) -> Result<Vec<InventoryRecord>, ApiError> {
        self.get_all("/inventories/").await
    }

    async fn list_host_memberships(
        &self,
        hostname: &str,
    ) -> Result<Vec<HostMembership>, ApiError> {
        debug!("getting inventory membership for {hostname}");

        // The hosts endpoint returns every host in every inventory; the
        // membership set for one hostname is filtered client-side.
        let hosts: Vec<HostRecord> = self.get_all("/hosts/").await?;

        Ok(hosts
            .iter()
            .filter(|host| host.name == hostname)
            .map(HostRecord::to_membership)
            .collect())
    }

    async fn create_host(&self, inventory_id: u64, hostname: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/inventories/{inventory_id}/hosts/"));
        debug!("sending HTTP POST for {url}");

        let body = json!({
            "name": hostname,
            "description": "",
            "enabled": true,
            "instance_id": "",
            "variables": "",
        });

        self.send_write(self.http.post(&url).json(&body), &url).await
    }

    async fn delete_host(&self, host_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("/hosts/{host_id}/"));
        debug!("sending HTTP DELETE for {url}");

        self.send_write(self.http.delete(&url), &url).await
    }
}
