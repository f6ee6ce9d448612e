mod auth;
mod experiences;
mod orders;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::session::Session;

/// HTTP client for the Horizon booking backend. One instance serves all
/// endpoint groups; cloning is cheap.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(&config.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn authorized(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", session.token))
    }

    /// Parse a JSON body on success, or turn the error body into a
    /// [`ClientError::Api`].
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    /// Like [`Self::parse`] for endpoints whose body we do not care about.
    async fn expect_success(response: Response) -> Result<(), ClientError> {
        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }
        Ok(())
    }
}
