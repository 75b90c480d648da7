use reqwest::{Method, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiType {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiType {
    pub fn method(&self) -> Method {
        match self {
            ApiType::Get => Method::GET,
            ApiType::Post => Method::POST,
            ApiType::Put => Method::PUT,
            ApiType::Delete => Method::DELETE,
        }
    }
}

/// One outgoing call: method, absolute URL and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub api_type: ApiType,
    pub url: String,
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            api_type: ApiType::Get,
            url: url.into(),
            data: None,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            api_type: ApiType::Delete,
            ..Self::get(url)
        }
    }

    pub fn post(url: impl Into<String>, data: Value) -> Self {
        Self {
            api_type: ApiType::Post,
            url: url.into(),
            data: Some(data),
        }
    }

    pub fn put(url: impl Into<String>, data: Value) -> Self {
        Self {
            api_type: ApiType::Put,
            url: url.into(),
            data: Some(data),
        }
    }
}

/// Shared transport for the service clients.
#[derive(Clone, Default)]
pub struct BaseService {
    client: reqwest::Client,
}

impl BaseService {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Send `request` and decode whatever body comes back as `T`.
    ///
    /// The HTTP status is not inspected: the envelope carries it.
    #[instrument(skip(self, request), fields(method = ?request.api_type, url = %request.url))]
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let mut builder = self
            .client
            .request(request.api_type.method(), &request.url)
            .header(header::ACCEPT, "application/json");

        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "Villa API responded");

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { status, source })
    }
}
