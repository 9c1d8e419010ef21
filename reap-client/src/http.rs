//! HTTP transport for the provider API

use crate::types::ProviderErrorBody;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "x-reap-api-key";
const API_VERSION_HEADER: &str = "accept-version";

/// Low-level HTTP client that knows the provider's headers and error envelope
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = config.transport.build_client()?;
        Self::with_client(config, client)
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(config: &ClientConfig, client: Client) -> ClientResult<Self> {
        Url::parse(&config.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            header_value(&config.api_version)?,
        );
        let mut api_key = header_value(&config.api_key)?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Resolve a relative path against the base URL
    pub fn url(&self, path: &str) -> ClientResult<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Send a request and decode the body as `T` when the status matches `expected`
    ///
    /// The provider's listing endpoints take a JSON body even on GET, so
    /// `body` is accepted for every method.
    pub async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        expected: StatusCode,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let mut request = self
            .client
            .request(method.clone(), url)
            .headers(self.headers.clone());

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        tracing::debug!(%method, path, "Provider request");
        let response = request.send().await?;
        Self::handle_response(response, expected).await
    }

    /// Decode by status: the success type on `expected`, the error envelope otherwise
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status == expected {
            return serde_json::from_slice(&bytes).map_err(|e| ClientError::Protocol {
                status: status.as_u16(),
                message: e.to_string(),
            });
        }

        let error = match serde_json::from_slice::<ProviderErrorBody>(&bytes) {
            Ok(body) => ClientError::Provider {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            },
            // Gateways in front of the provider answer with plain text or HTML
            Err(_) => ClientError::Provider {
                status: status.as_u16(),
                code: String::new(),
                message: String::from_utf8_lossy(&bytes).trim().to_string(),
            },
        };
        tracing::warn!(status = status.as_u16(), error = %error, "Provider returned error");
        Err(error)
    }
}

fn header_value(value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::InvalidHeader(e.to_string()))
}
