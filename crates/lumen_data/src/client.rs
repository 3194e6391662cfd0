//! HTTP client for the portfolio backend
//!
//! Thin reqwest wrapper with the page's error contract: JSON in and out,
//! non-2xx normalized into [`ApiError::Status`] with a best-effort parsed
//! body, transport failures logged once with their endpoint and
//! propagated. No automatic retries and no request timeout - a hung
//! request leaves its consumer loading, which the page accepts.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{ApiError, Result};
use crate::models::{
    Bio, Collection, ContactMessage, EducationEntry, ExperienceEntry, Project, SkillGroup,
};

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "LUMEN_API_URL";

/// Client for the portfolio REST backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Create a client from the process environment
    ///
    /// Reads `LUMEN_API_URL`, falling back to `http://localhost:8000/api`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Core request path
    // =========================================================================

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, None, HeaderMap::new()).await
    }

    /// GET with caller-supplied headers merged over the defaults
    pub async fn get_json_with_headers<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: HeaderMap,
    ) -> Result<T> {
        self.send(Method::GET, path, None, headers).await
    }

    /// POST a JSON body, returning parsed JSON
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(Method::POST, path, Some(body), HeaderMap::new())
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        extra_headers: HeaderMap,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(endpoint = path, %method, "request");

        // Defaults first, then caller headers: a caller header with the
        // same name overrides the default, everything else is kept
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in extra_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut request = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(endpoint = path, error = %e, "transport failure");
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            // Best effort: a body that is not JSON yields detail=None and
            // never masks the status error
            let detail = response.json::<serde_json::Value>().await.ok();
            warn!(endpoint = path, status = status.as_u16(), "error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let collection: Collection<T> = self.get_json(path).await?;
        Ok(collection.into_items())
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    /// `GET /about/`
    pub async fn about(&self) -> Result<Vec<Bio>> {
        self.collection("/about/").await
    }

    /// `GET /education/`
    pub async fn education(&self) -> Result<Vec<EducationEntry>> {
        self.collection("/education/").await
    }

    /// `GET /experience/`
    pub async fn experience(&self) -> Result<Vec<ExperienceEntry>> {
        self.collection("/experience/").await
    }

    /// `GET /skills/`
    pub async fn skills(&self) -> Result<Vec<SkillGroup>> {
        self.collection("/skills/").await
    }

    /// `GET /projects/`
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.collection("/projects/").await
    }

    /// `POST /contact/`
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<serde_json::Value> {
        self.post_json("/contact/", message).await
    }
}
