//! A Rust definition of the API and a client to access it
use std::{env, path::Path};

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{header::HeaderMap, Body, Client, Method, Response};
use tracing::{debug, warn};

use crate::{
    auth::Credentials,
    digest::sha256_hex,
    endpoint::{url_join, API_BASE_URL, UPLOAD_FILE},
    error::{Result, VercelError},
};

static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Environment variable that overrides the API server, mostly useful for testing
pub const API_URL_ENV: &str = "VERCEL_API_URL";

/// The header carrying the SHA-256 digest of an uploaded file
pub const DIGEST_HEADER: &str = "x-vercel-digest";

/// A client for the Vercel REST API
///
/// Credentials are resolved once, when the client is created.  Anything not
/// passed explicitly is read from `VERCEL_API_KEY` and `VERCEL_TEAM_ID`.
#[derive(Debug, Clone)]
pub struct VercelClient {
    credentials: Credentials,
    /// The server URL to use.  This is not normally needed but can be used
    /// for testing purposes.
    base_url: String,
}

impl Default for VercelClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl VercelClient {
    pub fn new(api_key: Option<String>, team_id: Option<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, team_id),
            base_url: Self::get_base_url(),
        }
    }

    /// Creates a client configured entirely from the environment
    pub fn from_env() -> Self {
        Self::new(None, None)
    }

    /// Points the client at a different server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn get_base_url() -> String {
        env::var(API_URL_ENV).unwrap_or_else(|_| API_BASE_URL.to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_key(&self) -> Option<&str> {
        self.credentials.api_key()
    }

    pub fn team_id(&self) -> Option<&str> {
        self.credentials.team_id()
    }

    /// The headers needed to authenticate a request with this client's api key
    pub fn get_auth_headers(&self) -> Result<HeaderMap> {
        self.credentials.auth_headers()
    }

    /// Sends a request to `endpoint_path` on the API server
    ///
    /// The response is returned as-is, whatever its status.  Interpreting it
    /// is left to the caller.
    pub async fn make_request(
        &self,
        endpoint_path: &str,
        method: Method,
        headers: HeaderMap,
        body: impl Into<Body>,
    ) -> Result<Response> {
        let url = url_join(&self.base_url, endpoint_path);
        debug!(%method, %url, "sending Vercel API request");

        let response = GLOBAL_CLIENT
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        debug!(status = response.status().as_u16(), "Vercel API responded");
        Ok(response)
    }
}

/// Functions defined in the Vercel API
#[async_trait]
pub trait VercelApi {
    /// Uploads a single file for use in a later deployment
    ///
    /// # Arguments
    ///
    /// * `content` - The contents of the file
    ///
    /// # Returns
    ///
    /// The SHA-256 digest of the content.  Vercel identifies the uploaded file
    /// by this digest.
    async fn upload_file(&self, content: impl Into<Bytes> + Send) -> Result<String>;

    /// Uploads all files from a directory
    ///
    /// Not implemented yet.  This performs no filesystem access and no
    /// network calls.
    async fn upload_directory(&self, directory: &Path, recursive: bool) -> Result<()>;
}

#[async_trait]
impl VercelApi for VercelClient {
    async fn upload_file(&self, content: impl Into<Bytes> + Send) -> Result<String> {
        let content: Bytes = content.into();
        let digest = sha256_hex(&content);

        let mut headers = self.get_auth_headers()?;
        headers.insert(DIGEST_HEADER, digest.parse()?);

        let response = self
            .make_request(UPLOAD_FILE.path, UPLOAD_FILE.method.clone(), headers, content)
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(status = status.as_u16(), %digest, "file upload rejected");
            return Err(VercelError::unexpected_status(status, body));
        }

        Ok(digest)
    }

    // TODO: walk `directory` (descending when `recursive`) and upload_file each entry
    async fn upload_directory(&self, directory: &Path, recursive: bool) -> Result<()> {
        debug!(
            directory = %directory.display(),
            recursive,
            "directory upload is not implemented"
        );
        Ok(())
    }
}
