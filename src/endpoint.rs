//! The fixed set of Vercel API routes this crate knows how to call
use std::fmt;

use reqwest::Method;

/// The default server for the Vercel REST API
pub const API_BASE_URL: &str = "https://api.vercel.com";

/// A single remote operation: a path relative to the API base and the HTTP method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: Method,
}

/// Upload a single deployment file
///
/// See <https://vercel.com/docs/rest-api#endpoints/deployments/upload-deployment-files>
pub const UPLOAD_FILE: Endpoint = Endpoint {
    path: "/v2/now/files",
    method: Method::POST,
};

static REGISTRY: [(&str, Endpoint); 1] = [("upload_file", UPLOAD_FILE)];

impl Endpoint {
    /// Looks up an endpoint by its operation name (e.g. `upload_file`)
    pub fn by_name(name: &str) -> Option<&'static Endpoint> {
        REGISTRY
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, endpoint)| endpoint)
    }

    /// All registered endpoints along with their operation names
    pub fn all() -> impl Iterator<Item = (&'static str, &'static Endpoint)> {
        REGISTRY.iter().map(|(name, endpoint)| (*name, endpoint))
    }

    /// The full URL of this endpoint on the server at `base_url`
    pub fn url(&self, base_url: &str) -> String {
        url_join(base_url, self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

/// Joins a base URL and a path so that exactly one `/` separates them
pub fn url_join(left: &str, right: &str) -> String {
    if right.is_empty() {
        return left.to_string();
    }
    match (left.ends_with('/'), right.starts_with('/')) {
        (true, true) => format!("{}{}", left, &right[1..]),
        (false, false) => format!("{}/{}", left, right),
        _ => format!("{}{}", left, right),
    }
}
