//! The [Vercel REST API](https://vercel.com/docs/rest-api) lets you create and manage
//! deployments programmatically.
//!
//! This crate supplies a rust client for the first step of a deployment: uploading
//! the files that make it up.  Each file is identified by the SHA-256 digest of its
//! contents, which is returned from the upload.
//!
//! To use the client all you need to do is instantiate a [`VercelClient`]:
//!
//! [`VercelClient`]: crate::client::VercelClient
//!
//! ```ignore
//! use vercel_deploy::client::{VercelApi, VercelClient};
//!
//! // Reads VERCEL_API_KEY and VERCEL_TEAM_ID from the environment
//! let client = VercelClient::from_env();
//!
//! let digest = client.upload_file("<h1>hello</h1>").await.unwrap();
//! dbg!(digest);
//! ```
//!
//! Credentials can also be passed explicitly.  An explicit value always takes
//! precedence over the environment:
//!
//! ```ignore
//! let client = VercelClient::new(Some("my-api-key".to_string()), None);
//! ```
//!
//! The client logs through [`tracing`](https://docs.rs/tracing).  Install a
//! subscriber in your application to see requests and rejected uploads.

pub mod auth;
pub mod client;
pub mod digest;
pub mod endpoint;
pub mod error;
