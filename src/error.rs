//! Error handling utilities for the crate
use reqwest::header::InvalidHeaderValue;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// All errors raised by this crate will be instances of VercelError
#[derive(Error, Debug)]
pub enum VercelError {
    #[error("Internal HTTP error: {0}")]
    HttpError(#[from] ReqwestError),
    #[error("Vercel API responded with status {status}: {body}")]
    UnexpectedStatus {
        status: u16,
        /// The `error.code` reported by the API, if the body carried one
        code: Option<String>,
        body: String,
    },
    #[error("Value cannot be sent as an HTTP header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    code: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

impl VercelError {
    pub fn unexpected_status(status_code: StatusCode, body: String) -> Self {
        let code = serde_json::from_str::<ApiError>(&body)
            .ok()
            .map(|err| err.error.code);
        VercelError::UnexpectedStatus {
            status: status_code.as_u16(),
            code,
            body,
        }
    }

    /// The HTTP status of a failed response, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            VercelError::UnexpectedStatus { status, .. } => Some(*status),
            VercelError::HttpError(err) => err.status().map(|s| s.as_u16()),
            VercelError::InvalidHeader(_) => None,
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, VercelError>;
