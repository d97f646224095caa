use crate::counts::{Button, ClickBody};
use crate::error::TransportError;
use std::fmt::Display;

/// HTTP methods used by the click API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// One of the three calls the tracker makes against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    /// `GET /api/counts`
    FetchCounts,
    /// `POST /api/clicks` with body `{"button": ...}`
    RecordClick(Button),
    /// `DELETE /api/clicks/clear`
    ClearClicks,
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        match self {
            ApiRequest::FetchCounts => Method::Get,
            ApiRequest::RecordClick(_) => Method::Post,
            ApiRequest::ClearClicks => Method::Delete,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::FetchCounts => "/api/counts",
            ApiRequest::RecordClick(_) => "/api/clicks",
            ApiRequest::ClearClicks => "/api/clicks/clear",
        }
    }

    /// The JSON body to send, if the request has one. Requests with a body are
    /// sent with `Content-Type: application/json`.
    pub fn body(&self) -> Option<ClickBody> {
        match self {
            ApiRequest::RecordClick(button) => Some(ClickBody { button: *button }),
            _ => None,
        }
    }
}

impl Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// The parts of an HTTP response the tracker looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used to reach the backend.
///
/// Implementations only move bytes: status handling and decoding belong to
/// the [crate::ClickTracker] that receives the outcome.
#[allow(async_fn_in_trait)]
pub trait ClickApi {
    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, TransportError>;
}
