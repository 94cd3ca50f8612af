//! HTTP binding model.
//!
//! Produced by an external deriver from the service model; the generator only
//! reads it. Each method's request fields are partitioned into exactly one of
//! header, path, body (at most one), query or normal.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

use super::service::{ServiceFieldInfo, ServiceMethodInfo};

/// Where an HTTP field binding lives on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpFieldKind {
    Header,
    Path,
    Body,
    Query,
    Normal,
}

impl fmt::Display for HttpFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpFieldKind::Header => write!(f, "Header"),
            HttpFieldKind::Path => write!(f, "Path"),
            HttpFieldKind::Body => write!(f, "Body"),
            HttpFieldKind::Query => write!(f, "Query"),
            HttpFieldKind::Normal => write!(f, "Normal"),
        }
    }
}

/// Binding of one service field onto the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFieldInfo {
    pub kind: HttpFieldKind,
    /// Wire name: path token, query key or header name.
    pub name: String,
    pub service_field: Arc<ServiceFieldInfo>,
}

/// A documented response of an HTTP method.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponseInfo {
    pub status_code: u16,
    pub body_field: Option<Arc<HttpFieldInfo>>,
    pub header_fields: Vec<Arc<HttpFieldInfo>>,
    pub normal_fields: Vec<Arc<HttpFieldInfo>>,
}

/// HTTP binding of one service method.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpMethodInfo {
    /// The bound method; compared by `Arc` identity.
    pub service_method: Arc<ServiceMethodInfo>,
    /// Upper-case HTTP verb.
    pub http_method: String,
    /// Wire path with `{name}` tokens for path fields.
    pub path: String,
    pub request_header_fields: Vec<Arc<HttpFieldInfo>>,
    pub path_fields: Vec<Arc<HttpFieldInfo>>,
    pub request_body_field: Option<Arc<HttpFieldInfo>>,
    pub query_fields: Vec<Arc<HttpFieldInfo>>,
    pub request_normal_fields: Vec<Arc<HttpFieldInfo>>,
    pub responses: Vec<Arc<HttpResponseInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpServiceInfo {
    /// Default base URL of the service, if declared.
    pub url: Option<String>,
    pub methods: Vec<Arc<HttpMethodInfo>>,
}
