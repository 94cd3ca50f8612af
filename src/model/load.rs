use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::http::{HttpFieldInfo, HttpFieldKind, HttpMethodInfo, HttpResponseInfo, HttpServiceInfo};
use super::service::{ServiceFieldInfo, ServiceInfo};
use crate::error::{ContractViolation, GenError};

/// A loaded service model with its optional HTTP binding model.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub service: Arc<ServiceInfo>,
    pub http_service: Option<Arc<HttpServiceInfo>>,
}

/// Serialized form of the parser and HTTP deriver output.
#[derive(Debug, Deserialize)]
struct ModelDocument {
    service: ServiceInfo,
    #[serde(default)]
    http: Option<HttpServiceDocument>,
}

#[derive(Debug, Deserialize)]
struct HttpServiceDocument {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    methods: Vec<HttpMethodDocument>,
}

#[derive(Debug, Deserialize)]
struct HttpMethodDocument {
    /// Name of the bound service method.
    method: String,
    #[serde(default = "default_http_method")]
    http_method: String,
    path: String,
    #[serde(default)]
    fields: Vec<HttpFieldDocument>,
    #[serde(default)]
    responses: Vec<HttpResponseDocument>,
}

#[derive(Debug, Deserialize)]
struct HttpFieldDocument {
    /// Name of the bound service field.
    field: String,
    kind: HttpFieldKind,
    /// Wire name; defaults to the field name.
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HttpResponseDocument {
    status: u16,
    #[serde(default)]
    fields: Vec<HttpFieldDocument>,
}

fn default_http_method() -> String {
    "POST".to_string()
}

/// Load a model document from a YAML (`.yaml`/`.yml`) or JSON file.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or if the HTTP section names
/// a method or field the service does not declare.
pub fn load_model(path: &Path) -> Result<LoadedModel, GenError> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let document: ModelDocument = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    debug!(path = %path.display(), yaml = is_yaml, "parsed model document");
    Ok(resolve_document(document)?)
}

/// Parse a YAML model document held in memory.
///
/// # Errors
///
/// See [`load_model`].
pub fn parse_model_yaml(content: &str) -> Result<LoadedModel, GenError> {
    let document: ModelDocument = serde_yaml::from_str(content)?;
    Ok(resolve_document(document)?)
}

fn resolve_document(document: ModelDocument) -> Result<LoadedModel, ContractViolation> {
    let service = Arc::new(document.service);
    let http_service = document
        .http
        .map(|http| resolve_http(&service, http))
        .transpose()?
        .map(Arc::new);
    Ok(LoadedModel {
        service,
        http_service,
    })
}

fn resolve_http(
    service: &ServiceInfo,
    document: HttpServiceDocument,
) -> Result<HttpServiceInfo, ContractViolation> {
    let methods = document
        .methods
        .into_iter()
        .map(|m| resolve_method(service, m).map(Arc::new))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HttpServiceInfo {
        url: document.url,
        methods,
    })
}

fn bind_field(
    field: &Arc<ServiceFieldInfo>,
    kind: HttpFieldKind,
    name: Option<String>,
) -> Arc<HttpFieldInfo> {
    Arc::new(HttpFieldInfo {
        kind,
        name: name.unwrap_or_else(|| field.name.clone()),
        service_field: Arc::clone(field),
    })
}

fn resolve_method(
    service: &ServiceInfo,
    document: HttpMethodDocument,
) -> Result<HttpMethodInfo, ContractViolation> {
    let service_method = service
        .find_method(&document.method)
        .ok_or_else(|| ContractViolation::UnresolvedMethod {
            name: document.method.clone(),
        })?;

    let mut http = HttpMethodInfo {
        service_method: Arc::clone(service_method),
        http_method: document.http_method.to_uppercase(),
        path: document.path,
        request_header_fields: Vec::new(),
        path_fields: Vec::new(),
        request_body_field: None,
        query_fields: Vec::new(),
        request_normal_fields: Vec::new(),
        responses: Vec::new(),
    };

    let mut bound = Vec::new();
    for field_doc in document.fields {
        let field = service_method
            .find_request_field(&field_doc.field)
            .ok_or_else(|| ContractViolation::UnresolvedField {
                method: service_method.name.clone(),
                name: field_doc.field.clone(),
            })?;
        bound.push(field.name.clone());
        let binding = bind_field(field, field_doc.kind, field_doc.name);
        match field_doc.kind {
            HttpFieldKind::Header => http.request_header_fields.push(binding),
            HttpFieldKind::Path => http.path_fields.push(binding),
            HttpFieldKind::Body => http.request_body_field = Some(binding),
            HttpFieldKind::Query => http.query_fields.push(binding),
            HttpFieldKind::Normal => http.request_normal_fields.push(binding),
        }
    }
    // Keep the partition total: anything the deriver left unlisted is a normal field.
    for field in &service_method.request_fields {
        if !bound.contains(&field.name) {
            http.request_normal_fields
                .push(bind_field(field, HttpFieldKind::Normal, None));
        }
    }

    for response_doc in document.responses {
        let mut response = HttpResponseInfo {
            status_code: response_doc.status,
            body_field: None,
            header_fields: Vec::new(),
            normal_fields: Vec::new(),
        };
        for field_doc in response_doc.fields {
            let field = service_method
                .find_response_field(&field_doc.field)
                .ok_or_else(|| ContractViolation::UnresolvedField {
                    method: service_method.name.clone(),
                    name: field_doc.field.clone(),
                })?;
            let binding = bind_field(field, field_doc.kind, field_doc.name);
            match field_doc.kind {
                HttpFieldKind::Body => response.body_field = Some(binding),
                HttpFieldKind::Header => response.header_fields.push(binding),
                _ => response.normal_fields.push(binding),
            }
        }
        http.responses.push(Arc::new(response));
    }

    Ok(http)
}
