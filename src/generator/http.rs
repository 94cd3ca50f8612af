//! Adapter from the HTTP binding model to the shapes the template needs.

use std::sync::Arc;

use super::naming::snake_case;
use crate::model::{HttpFieldInfo, HttpFieldKind, HttpMethodInfo, HttpServiceInfo, ServiceMethodInfo};

/// Whether a request field must be supplied by the caller.
///
/// Body and path fields are always required; everything else follows the
/// field's declaration.
pub fn is_required(field: &HttpFieldInfo) -> bool {
    matches!(field.kind, HttpFieldKind::Body | HttpFieldKind::Path) || field.service_field.required
}

/// Request fields in signature order: headers, path, body, query, then normal.
///
/// Generated call signatures depend on this order staying stable.
pub fn ordered_request_fields(method: &HttpMethodInfo) -> Vec<Arc<HttpFieldInfo>> {
    method
        .request_header_fields
        .iter()
        .chain(method.path_fields.iter())
        .chain(method.request_body_field.iter())
        .chain(method.query_fields.iter())
        .chain(method.request_normal_fields.iter())
        .cloned()
        .collect()
}

/// The HTTP binding of `method`, matched by identity.
///
/// Absent when HTTP generation is disabled or the method has no mapping.
pub fn binding_for<'a>(
    http_service: Option<&'a HttpServiceInfo>,
    method: &ServiceMethodInfo,
) -> Option<&'a Arc<HttpMethodInfo>> {
    http_service?
        .methods
        .iter()
        .find(|http| std::ptr::eq(Arc::as_ptr(&http.service_method), method))
}

/// Render the wire path as a Python string literal.
///
/// Each `{name}` token of a path field becomes an f-string interpolation
/// passing the snake-cased parameter through `facility.encode`. Without any
/// substitution the result is a plain string literal.
///
/// ```rust,ignore
/// // path "/widgets/{id}" with path field `id`
/// assert_eq!(render_path_as_python_fstring(&http), r#"f"/widgets/{facility.encode(id_)}""#);
/// ```
pub fn render_path_as_python_fstring(method: &HttpMethodInfo) -> String {
    let mut text = method.path.clone();
    let mut prefix = "";
    for field in &method.path_fields {
        let key = format!("{{{}}}", field.name);
        if text.contains(&key) {
            let value = snake_case(&field.service_field.name);
            text = text.replace(&key, &format!("{{facility.encode({value})}}"));
            prefix = "f";
        }
    }
    format!("{prefix}\"{text}\"")
}
