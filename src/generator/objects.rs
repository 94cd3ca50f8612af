//! Template-facing views of the model.
//!
//! Every model node a template can reach is wrapped in a [`ModelObject`]. The
//! wrapper keeps the original `Arc`, so functions called from a template get
//! the same node back and identity comparisons keep working.

use minijinja::value::{Enumerator, Object, Value};
use std::sync::Arc;

use super::obsolete::Filterable;
use crate::error::ContractViolation;
use crate::model::{
    HttpFieldInfo, HttpMethodInfo, HttpResponseInfo, HttpServiceInfo, ServiceDtoInfo,
    ServiceElementWithAttributes, ServiceEnumInfo, ServiceEnumValueInfo, ServiceErrorInfo,
    ServiceErrorSetInfo, ServiceFieldInfo, ServiceInfo, ServiceMethodInfo, ServiceTypeInfo,
};

#[derive(Debug, Clone)]
pub enum ModelObject {
    Service(Arc<ServiceInfo>),
    Method(Arc<ServiceMethodInfo>),
    Dto(Arc<ServiceDtoInfo>),
    Field(Arc<ServiceFieldInfo>),
    Enum(Arc<ServiceEnumInfo>),
    EnumValue(Arc<ServiceEnumValueInfo>),
    ErrorSet(Arc<ServiceErrorSetInfo>),
    Error(Arc<ServiceErrorInfo>),
    Type(Arc<ServiceTypeInfo>),
    HttpService(Arc<HttpServiceInfo>),
    HttpMethod(Arc<HttpMethodInfo>),
    HttpField(Arc<HttpFieldInfo>),
    HttpResponse(Arc<HttpResponseInfo>),
}

const ELEMENT_KEYS: &[&str] = &["name", "summary", "obsolete"];

impl ModelObject {
    pub fn into_value(self) -> Value {
        Value::from_object(self)
    }

    /// Variant name, used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            ModelObject::Service(_) => "Service",
            ModelObject::Method(_) => "Method",
            ModelObject::Dto(_) => "Dto",
            ModelObject::Field(_) => "Field",
            ModelObject::Enum(_) => "Enum",
            ModelObject::EnumValue(_) => "EnumValue",
            ModelObject::ErrorSet(_) => "ErrorSet",
            ModelObject::Error(_) => "Error",
            ModelObject::Type(_) => "Type",
            ModelObject::HttpService(_) => "HttpService",
            ModelObject::HttpMethod(_) => "HttpMethod",
            ModelObject::HttpField(_) => "HttpField",
            ModelObject::HttpResponse(_) => "HttpResponse",
        }
    }

    fn as_element(&self) -> Option<&dyn ServiceElementWithAttributes> {
        let element: &dyn ServiceElementWithAttributes = match self {
            ModelObject::Service(e) => &**e,
            ModelObject::Method(e) => &**e,
            ModelObject::Dto(e) => &**e,
            ModelObject::Field(e) => &**e,
            ModelObject::Enum(e) => &**e,
            ModelObject::EnumValue(e) => &**e,
            ModelObject::ErrorSet(e) => &**e,
            ModelObject::Error(e) => &**e,
            _ => return None,
        };
        Some(element)
    }

    /// View this node as input to the obsolescence filter.
    ///
    /// # Errors
    ///
    /// Types, the HTTP service and HTTP responses have no obsolescence of
    /// their own and are rejected.
    pub fn as_filterable(&self) -> Result<Filterable<'_>, ContractViolation> {
        match self {
            ModelObject::HttpMethod(http) => Ok(Filterable::HttpMethod(http)),
            ModelObject::HttpField(http) => Ok(Filterable::HttpField(http)),
            ModelObject::Type(_) | ModelObject::HttpService(_) | ModelObject::HttpResponse(_) => {
                Err(ContractViolation::UnsupportedElement {
                    kind: self.variant_name().to_string(),
                })
            }
            element => element
                .as_element()
                .map(Filterable::Element)
                .ok_or_else(|| ContractViolation::UnsupportedElement {
                    kind: element.variant_name().to_string(),
                }),
        }
    }

    fn keys(&self) -> &'static [&'static str] {
        match self {
            ModelObject::Service(_) => &[
                "name", "summary", "obsolete", "methods", "dtos", "enums", "error_sets",
            ],
            ModelObject::Method(_) => &[
                "name", "summary", "obsolete", "request_fields", "response_fields",
            ],
            ModelObject::Dto(_) => &["name", "summary", "obsolete", "fields"],
            ModelObject::Field(_) => &["name", "summary", "obsolete", "type_name", "required"],
            ModelObject::Enum(_) => &["name", "summary", "obsolete", "values"],
            ModelObject::ErrorSet(_) => &["name", "summary", "obsolete", "errors"],
            ModelObject::EnumValue(_) | ModelObject::Error(_) => ELEMENT_KEYS,
            ModelObject::Type(_) => &["kind", "value_type", "dto", "enum"],
            ModelObject::HttpService(_) => &["url", "methods"],
            ModelObject::HttpMethod(_) => &[
                "service_method",
                "method",
                "path",
                "request_header_fields",
                "path_fields",
                "request_body_field",
                "query_fields",
                "request_normal_fields",
                "responses",
            ],
            ModelObject::HttpField(_) => &["kind", "name", "service_field"],
            ModelObject::HttpResponse(_) => &[
                "status_code", "body_field", "header_fields", "normal_fields",
            ],
        }
    }

    fn attr(&self, key: &str) -> Option<Value> {
        if let Some(element) = self.as_element() {
            match key {
                "name" => return Some(Value::from(element.name())),
                "summary" => return Some(Value::from(element.summary())),
                "obsolete" => return Some(Value::from(element.is_obsolete())),
                _ => {}
            }
        }

        let value = match (self, key) {
            (ModelObject::Service(s), "methods") => list(&s.methods, ModelObject::Method),
            (ModelObject::Service(s), "dtos") => list(&s.dtos, ModelObject::Dto),
            (ModelObject::Service(s), "enums") => list(&s.enums, ModelObject::Enum),
            (ModelObject::Service(s), "error_sets") => list(&s.error_sets, ModelObject::ErrorSet),

            (ModelObject::Method(m), "request_fields") => list(&m.request_fields, ModelObject::Field),
            (ModelObject::Method(m), "response_fields") => list(&m.response_fields, ModelObject::Field),

            (ModelObject::Dto(d), "fields") => list(&d.fields, ModelObject::Field),

            (ModelObject::Field(f), "type_name") => Value::from(f.type_name.as_str()),
            (ModelObject::Field(f), "required") => Value::from(f.required),

            (ModelObject::Enum(e), "values") => list(&e.values, ModelObject::EnumValue),
            (ModelObject::ErrorSet(e), "errors") => list(&e.errors, ModelObject::Error),

            (ModelObject::Type(t), "kind") => Value::from(t.kind().name()),
            (ModelObject::Type(t), "value_type") => match t.value_type() {
                Some(inner) => ModelObject::Type(Arc::new(inner.clone())).into_value(),
                None => Value::from(()),
            },
            (ModelObject::Type(t), "dto") => match t.as_ref() {
                ServiceTypeInfo::Dto(dto) => ModelObject::Dto(Arc::clone(dto)).into_value(),
                _ => Value::from(()),
            },
            (ModelObject::Type(t), "enum") => match t.as_ref() {
                ServiceTypeInfo::Enum(e) => ModelObject::Enum(Arc::clone(e)).into_value(),
                _ => Value::from(()),
            },

            (ModelObject::HttpService(h), "url") => match &h.url {
                Some(url) => Value::from(url.as_str()),
                None => Value::from(()),
            },
            (ModelObject::HttpService(h), "methods") => list(&h.methods, ModelObject::HttpMethod),

            (ModelObject::HttpMethod(h), "service_method") => {
                ModelObject::Method(Arc::clone(&h.service_method)).into_value()
            }
            (ModelObject::HttpMethod(h), "method") => Value::from(h.http_method.as_str()),
            (ModelObject::HttpMethod(h), "path") => Value::from(h.path.as_str()),
            (ModelObject::HttpMethod(h), "request_header_fields") => {
                list(&h.request_header_fields, ModelObject::HttpField)
            }
            (ModelObject::HttpMethod(h), "path_fields") => list(&h.path_fields, ModelObject::HttpField),
            (ModelObject::HttpMethod(h), "request_body_field") => {
                optional(&h.request_body_field, ModelObject::HttpField)
            }
            (ModelObject::HttpMethod(h), "query_fields") => list(&h.query_fields, ModelObject::HttpField),
            (ModelObject::HttpMethod(h), "request_normal_fields") => {
                list(&h.request_normal_fields, ModelObject::HttpField)
            }
            (ModelObject::HttpMethod(h), "responses") => list(&h.responses, ModelObject::HttpResponse),

            (ModelObject::HttpField(h), "kind") => Value::from(h.kind.to_string()),
            (ModelObject::HttpField(h), "name") => Value::from(h.name.as_str()),
            (ModelObject::HttpField(h), "service_field") => {
                ModelObject::Field(Arc::clone(&h.service_field)).into_value()
            }

            (ModelObject::HttpResponse(r), "status_code") => Value::from(r.status_code),
            (ModelObject::HttpResponse(r), "body_field") => optional(&r.body_field, ModelObject::HttpField),
            (ModelObject::HttpResponse(r), "header_fields") => list(&r.header_fields, ModelObject::HttpField),
            (ModelObject::HttpResponse(r), "normal_fields") => list(&r.normal_fields, ModelObject::HttpField),

            _ => return None,
        };
        Some(value)
    }
}

fn list<T>(items: &[Arc<T>], wrap: fn(Arc<T>) -> ModelObject) -> Value {
    Value::from(
        items
            .iter()
            .map(|item| wrap(Arc::clone(item)).into_value())
            .collect::<Vec<_>>(),
    )
}

fn optional<T>(item: &Option<Arc<T>>, wrap: fn(Arc<T>) -> ModelObject) -> Value {
    match item {
        Some(item) => wrap(Arc::clone(item)).into_value(),
        None => Value::from(()),
    }
}

impl Object for ModelObject {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        self.attr(key.as_str()?)
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(self.keys())
    }
}

/// The model node behind a template value, if it is one.
pub fn model_object(value: &Value) -> Option<&ModelObject> {
    value.downcast_object_ref::<ModelObject>()
}
