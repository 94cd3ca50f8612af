use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::types::ServiceTypeInfo;
use crate::error::ContractViolation;

/// A named model element that can carry documentation and be marked obsolete.
///
/// Every declaration in the service model (methods, DTOs, fields, enums,
/// enum values, error sets and errors) implements this.
pub trait ServiceElementWithAttributes {
    /// Declared name of the element.
    fn name(&self) -> &str;
    /// One-line summary, empty when undocumented.
    fn summary(&self) -> &str;
    /// True if the element carries the `obsolete` attribute.
    fn is_obsolete(&self) -> bool;
}

macro_rules! element_with_attributes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ServiceElementWithAttributes for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn summary(&self) -> &str {
                    &self.summary
                }

                fn is_obsolete(&self) -> bool {
                    self.obsolete
                }
            }
        )*
    };
}

/// Root of the service model.
///
/// Immutable once loaded; children are shared through `Arc` so that the
/// HTTP binding model can refer to them by identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub methods: Vec<Arc<ServiceMethodInfo>>,
    #[serde(default)]
    pub dtos: Vec<Arc<ServiceDtoInfo>>,
    #[serde(default)]
    pub enums: Vec<Arc<ServiceEnumInfo>>,
    #[serde(default)]
    pub error_sets: Vec<Arc<ServiceErrorSetInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceMethodInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub request_fields: Vec<Arc<ServiceFieldInfo>>,
    #[serde(default)]
    pub response_fields: Vec<Arc<ServiceFieldInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDtoInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub fields: Vec<Arc<ServiceFieldInfo>>,
}

/// A field of a method request, method response or DTO.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceFieldInfo {
    pub name: String,
    /// Type in service-definition syntax, e.g. `string`, `Widget[]`, `map<int32>`.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
    /// Declared `[required]`; fields are optional unless marked.
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEnumInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub values: Vec<Arc<ServiceEnumValueInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEnumValueInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceErrorSetInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub errors: Vec<Arc<ServiceErrorInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceErrorInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub obsolete: bool,
}

element_with_attributes!(
    ServiceInfo,
    ServiceMethodInfo,
    ServiceDtoInfo,
    ServiceFieldInfo,
    ServiceEnumInfo,
    ServiceEnumValueInfo,
    ServiceErrorSetInfo,
    ServiceErrorInfo,
);

impl ServiceInfo {
    /// Find a method by name.
    pub fn find_method(&self, name: &str) -> Option<&Arc<ServiceMethodInfo>> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Find a DTO by name.
    pub fn find_dto(&self, name: &str) -> Option<&Arc<ServiceDtoInfo>> {
        self.dtos.iter().find(|d| d.name == name)
    }

    /// Find an enum by name.
    pub fn find_enum(&self, name: &str) -> Option<&Arc<ServiceEnumInfo>> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Resolve the type of a field.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::UnknownType`] if the type name (or a
    /// nested value type) is neither a built-in kind nor a declared DTO or enum.
    pub fn field_type(&self, field: &ServiceFieldInfo) -> Result<ServiceTypeInfo, ContractViolation> {
        ServiceTypeInfo::parse(&field.type_name, self)
    }
}

impl ServiceMethodInfo {
    /// Find a request field by name.
    pub fn find_request_field(&self, name: &str) -> Option<&Arc<ServiceFieldInfo>> {
        self.request_fields.iter().find(|f| f.name == name)
    }

    /// Find a response field by name.
    pub fn find_response_field(&self, name: &str) -> Option<&Arc<ServiceFieldInfo>> {
        self.response_fields.iter().find(|f| f.name == name)
    }
}
