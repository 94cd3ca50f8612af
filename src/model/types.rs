use std::fmt;
use std::sync::Arc;

use super::service::{ServiceDtoInfo, ServiceEnumInfo, ServiceInfo};
use crate::error::ContractViolation;

/// Discriminant of a [`ServiceTypeInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTypeKind {
    String,
    DateTime,
    Boolean,
    Float,
    Double,
    Int32,
    Int64,
    Decimal,
    Bytes,
    Object,
    Error,
    Dto,
    Enum,
    Result,
    Array,
    Map,
    Nullable,
}

impl ServiceTypeKind {
    /// Kinds that are spelled directly in service-definition syntax.
    const SCALARS: [(&'static str, ServiceTypeKind); 11] = [
        ("string", ServiceTypeKind::String),
        ("datetime", ServiceTypeKind::DateTime),
        ("boolean", ServiceTypeKind::Boolean),
        ("float", ServiceTypeKind::Float),
        ("double", ServiceTypeKind::Double),
        ("int32", ServiceTypeKind::Int32),
        ("int64", ServiceTypeKind::Int64),
        ("decimal", ServiceTypeKind::Decimal),
        ("bytes", ServiceTypeKind::Bytes),
        ("object", ServiceTypeKind::Object),
        ("error", ServiceTypeKind::Error),
    ];

    /// The kind's name as templates see it (`"String"`, `"Dto"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ServiceTypeKind::String => "String",
            ServiceTypeKind::DateTime => "DateTime",
            ServiceTypeKind::Boolean => "Boolean",
            ServiceTypeKind::Float => "Float",
            ServiceTypeKind::Double => "Double",
            ServiceTypeKind::Int32 => "Int32",
            ServiceTypeKind::Int64 => "Int64",
            ServiceTypeKind::Decimal => "Decimal",
            ServiceTypeKind::Bytes => "Bytes",
            ServiceTypeKind::Object => "Object",
            ServiceTypeKind::Error => "Error",
            ServiceTypeKind::Dto => "Dto",
            ServiceTypeKind::Enum => "Enum",
            ServiceTypeKind::Result => "Result",
            ServiceTypeKind::Array => "Array",
            ServiceTypeKind::Map => "Map",
            ServiceTypeKind::Nullable => "Nullable",
        }
    }
}

impl fmt::Display for ServiceTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved field type.
///
/// Composite variants always wrap exactly one value type; scalar and named
/// variants never do. Types are built from finite type names, so the tree
/// is acyclic: DTOs are referenced, never expanded.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceTypeInfo {
    String,
    DateTime,
    Boolean,
    Float,
    Double,
    Int32,
    Int64,
    Decimal,
    Bytes,
    Object,
    Error,
    Dto(Arc<ServiceDtoInfo>),
    Enum(Arc<ServiceEnumInfo>),
    Result(Box<ServiceTypeInfo>),
    Array(Box<ServiceTypeInfo>),
    Map(Box<ServiceTypeInfo>),
    Nullable(Box<ServiceTypeInfo>),
}

impl ServiceTypeInfo {
    pub fn kind(&self) -> ServiceTypeKind {
        match self {
            ServiceTypeInfo::String => ServiceTypeKind::String,
            ServiceTypeInfo::DateTime => ServiceTypeKind::DateTime,
            ServiceTypeInfo::Boolean => ServiceTypeKind::Boolean,
            ServiceTypeInfo::Float => ServiceTypeKind::Float,
            ServiceTypeInfo::Double => ServiceTypeKind::Double,
            ServiceTypeInfo::Int32 => ServiceTypeKind::Int32,
            ServiceTypeInfo::Int64 => ServiceTypeKind::Int64,
            ServiceTypeInfo::Decimal => ServiceTypeKind::Decimal,
            ServiceTypeInfo::Bytes => ServiceTypeKind::Bytes,
            ServiceTypeInfo::Object => ServiceTypeKind::Object,
            ServiceTypeInfo::Error => ServiceTypeKind::Error,
            ServiceTypeInfo::Dto(_) => ServiceTypeKind::Dto,
            ServiceTypeInfo::Enum(_) => ServiceTypeKind::Enum,
            ServiceTypeInfo::Result(_) => ServiceTypeKind::Result,
            ServiceTypeInfo::Array(_) => ServiceTypeKind::Array,
            ServiceTypeInfo::Map(_) => ServiceTypeKind::Map,
            ServiceTypeInfo::Nullable(_) => ServiceTypeKind::Nullable,
        }
    }

    /// The wrapped type of a composite kind.
    pub fn value_type(&self) -> Option<&ServiceTypeInfo> {
        match self {
            ServiceTypeInfo::Result(inner)
            | ServiceTypeInfo::Array(inner)
            | ServiceTypeInfo::Map(inner)
            | ServiceTypeInfo::Nullable(inner) => Some(inner),
            _ => None,
        }
    }

    fn from_scalar(kind: ServiceTypeKind) -> Option<Self> {
        Some(match kind {
            ServiceTypeKind::String => ServiceTypeInfo::String,
            ServiceTypeKind::DateTime => ServiceTypeInfo::DateTime,
            ServiceTypeKind::Boolean => ServiceTypeInfo::Boolean,
            ServiceTypeKind::Float => ServiceTypeInfo::Float,
            ServiceTypeKind::Double => ServiceTypeInfo::Double,
            ServiceTypeKind::Int32 => ServiceTypeInfo::Int32,
            ServiceTypeKind::Int64 => ServiceTypeInfo::Int64,
            ServiceTypeKind::Decimal => ServiceTypeInfo::Decimal,
            ServiceTypeKind::Bytes => ServiceTypeInfo::Bytes,
            ServiceTypeKind::Object => ServiceTypeInfo::Object,
            ServiceTypeKind::Error => ServiceTypeInfo::Error,
            _ => return None,
        })
    }

    /// Parse a type name in service-definition syntax against `service`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::UnknownType`] naming the innermost name
    /// that could not be resolved.
    pub fn parse(type_name: &str, service: &ServiceInfo) -> Result<Self, ContractViolation> {
        let name = type_name.trim();

        if let Some(inner) = name.strip_suffix("[]") {
            return Ok(ServiceTypeInfo::Array(Box::new(Self::parse(inner, service)?)));
        }
        let wrappers: [(&str, fn(Box<ServiceTypeInfo>) -> ServiceTypeInfo); 3] = [
            ("map<", ServiceTypeInfo::Map),
            ("result<", ServiceTypeInfo::Result),
            ("nullable<", ServiceTypeInfo::Nullable),
        ];
        for (prefix, wrap) in wrappers {
            if let Some(inner) = name.strip_prefix(prefix).and_then(|s| s.strip_suffix('>')) {
                return Ok(wrap(Box::new(Self::parse(inner, service)?)));
            }
        }

        if let Some(scalar) = ServiceTypeKind::SCALARS
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, kind)| Self::from_scalar(*kind))
        {
            return Ok(scalar);
        }
        if let Some(dto) = service.find_dto(name) {
            return Ok(ServiceTypeInfo::Dto(Arc::clone(dto)));
        }
        if let Some(enum_info) = service.find_enum(name) {
            return Ok(ServiceTypeInfo::Enum(Arc::clone(enum_info)));
        }

        Err(ContractViolation::UnknownType {
            type_name: name.to_string(),
        })
    }
}
