//! # Model Module
//!
//! Read-only inputs to a generation run:
//!
//! - **[`ServiceInfo`]** - the language-agnostic service model (methods, DTOs,
//!   enums, error sets), as produced by the service-definition parser
//! - **[`HttpServiceInfo`]** - the optional HTTP binding model, partitioning
//!   each method's fields into header/path/body/query/normal buckets
//! - **[`load_model`]** - reads both from their serialized YAML or JSON form
//!
//! The generator never validates the model beyond resolving names; it assumes
//! the upstream parser and HTTP deriver already did.

mod http;
mod load;
mod service;
mod types;

pub use http::{HttpFieldInfo, HttpFieldKind, HttpMethodInfo, HttpResponseInfo, HttpServiceInfo};
pub use load::{load_model, parse_model_yaml, LoadedModel};
pub use service::{
    ServiceDtoInfo, ServiceElementWithAttributes, ServiceEnumInfo, ServiceEnumValueInfo,
    ServiceErrorInfo, ServiceErrorSetInfo, ServiceFieldInfo, ServiceInfo, ServiceMethodInfo,
};
pub use types::{ServiceTypeInfo, ServiceTypeKind};
