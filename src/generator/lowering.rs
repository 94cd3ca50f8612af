//! Lowering of service types into Python type expressions.

use crate::model::ServiceTypeInfo;

/// Python class name for a type, suitable for `isinstance` checks.
///
/// Containers lower to their bare builtin (`list`, `dict`); DTOs and enums to
/// their declared name; `nullable<T>` to the class of `T`.
pub fn render_field_type_class(type_info: &ServiceTypeInfo) -> String {
    match type_info {
        ServiceTypeInfo::String | ServiceTypeInfo::DateTime => "str".to_string(),
        ServiceTypeInfo::Boolean => "bool".to_string(),
        ServiceTypeInfo::Float | ServiceTypeInfo::Double => "float".to_string(),
        ServiceTypeInfo::Int32 | ServiceTypeInfo::Int64 => "int".to_string(),
        ServiceTypeInfo::Decimal => "decimal.Decimal".to_string(),
        ServiceTypeInfo::Bytes => "bytes".to_string(),
        ServiceTypeInfo::Object => "object".to_string(),
        ServiceTypeInfo::Error => "facility.Error".to_string(),
        ServiceTypeInfo::Dto(dto) => dto.name.clone(),
        ServiceTypeInfo::Enum(enum_info) => enum_info.name.clone(),
        ServiceTypeInfo::Result(_) => "facility.Result".to_string(),
        ServiceTypeInfo::Array(_) => "list".to_string(),
        ServiceTypeInfo::Map(_) => "dict".to_string(),
        ServiceTypeInfo::Nullable(inner) => render_field_type_class(inner),
    }
}

/// Full Python type annotation for a type.
///
/// DTO and enum names are quoted forward references so a class may mention
/// types declared after it (or itself).
///
/// ```rust
/// use fsdgen_python::generator::render_field_type_declaration;
/// use fsdgen_python::model::ServiceTypeInfo;
///
/// let map = ServiceTypeInfo::Map(Box::new(ServiceTypeInfo::Int32));
/// assert_eq!(render_field_type_declaration(&map), "typing.Dict[str, int]");
/// ```
pub fn render_field_type_declaration(type_info: &ServiceTypeInfo) -> String {
    match type_info {
        ServiceTypeInfo::Dto(dto) => format!("\"{}\"", dto.name),
        ServiceTypeInfo::Enum(enum_info) => format!("\"{}\"", enum_info.name),
        ServiceTypeInfo::Result(inner) => {
            format!("facility.Result[{}]", render_field_type_declaration(inner))
        }
        ServiceTypeInfo::Array(inner) => {
            format!("typing.List[{}]", render_field_type_declaration(inner))
        }
        ServiceTypeInfo::Map(inner) => {
            format!("typing.Dict[str, {}]", render_field_type_declaration(inner))
        }
        ServiceTypeInfo::Nullable(inner) => {
            format!("typing.Optional[{}]", render_field_type_declaration(inner))
        }
        scalar => render_field_type_class(scalar),
    }
}
