//! Template execution.
//!
//! Templates see a fixed table of globals built once per run by
//! [`template_globals`]. Undefined names are hard errors, never blanks.
//! Nothing during rendering consults the host locale: number and string
//! formatting is Rust's own, so output is identical on every machine.

use minijinja::value::Value;
use minijinja::{context, Environment, Error, ErrorKind, Template, UndefinedBehavior};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

use super::context::CodeGenContext;
use super::http::{is_required, ordered_request_fields, render_path_as_python_fstring};
use super::lowering::{render_field_type_class, render_field_type_declaration};
use super::naming::{pascal_case, snake_case, to_upper};
use super::objects::{model_object, ModelObject};
use super::status::status_code_phrase;
use crate::error::{ContractViolation, GenError};
use crate::model::{HttpFieldInfo, HttpMethodInfo, ServiceFieldInfo, ServiceMethodInfo, ServiceTypeInfo};

const TEMPLATE_NAME: &str = "generator";

// Names minijinja itself provides; never reported as unbound.
const BUILTIN_NAMES: &[&str] = &["range", "dict", "debug", "namespace", "loop", "self", "super"];

static TRAILING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ \t]+$").expect("trailing space regex should be valid"));
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n\n\n+").expect("blank run regex should be valid"));
static TRAILING_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\z").expect("trailing blank lines regex should be valid"));

/// Render `template_text` against `context` and normalize the result.
///
/// # Errors
///
/// - [`GenError::Contract`] if a template function hit a model contract violation
/// - [`GenError::UndefinedSymbol`] if the template referenced an unbound name
/// - [`GenError::Template`] for syntax and other evaluation errors
pub fn render(template_text: &str, context: &Arc<CodeGenContext>) -> Result<String, GenError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    let globals = template_globals(context);
    for (name, value) in &globals {
        env.add_global(*name, value.clone());
    }

    env.add_template(TEMPLATE_NAME, template_text)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let text = template
        .render(context! {})
        .map_err(|err| classify_error(&template, &globals, err))?;
    debug!(bytes = text.len(), "rendered template");

    Ok(normalize_whitespace(&text))
}

/// Strip trailing horizontal whitespace, collapse blank runs to two blank
/// lines, and drop blank lines at the end of the document.
///
/// Any run of three or more blank lines collapses, not only runs of four or
/// more, matching the Facility generators' own whitespace cleanup.
pub fn normalize_whitespace(text: &str) -> String {
    let text = TRAILING_SPACE.replace_all(text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n\n");
    TRAILING_BLANK_LINES.replace(&text, "\n").into_owned()
}

fn classify_error(template: &Template<'_, '_>, globals: &[(&'static str, Value)], err: Error) -> GenError {
    if let Some(violation) = find_contract_violation(&err) {
        return GenError::Contract(violation);
    }
    if matches!(err.kind(), ErrorKind::UndefinedError | ErrorKind::UnknownFunction) {
        let symbols: BTreeSet<String> = template
            .undeclared_variables(false)
            .into_iter()
            .filter(|name| {
                !globals.iter().any(|(global, _)| global == name)
                    && !BUILTIN_NAMES.contains(&name.as_str())
            })
            .collect();
        if !symbols.is_empty() {
            return GenError::UndefinedSymbol {
                symbols: symbols.into_iter().collect(),
                source: err,
            };
        }
    }
    GenError::Template(err)
}

fn find_contract_violation(err: &Error) -> Option<ContractViolation> {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(current) = source {
        if let Some(violation) = current.downcast_ref::<ContractViolation>() {
            return Some(violation.clone());
        }
        source = current.source();
    }
    None
}

fn contract_error(violation: ContractViolation) -> Error {
    Error::new(ErrorKind::InvalidOperation, violation.to_string()).with_source(violation)
}

fn bad_argument(function: &str, expected: &str, value: &Value) -> Error {
    let got = match model_object(value) {
        Some(object) => object.variant_name().to_string(),
        None => value.kind().to_string(),
    };
    Error::new(
        ErrorKind::InvalidOperation,
        format!("{function}: expected {expected}, got {got}"),
    )
}

fn method_arg(function: &str, value: &Value) -> Result<Arc<ServiceMethodInfo>, Error> {
    match model_object(value) {
        Some(ModelObject::Method(method)) => Ok(Arc::clone(method)),
        _ => Err(bad_argument(function, "a method", value)),
    }
}

fn field_arg(function: &str, value: &Value) -> Result<Arc<ServiceFieldInfo>, Error> {
    match model_object(value) {
        Some(ModelObject::Field(field)) => Ok(Arc::clone(field)),
        _ => Err(bad_argument(function, "a field", value)),
    }
}

fn type_arg(function: &str, value: &Value) -> Result<Arc<ServiceTypeInfo>, Error> {
    match model_object(value) {
        Some(ModelObject::Type(type_info)) => Ok(Arc::clone(type_info)),
        _ => Err(bad_argument(function, "a type", value)),
    }
}

fn http_method_arg(function: &str, value: &Value) -> Result<Arc<HttpMethodInfo>, Error> {
    match model_object(value) {
        Some(ModelObject::HttpMethod(http)) => Ok(Arc::clone(http)),
        _ => Err(bad_argument(function, "an HTTP method", value)),
    }
}

fn http_field_arg(function: &str, value: &Value) -> Result<Arc<HttpFieldInfo>, Error> {
    match model_object(value) {
        Some(ModelObject::HttpField(http)) => Ok(Arc::clone(http)),
        _ => Err(bad_argument(function, "an HTTP field", value)),
    }
}

/// Template-side obsolescence filter over any sequence of model nodes.
fn where_not_obsolete(items: Value) -> Result<Value, Error> {
    let mut active = Vec::new();
    for item in items.try_iter()? {
        let obsolete = match model_object(&item) {
            Some(object) => object.as_filterable().map_err(contract_error)?.is_obsolete(),
            None => {
                return Err(contract_error(ContractViolation::UnsupportedElement {
                    kind: item.kind().to_string(),
                }))
            }
        };
        if !obsolete {
            active.push(item);
        }
    }
    Ok(Value::from(active))
}

/// The name-to-value table every template runs against.
///
/// Built once per run; the names double as the set of bound symbols when
/// diagnosing undefined references.
pub fn template_globals(context: &Arc<CodeGenContext>) -> Vec<(&'static str, Value)> {
    let http_context = Arc::clone(context);
    let type_context = Arc::clone(context);

    vec![
        (
            "service",
            ModelObject::Service(Arc::clone(&context.service)).into_value(),
        ),
        (
            "http_service",
            match &context.http_service {
                Some(http) => ModelObject::HttpService(Arc::clone(http)).into_value(),
                None => Value::from(()),
            },
        ),
        (
            "code_gen_comment_text",
            Value::from(context.code_gen_comment_text.as_str()),
        ),
        (
            "kind_name",
            Value::from_function(|type_info: Value| -> Result<String, Error> {
                Ok(type_arg("kind_name", &type_info)?.kind().name().to_string())
            }),
        ),
        (
            "get_http",
            Value::from_function(move |method: Value| -> Result<Value, Error> {
                let method = method_arg("get_http", &method)?;
                Ok(match http_context.get_http(&method) {
                    Some(http) => ModelObject::HttpMethod(Arc::clone(http)).into_value(),
                    None => Value::from(()),
                })
            }),
        ),
        (
            "get_field_type",
            Value::from_function(move |field: Value| -> Result<Value, Error> {
                let field = field_arg("get_field_type", &field)?;
                let type_info = type_context.get_field_type(&field).map_err(contract_error)?;
                Ok(ModelObject::Type(Arc::new(type_info)).into_value())
            }),
        ),
        (
            "is_required",
            Value::from_function(|field: Value| -> Result<bool, Error> {
                Ok(is_required(&*http_field_arg("is_required", &field)?))
            }),
        ),
        (
            "fields",
            Value::from_function(|method: Value| -> Result<Value, Error> {
                let method = http_method_arg("fields", &method)?;
                Ok(Value::from(
                    ordered_request_fields(&method)
                        .into_iter()
                        .map(|field| ModelObject::HttpField(field).into_value())
                        .collect::<Vec<_>>(),
                ))
            }),
        ),
        (
            "render_field_type_class",
            Value::from_function(|type_info: Value| -> Result<String, Error> {
                Ok(render_field_type_class(&*type_arg("render_field_type_class", &type_info)?))
            }),
        ),
        (
            "render_field_type_declaration",
            Value::from_function(|type_info: Value| -> Result<String, Error> {
                Ok(render_field_type_declaration(&*type_arg(
                    "render_field_type_declaration",
                    &type_info,
                )?))
            }),
        ),
        ("where_not_obsolete", Value::from_function(where_not_obsolete)),
        (
            "status_code_phrase",
            Value::from_function(|code: i64| -> Value {
                u16::try_from(code)
                    .ok()
                    .and_then(status_code_phrase)
                    .map_or_else(|| Value::from(()), Value::from)
            }),
        ),
        (
            "snake_case",
            Value::from_function(|text: String| -> String { snake_case(&text) }),
        ),
        (
            "pascal_case",
            Value::from_function(|text: String| -> String { pascal_case(&text) }),
        ),
        (
            "to_upper",
            Value::from_function(|text: String| -> String { to_upper(&text) }),
        ),
        (
            "render_path_as_python_fstring",
            Value::from_function(|method: Value| -> Result<String, Error> {
                Ok(render_path_as_python_fstring(&*http_method_arg(
                    "render_path_as_python_fstring",
                    &method,
                )?))
            }),
        ),
    ]
}
