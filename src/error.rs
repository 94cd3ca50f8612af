//! Error types for the Python generator.

use thiserror::Error;

/// A broken invariant of the (already validated) input model.
///
/// These never originate from a template author's mistake; they mean the
/// model handed to the generator is not one the parser or HTTP deriver
/// could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A field's type name does not resolve to any known kind, DTO or enum.
    #[error("Type kind out of range: unknown type '{type_name}'")]
    UnknownType {
        /// The unresolved type name as written in the model.
        type_name: String,
    },

    /// A value handed to the obsolescence filter is not a filterable element.
    #[error("where_not_obsolete: unsupported element '{kind}'")]
    UnsupportedElement {
        /// Name of the offending variant or value kind.
        kind: String,
    },

    /// An HTTP binding names a service method that does not exist.
    #[error("HTTP binding references unknown method '{name}'")]
    UnresolvedMethod {
        /// The method name referenced by the binding.
        name: String,
    },

    /// An HTTP field binding names a field the method does not declare.
    #[error("HTTP binding for method '{method}' references unknown field '{name}'")]
    UnresolvedField {
        /// The owning method.
        method: String,
        /// The field name referenced by the binding.
        name: String,
    },
}

/// Errors that can occur while loading a model or generating output.
#[derive(Debug, Error)]
pub enum GenError {
    /// The input model broke one of its invariants.
    #[error("Model contract violation: {0}")]
    Contract(#[from] ContractViolation),

    /// The template referenced a name that is not bound in the context.
    #[error("Undefined template symbol(s): {}", .symbols.join(", "))]
    UndefinedSymbol {
        /// Names referenced by the template but not registered.
        symbols: Vec<String>,
        #[source]
        source: minijinja::Error,
    },

    /// Any other template evaluation failure.
    #[error("Template evaluation failed: {0}")]
    Template(#[from] minijinja::Error),

    /// Failed to read a model file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a YAML model document.
    #[error("Invalid YAML model: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to parse a JSON model document.
    #[error("Invalid JSON model: {0}")]
    Json(#[from] serde_json::Error),
}
