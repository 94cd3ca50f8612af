//! # Generator Module
//!
//! Turns a [`ServiceInfo`](crate::model::ServiceInfo) (plus an optional HTTP
//! binding model) into Python source files.
//!
//! ## Architecture
//!
//! ```text
//! Model → CodeGenContext → Template Rendering → Normalization → File Splitting
//! ```
//!
//! 1. **Context** - [`CodeGenContext`] holds the model and answers lookups
//!    (HTTP binding per method, resolved field types)
//! 2. **Template Rendering** - the minijinja template runs against a fixed
//!    table of globals ([`template_globals`]); undefined names are errors
//! 3. **Normalization** - trailing whitespace and long blank runs are collapsed
//! 4. **File Splitting** - `==> name` marker lines divide the text into
//!    [`CodeGenFile`]s
//!
//! ## Helpers Exposed to Templates
//!
//! - **Naming** - [`snake_case`], [`pascal_case`], [`to_upper`], with Python
//!   reserved words escaped by a trailing underscore
//! - **Type lowering** - [`render_field_type_class`] and
//!   [`render_field_type_declaration`]
//! - **HTTP** - [`ordered_request_fields`], [`is_required`],
//!   [`render_path_as_python_fstring`]
//! - **Filtering** - `where_not_obsolete` over any mix of model nodes
//! - **Status codes** - [`status_code_phrase`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fsdgen_python::generator::PythonGenerator;
//! use fsdgen_python::model::load_model;
//!
//! let model = load_model("api.yaml".as_ref())?;
//! let output = PythonGenerator::default().generate_output(model.service, model.http_service)?;
//! for file in &output.files {
//!     println!("{}", file.name);
//! }
//! ```

mod context;
mod http;
mod lowering;
mod naming;
mod objects;
mod obsolete;
mod output;
mod python;
mod split;
mod status;
mod template;


pub use context::CodeGenContext;
pub use http::{binding_for, is_required, ordered_request_fields, render_path_as_python_fstring};
pub use lowering::{render_field_type_class, render_field_type_declaration};
pub use naming::{is_reserved, pascal_case, snake_case, to_upper};
pub use objects::{model_object, ModelObject};
pub use obsolete::{where_not_obsolete, Filterable};
pub use output::{codegen_comment, CodeGenFile, CodeGenOutput, CodeGenPattern};
pub use python::{PythonGenerator, PYTHON_TEMPLATE};
pub use split::split_files;
pub use status::status_code_phrase;
pub use template::{normalize_whitespace, render, template_globals};
