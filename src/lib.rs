//! # fsdgen-python
//!
//! **fsdgen-python** generates Python client code from a Facility service
//! definition model.
//!
//! ## Overview
//!
//! The input is the language-agnostic model an upstream service-definition
//! parser produces (methods, DTOs, enums, error sets) together with the
//! optional HTTP binding an HTTP deriver computes from it. The output is a
//! set of named text files: one Python module per service, containing enum
//! and DTO classes, error-set constants and, when HTTP is enabled, a
//! `facility.ClientBase` subclass with one method per service method.
//!
//! ## Architecture
//!
//! - **[`model`]** - the read-only service and HTTP binding models, and their loader
//! - **[`generator`]** - naming, type lowering, HTTP helpers, template rendering
//!   and output splitting
//! - **[`config`]** - generator settings from defaults, TOML and environment
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `fsdgen-python` command-line driver
//!
//! ## Example
//!
//! ```rust
//! use fsdgen_python::generator::PythonGenerator;
//! use fsdgen_python::model::parse_model_yaml;
//!
//! let model = parse_model_yaml(
//!     "service:\n  name: WidgetApi\n  dtos:\n    - name: Widget\n      fields:\n        - name: id\n          type: string\n",
//! )
//! .unwrap();
//! let output = PythonGenerator::default()
//!     .generate_output(model.service, model.http_service)
//!     .unwrap();
//! assert_eq!(output.files[0].name, "widget_api.py");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;

pub use error::{ContractViolation, GenError};
