//! # CLI Module
//!
//! Thin command-line driver around [`crate::generator::PythonGenerator`].
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate a Python client module from a service model:
//!
//! ```bash
//! fsdgen-python generate --model api.yaml --output client/
//! ```
//!
//! Options:
//! - `--model <FILE>` - Service model, YAML or JSON (required)
//! - `--output <DIR>` - Directory the generated files are written to (required)
//! - `--settings <FILE>` - Settings TOML (default: `fsdgen-python.toml` next to the model)
//! - `--no-http` - Skip HTTP client generation
//! - `--generator-name <NAME>` - Name written into the generated-file marker
//! - `--dry-run` - List the files that would be written without writing them
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use fsdgen_python::cli::{run, Cli};
//! use clap::Parser;
//!
//! run(Cli::parse())?;
//! ```

mod commands;


pub use commands::{generate_command, run, run_cli, Cli, Commands, GenerateArgs};
