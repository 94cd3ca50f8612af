use std::sync::Arc;
use tracing::{debug, info};

use super::context::CodeGenContext;
use super::output::{codegen_comment, CodeGenOutput, CodeGenPattern};
use super::split::split_files;
use super::template::render;
use crate::config::GeneratorSettings;
use crate::error::GenError;
use crate::model::{HttpServiceInfo, ServiceInfo};

/// The embedded Python client template.
pub const PYTHON_TEMPLATE: &str = include_str!("../../templates/python.py.jinja");

/// Generates a Python client module from a service model.
#[derive(Debug, Clone)]
pub struct PythonGenerator {
    /// Name written into the generated-file marker comment.
    pub generator_name: String,
    /// Skip HTTP client generation even when a binding model is supplied.
    pub no_http: bool,
}

impl Default for PythonGenerator {
    fn default() -> Self {
        PythonGenerator::from_settings(&GeneratorSettings::default())
    }
}

impl PythonGenerator {
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        PythonGenerator {
            generator_name: settings.generator_name.clone(),
            no_http: settings.no_http,
        }
    }

    /// Generate output files using the embedded template.
    ///
    /// # Errors
    ///
    /// Fails on a model contract violation or a template evaluation error;
    /// either aborts the whole run.
    pub fn generate_output(
        &self,
        service: Arc<ServiceInfo>,
        http_service: Option<Arc<HttpServiceInfo>>,
    ) -> Result<CodeGenOutput, GenError> {
        self.generate_output_with_template(PYTHON_TEMPLATE, service, http_service)
    }

    /// Generate output files from a caller-supplied template.
    ///
    /// # Errors
    ///
    /// See [`PythonGenerator::generate_output`].
    pub fn generate_output_with_template(
        &self,
        template_text: &str,
        service: Arc<ServiceInfo>,
        http_service: Option<Arc<HttpServiceInfo>>,
    ) -> Result<CodeGenOutput, GenError> {
        let http_service = if self.no_http { None } else { http_service };
        debug!(
            service = %service.name,
            http = http_service.is_some(),
            "generating python"
        );

        let context = Arc::new(CodeGenContext::new(&self.generator_name, service, http_service));
        let text = render(template_text, &context)?;
        let files = split_files(&text);

        let comment = codegen_comment(&self.generator_name);
        let patterns_to_clean = vec![
            CodeGenPattern::new("*.md", comment.clone()),
            CodeGenPattern::new("*.py", comment),
        ];

        info!(
            service = %context.service.name,
            files = files.len(),
            "generated python output"
        );
        Ok(CodeGenOutput {
            files,
            patterns_to_clean,
        })
    }
}
