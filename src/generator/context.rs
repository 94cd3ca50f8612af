use std::sync::Arc;

use super::http::binding_for;
use super::output::codegen_comment;
use crate::error::ContractViolation;
use crate::model::{HttpMethodInfo, HttpServiceInfo, ServiceFieldInfo, ServiceInfo, ServiceMethodInfo, ServiceTypeInfo};

/// Everything a template can see during one generation run.
///
/// Built once per run and never mutated; the models are shared, not copied.
#[derive(Debug, Clone)]
pub struct CodeGenContext {
    pub service: Arc<ServiceInfo>,
    pub http_service: Option<Arc<HttpServiceInfo>>,
    pub code_gen_comment_text: String,
}

impl CodeGenContext {
    pub fn new(
        generator_name: &str,
        service: Arc<ServiceInfo>,
        http_service: Option<Arc<HttpServiceInfo>>,
    ) -> Self {
        CodeGenContext {
            service,
            http_service,
            code_gen_comment_text: codegen_comment(generator_name),
        }
    }

    /// HTTP binding for `method`, if HTTP generation is active and it has one.
    pub fn get_http(&self, method: &ServiceMethodInfo) -> Option<&Arc<HttpMethodInfo>> {
        binding_for(self.http_service.as_deref(), method)
    }

    /// Resolved type of `field`.
    ///
    /// # Errors
    ///
    /// See [`ServiceInfo::field_type`].
    pub fn get_field_type(&self, field: &ServiceFieldInfo) -> Result<ServiceTypeInfo, ContractViolation> {
        self.service.field_type(field)
    }
}
