#![allow(dead_code, clippy::unwrap_used)]

pub mod temp_files {
    use std::path::{Path, PathBuf};

    /// Path of a file under `tests/staticdata`.
    pub fn staticdata(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("staticdata")
            .join(name)
    }

    /// Writes `content` to `name` inside a fresh temp directory.
    ///
    /// The directory lives as long as the returned guard.
    pub fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}

pub mod model {
    use fsdgen_python::model::{
        HttpFieldInfo, HttpFieldKind, LoadedModel, ServiceFieldInfo, ServiceInfo, ServiceMethodInfo,
    };
    use std::sync::Arc;

    pub fn load_example() -> LoadedModel {
        fsdgen_python::model::load_model(&super::temp_files::staticdata("example_api.yaml")).unwrap()
    }

    pub fn field(name: &str, type_name: &str) -> Arc<ServiceFieldInfo> {
        Arc::new(ServiceFieldInfo {
            name: name.to_string(),
            type_name: type_name.to_string(),
            ..Default::default()
        })
    }

    pub fn method(name: &str, request_fields: Vec<Arc<ServiceFieldInfo>>) -> Arc<ServiceMethodInfo> {
        Arc::new(ServiceMethodInfo {
            name: name.to_string(),
            request_fields,
            ..Default::default()
        })
    }

    pub fn service(name: &str, methods: Vec<Arc<ServiceMethodInfo>>) -> Arc<ServiceInfo> {
        Arc::new(ServiceInfo {
            name: name.to_string(),
            methods,
            ..Default::default()
        })
    }

    pub fn bind(kind: HttpFieldKind, field: &Arc<ServiceFieldInfo>) -> Arc<HttpFieldInfo> {
        Arc::new(HttpFieldInfo {
            kind,
            name: field.name.clone(),
            service_field: Arc::clone(field),
        })
    }
}
