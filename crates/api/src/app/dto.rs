use serde::Serialize;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesStatus {
    pub jumpers: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub templates: TemplatesStatus,
}

#[derive(Debug, Serialize)]
pub struct DebugFileResponse {
    pub ok: bool,
    pub path: String,
    pub size: u64,
}

impl From<excelgen_infra::DumpedFile> for DebugFileResponse {
    fn from(dumped: excelgen_infra::DumpedFile) -> Self {
        Self {
            ok: true,
            path: dumped.path.display().to_string(),
            size: dumped.size,
        }
    }
}
