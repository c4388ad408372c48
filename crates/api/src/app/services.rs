use std::{path::PathBuf, sync::Arc};

use chrono::Utc;

use excelgen_core::{ServiceError, ServiceResult};
use excelgen_infra::{
    dump_last_file, DumpedFile, GeneratedFile, InMemoryLastFileStore, LastFileStore,
    TemplateFiller,
};
use excelgen_inventory::Item;

use crate::config::AppConfig;

/// Application context shared by all handlers of one router.
pub struct AppServices {
    filler: TemplateFiller,
    last_file: Arc<dyn LastFileStore>,
    debug_dir: PathBuf,
}

impl AppServices {
    pub fn new(
        filler: TemplateFiller,
        last_file: Arc<dyn LastFileStore>,
        debug_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filler,
            last_file,
            debug_dir: debug_dir.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            TemplateFiller::new(config.template_path.clone()),
            InMemoryLastFileStore::arc(),
            config.debug_dir.clone(),
        )
    }

    /// Whether the jumpers template is present on disk.
    pub fn jumpers_template_exists(&self) -> std::io::Result<bool> {
        self.filler.template_exists()
    }

    /// Fill the template with `items` and remember the result as the last file.
    pub async fn generate_jumpers(&self, items: Vec<Item>) -> ServiceResult<Arc<GeneratedFile>> {
        let filler = self.filler.clone();
        let bytes = tokio::task::spawn_blocking(move || filler.fill(&items))
            .await
            .map_err(|e| ServiceError::internal(format!("generation task failed: {e}")))??;

        let file = self.last_file.put(GeneratedFile::new(bytes, Utc::now()));
        tracing::info!(
            filename = %file.filename,
            size = file.size(),
            generated_at = %file.generated_at.to_rfc3339(),
            "generated jumpers workbook"
        );
        Ok(file)
    }

    /// Write the last generated file into the debug directory.
    pub async fn dump_last_file(&self) -> ServiceResult<DumpedFile> {
        let store = Arc::clone(&self.last_file);
        let dir = self.debug_dir.clone();
        tokio::task::spawn_blocking(move || dump_last_file(store.as_ref(), &dir))
            .await
            .map_err(|e| ServiceError::internal(format!("debug dump task failed: {e}")))?
    }
}
