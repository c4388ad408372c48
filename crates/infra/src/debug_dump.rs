//! Writes the last generated file to disk for manual inspection.

use std::path::{Path, PathBuf};

use excelgen_core::{ServiceError, ServiceResult};

use crate::last_file::LastFileStore;

/// Where the last file was written and how large it is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Write the last generated file into `dir`, named after the file itself.
///
/// Fails with `NotFound` when nothing has been generated yet and with
/// `Internal` when the write or the size probe fails.
pub fn dump_last_file(store: &dyn LastFileStore, dir: &Path) -> ServiceResult<DumpedFile> {
    let file = store
        .get()
        .ok_or_else(|| ServiceError::not_found("No generated file in memory"))?;

    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.bytes).map_err(|e| {
        ServiceError::internal(format!("failed to write {}: {e}", path.display()))
    })?;

    let size = std::fs::metadata(&path)
        .map_err(|e| ServiceError::internal(format!("failed to stat {}: {e}", path.display())))?
        .len();

    tracing::debug!(path = %path.display(), size, "dumped last generated file");

    Ok(DumpedFile { path, size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::last_file::{GeneratedFile, InMemoryLastFileStore};
    use chrono::Utc;

    #[test]
    fn nothing_generated_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryLastFileStore::new();

        let err = dump_last_file(&store, dir.path()).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn writes_bytes_and_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryLastFileStore::new();
        let file = store.put(GeneratedFile::new(vec![0xAB; 128], Utc::now()));

        let dumped = dump_last_file(&store, dir.path()).unwrap();

        assert_eq!(dumped.size, 128);
        assert_eq!(dumped.path, dir.path().join(&file.filename));
        assert_eq!(std::fs::read(&dumped.path).unwrap(), file.bytes);
    }

    #[test]
    fn unwritable_dir_is_internal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let store = InMemoryLastFileStore::new();
        store.put(GeneratedFile::new(vec![1], Utc::now()));

        let err = dump_last_file(&store, &missing).unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
