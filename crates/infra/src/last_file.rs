//! In-memory slot holding the most recently generated spreadsheet.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

/// Filename prefix for generated jumper inventories.
pub const FILENAME_PREFIX: &str = "inventario_jumpers_";

/// Build the download filename for a file generated at `at` (UTC).
pub fn generated_filename(at: DateTime<Utc>) -> String {
    format!("{FILENAME_PREFIX}{}.xlsx", at.format("%Y%m%d_%H%M%S"))
}

/// A generated spreadsheet kept for later inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedFile {
    pub fn new(bytes: Vec<u8>, generated_at: DateTime<Utc>) -> Self {
        Self {
            filename: generated_filename(generated_at),
            bytes,
            generated_at,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Storage for the last generated file.
///
/// Each `put` replaces the previous value; the last writer wins.
pub trait LastFileStore: Send + Sync {
    fn put(&self, file: GeneratedFile) -> Arc<GeneratedFile>;

    fn get(&self) -> Option<Arc<GeneratedFile>>;
}

/// Process-local last-file store. Cleared on restart.
#[derive(Debug, Default)]
pub struct InMemoryLastFileStore {
    slot: RwLock<Option<Arc<GeneratedFile>>>,
}

impl InMemoryLastFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl LastFileStore for InMemoryLastFileStore {
    fn put(&self, file: GeneratedFile) -> Arc<GeneratedFile> {
        let file = Arc::new(file);
        // A panicked writer can only have left a complete Option behind.
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&file));
        file
    }

    fn get(&self) -> Option<Arc<GeneratedFile>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, h, m, s).unwrap()
    }

    #[test]
    fn filename_uses_utc_timestamp() {
        assert_eq!(
            generated_filename(at(9, 5, 1)),
            "inventario_jumpers_20240307_090501.xlsx"
        );
    }

    #[test]
    fn filename_is_derived_from_generation_time() {
        let file = GeneratedFile::new(vec![1], at(23, 59, 58));
        assert_eq!(file.generated_at, at(23, 59, 58));
        assert_eq!(file.filename, generated_filename(file.generated_at));
    }

    #[test]
    fn empty_store_has_nothing() {
        let store = InMemoryLastFileStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn put_overwrites_previous_file() {
        let store = InMemoryLastFileStore::new();

        store.put(GeneratedFile::new(vec![1, 2, 3], at(10, 0, 0)));
        store.put(GeneratedFile::new(vec![9; 5], at(11, 0, 0)));

        let last = store.get().unwrap();
        assert_eq!(last.size(), 5);
        assert_eq!(last.filename, "inventario_jumpers_20240307_110000.xlsx");
    }

    #[test]
    fn put_returns_the_stored_file() {
        let store = InMemoryLastFileStore::new();
        let stored = store.put(GeneratedFile::new(vec![7; 3], at(12, 30, 0)));
        assert!(Arc::ptr_eq(&stored, &store.get().unwrap()));
    }
}
