//! Whole-file JSON persistence for entity collections.
//!
//! Every collection lives in one file holding a JSON array. Reads never fail:
//! a missing or unreadable file is treated as an empty collection, and a
//! record that does not decode is skipped without losing its neighbours.
//! Writes replace the file in full.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while writing a collection to disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Port through which a resource actor loads and saves its collection.
pub trait Persistence<T>: Send + 'static {
    /// Load the full collection. Never fails; returns an empty collection instead.
    fn load(&self) -> Vec<T>;

    /// Overwrite the stored collection with `items`.
    fn save(&self, items: &[T]) -> Result<(), StoreError>;
}

/// A collection stored as a pretty-printed JSON array in a single file.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> Persistence<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn load(&self) -> Vec<T> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No stored collection, starting empty");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored collection is not valid JSON, starting empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e, "Skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(items)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, data).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u64,
        name: String,
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Record>::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn invalid_json_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::<Record>::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn unreadable_records_are_skipped_individually() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.json");
        fs::write(
            &path,
            r#"[{ "id": 1, "name": "a" }, { "id": "two" }, 7, { "id": 3, "name": "c" }]"#,
        )
        .unwrap();

        let store = JsonFileStore::<Record>::new(&path);
        assert_eq!(
            store.load(),
            vec![
                Record { id: 1, name: "a".into() },
                Record { id: 3, name: "c".into() },
            ]
        );
    }

    #[test]
    fn save_overwrites_whole_file_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.json");
        let store = JsonFileStore::<Record>::new(&path);

        let first = vec![
            Record { id: 1, name: "a".into() },
            Record { id: 2, name: "b".into() },
        ];
        store.save(&first).unwrap();
        store.save(&first[..1]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n  {\n    \"id\": 1,\n    \"name\": \"a\"\n  }\n]");
        assert_eq!(store.load(), first[..1].to_vec());
    }
}
