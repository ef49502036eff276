//! Annotation repository for JSON storage
//!
//! Manages loading and saving item tags and notes to annotations.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SheetsError;
use crate::models::{ItemAnnotation, ItemId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable annotation data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AnnotationData {
    annotations: Vec<ItemAnnotation>,
}

/// Repository for tag/notes persistence
pub struct AnnotationRepository {
    path: PathBuf,
    data: RwLock<HashMap<ItemId, ItemAnnotation>>,
}

impl AnnotationRepository {
    /// Create a new annotation repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load annotations from disk
    pub fn load(&self) -> Result<(), SheetsError> {
        let file_data: AnnotationData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SheetsError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for annotation in file_data.annotations {
            data.insert(annotation.id.clone(), annotation);
        }

        Ok(())
    }

    /// Save annotations to disk, dropping ones that no longer carry anything
    pub fn save(&self) -> Result<(), SheetsError> {
        let data = self.data.read().map_err(|e| {
            SheetsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut annotations: Vec<_> = data.values().filter(|a| !a.is_empty()).cloned().collect();
        annotations.sort_by(|a, b| a.id.cmp(&b.id));

        write_json_atomic(&self.path, &AnnotationData { annotations })
    }

    /// Get the annotation for an item
    pub fn get(&self, id: &ItemId) -> Result<Option<ItemAnnotation>, SheetsError> {
        let data = self.data.read().map_err(|e| {
            SheetsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(id).cloned())
    }

    /// Snapshot of all annotations keyed by item id
    pub fn as_map(&self) -> Result<HashMap<ItemId, ItemAnnotation>, SheetsError> {
        let data = self.data.read().map_err(|e| {
            SheetsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Insert or update an annotation, returning the previous value
    pub fn upsert(&self, annotation: ItemAnnotation) -> Result<Option<ItemAnnotation>, SheetsError> {
        let mut data = self.data.write().map_err(|e| {
            SheetsError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.insert(annotation.id.clone(), annotation))
    }

    /// Count of annotations
    pub fn count(&self) -> Result<usize, SheetsError> {
        let data = self.data.read().map_err(|e| {
            SheetsError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemTag;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AnnotationRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("annotations.json");
        let repo = AnnotationRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut annotation = ItemAnnotation::new("100", 7);
        annotation.tag = Some(ItemTag::Keep);
        assert!(repo.upsert(annotation.clone()).unwrap().is_none());

        let previous = repo.upsert(ItemAnnotation::new("100", 7)).unwrap();
        assert_eq!(previous, Some(annotation));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload_drops_empty() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut tagged = ItemAnnotation::new("1", 7);
        tagged.tag = Some(ItemTag::Junk);
        repo.upsert(tagged).unwrap();
        repo.upsert(ItemAnnotation::new("2", 8)).unwrap();
        repo.save().unwrap();

        let repo2 = AnnotationRepository::new(temp_dir.path().join("annotations.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        let loaded = repo2.get(&ItemId::from("1")).unwrap().unwrap();
        assert_eq!(loaded.tag, Some(ItemTag::Junk));
    }
}
