//! Implements RecordStore using a JSON file.
//!
//! Holds the one saved course record between sessions.

use crate::domain::{CourseRecord, DomainError};
use crate::ports::RecordStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// JSON file-based record storage.
pub struct RecordJson {
    path: PathBuf,
}

impl RecordJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl RecordStore for RecordJson {
    /// Missing or unreadable JSON loads as an empty record.
    async fn load(&self) -> Result<CourseRecord, DomainError> {
        match fs::read_to_string(&self.path).await {
            Ok(s) => Ok(serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "corrupt course record; starting fresh");
                CourseRecord::default()
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(CourseRecord::default()),
            Err(e) => Err(DomainError::Store(format!("read {}: {}", self.path.display(), e))),
        }
    }

    /// Atomic save: temp file, sync_all, rename over the target.
    async fn save(&self, record: &CourseRecord) -> Result<(), DomainError> {
        let json =
            serde_json::to_string_pretty(record).map_err(|e| DomainError::Store(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Store(format!("create dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Store(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Store(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Store(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Store(format!("atomic rename failed: {}", e)))?;

        info!(path = %self.path.display(), "course record saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseDetails, Section};

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordJson::new(dir.path().join("course.json"));
        assert_eq!(store.load().await.unwrap(), CourseRecord::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordJson::new(dir.path().join("nested/course.json"));
        let record = CourseRecord::default()
            .with_details(
                CourseDetails {
                    title: "Data Literacy".to_string(),
                    ..CourseDetails::default()
                },
                10,
            )
            .with_section(&Section::AboutCourse, "About.".to_string(), 11);
        store.save(&record).await.unwrap();

        assert_eq!(store.load().await.unwrap(), record);
        assert!(!dir.path().join("nested/course.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = RecordJson::new(&path);
        assert_eq!(store.load().await.unwrap(), CourseRecord::default());
    }
}
