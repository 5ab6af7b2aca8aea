//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CourseData, CourseRecord, DomainError};
use std::path::Path;

/// Hosted text-generation service. One blocking round-trip per call; no
/// retry, streaming or cancellation. Callers surface errors and let the user
/// retry manually.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a fully rendered prompt.
    ///
    /// # Errors
    /// `DomainError::Generation` on transport failure, a non-success response,
    /// or empty output.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

/// Source of structured course data (the course-proposal workbook).
#[async_trait::async_trait]
pub trait CourseSource: Send + Sync {
    /// Read every section of the workbook at `path`.
    async fn load(&self, path: &Path) -> Result<CourseData, DomainError>;
}

/// Persists the saved course record between sessions.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the saved record. Returns an empty record if none exists.
    async fn load(&self) -> Result<CourseRecord, DomainError>;

    /// Replace the saved record.
    async fn save(&self, record: &CourseRecord) -> Result<(), DomainError>;
}
