//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Rejected before allocation begins; the allocator itself is total.
    #[error("Invalid schedule input: {0}")]
    InvalidScheduleInput(String),

    #[error("Missing placeholder: {{{0}}}")]
    MissingPlaceholder(String),

    #[error("Invalid course details: {0}")]
    InvalidCourseDetails(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Workbook extraction failed: {0}")]
    Extract(String),

    #[error("Document rendering failed: {0}")]
    Render(String),

    #[error("Record store error: {0}")]
    Store(String),

    /// Terminal prompt failed (not a user cancel).
    #[error("Prompt failed: {0}")]
    Prompt(String),
}
