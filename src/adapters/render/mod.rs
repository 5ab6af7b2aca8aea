//! Plain-text document renderers (Markdown, CSV, JSON).
//!
//! Pure functions from domain values to document text; use cases write the files.

pub mod audit_md;
pub mod lesson_plan;
pub mod proposal_md;
