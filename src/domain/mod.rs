//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the lesson-plan allocator, template rendering and the quality
//! audit live here.
//! Dependencies flow inward.

pub mod audit;
pub mod course_data;
pub mod entities;
pub mod errors;
pub mod plan;
pub mod schedule;
pub mod template;
pub mod topics;

pub use audit::{AuditIssue, AuditReport};
pub use course_data::{
    AssessmentMode, CourseBackground, CourseData, CourseParticulars, CourseSummary,
    InstructionMethod, LearningOutcome,
};
pub use entities::{
    CourseDetails, CourseMode, CourseRecord, DurationSummary, GeneratedSection, Section,
};
pub use errors::DomainError;
pub use plan::LessonPlan;
pub use schedule::{DaySchedule, ScheduleBudget, Slot, SlotKind, allocate};
pub use topics::{Topic, parse_topics, topics_or_placeholders};
