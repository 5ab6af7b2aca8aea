//! Application use cases. Orchestrate domain logic via ports.

pub mod audit_service;
pub mod course_service;
pub mod lesson_plan_service;
pub mod proposal_service;

pub use audit_service::AuditService;
pub use course_service::{CourseService, TopicRequest};
pub use lesson_plan_service::{LessonPlanFiles, LessonPlanService};
pub use proposal_service::ProposalService;
