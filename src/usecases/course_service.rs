//! Course service. Course Details page actions and section drafting.
//!
//! Every action loads the saved record, applies one transition and saves the
//! result back.

use crate::adapters::ai::prompts::{self, COURSE_TOPICS};
use crate::domain::template::{self, placeholders, render};
use crate::domain::{
    CourseDetails, CourseRecord, DomainError, DurationSummary, Section, parse_topics,
};
use crate::ports::{RecordStore, TextGenerator};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the topic-outline generator.
#[derive(Debug, Clone, Default)]
pub struct TopicRequest {
    pub course_title: String,
    pub num_days: i64,
    /// Unique skill name or description used as extra context.
    pub skill_context: Option<String>,
    pub special_requirements: Option<String>,
}

impl TopicRequest {
    /// At most three topics per day.
    pub fn max_topics(&self) -> i64 {
        self.num_days.max(1).saturating_mul(3)
    }
}

pub struct CourseService {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn RecordStore>,
}

impl CourseService {
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<dyn RecordStore>) -> Self {
        Self { generator, store }
    }

    pub async fn record(&self) -> Result<CourseRecord, DomainError> {
        self.store.load().await
    }

    /// Validate and save course details. Returns the derived duration figures.
    pub async fn save_details(
        &self,
        details: CourseDetails,
    ) -> Result<DurationSummary, DomainError> {
        details.validate()?;
        let summary = DurationSummary::from_details(&details);
        let record = self.store.load().await?.with_details(details, now());
        self.store.save(&record).await?;
        info!(
            title = %record.details.as_ref().map(|d| d.title.as_str()).unwrap_or(""),
            "course details saved"
        );
        Ok(summary)
    }

    /// Template used for `section`: the saved override, else the default.
    pub async fn template_for(&self, section: &Section) -> Result<String, DomainError> {
        let record = self.store.load().await?;
        Ok(record
            .prompt_override(section)
            .unwrap_or_else(|| prompts::default_template(section))
            .to_string())
    }

    /// Save a user-edited template. Only the section's placeholders are allowed.
    pub async fn set_prompt_override(
        &self,
        section: &Section,
        template_text: String,
    ) -> Result<(), DomainError> {
        let allowed = section.allowed_placeholders();
        if let Some(unknown) = placeholders(&template_text)?
            .into_iter()
            .find(|name| !allowed.contains(&name.as_str()))
        {
            return Err(DomainError::MissingPlaceholder(unknown));
        }
        let record = self
            .store
            .load()
            .await?
            .with_prompt_override(section, template_text, now());
        self.store.save(&record).await?;
        info!(section = %section.template_key(), "prompt override saved");
        Ok(())
    }

    /// Drop a saved override so the default template applies again.
    pub async fn reset_prompt_override(&self, section: &Section) -> Result<(), DomainError> {
        let record = self
            .store
            .load()
            .await?
            .without_prompt_override(section, now());
        self.store.save(&record).await
    }

    /// Draft one section from the saved details and store the text.
    pub async fn generate_section(&self, section: &Section) -> Result<String, DomainError> {
        let record = self.store.load().await?;
        let details = record.require_details()?;
        let template_text = record
            .prompt_override(section)
            .unwrap_or_else(|| prompts::default_template(section));
        let prompt = render(template_text, &section_vars(section, details))?;

        info!(section = %section, "generating section");
        let text = self.generator.generate(&prompt).await.inspect_err(|e| {
            warn!(section = %section, error = %e, "section generation failed");
        })?;

        let record = record.with_section(section, text.clone(), now());
        self.store.save(&record).await?;
        Ok(text)
    }

    /// Draft a topic outline. The caller decides whether to keep it.
    pub async fn generate_topics(&self, request: &TopicRequest) -> Result<String, DomainError> {
        if request.course_title.trim().is_empty() {
            return Err(DomainError::InvalidCourseDetails(
                "enter a course title first".to_string(),
            ));
        }
        let skill_context = request
            .skill_context
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("Skill Context: {}", s))
            .unwrap_or_default();
        let vars = template::vars([
            ("course_title", request.course_title.trim().to_string()),
            ("num_days", request.num_days.max(1).to_string()),
            ("skill_context", skill_context),
            (
                "special_requirements",
                request
                    .special_requirements
                    .clone()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| "None".to_string()),
            ),
            ("max_topics", request.max_topics().to_string()),
        ]);
        let outline = self.generator.generate(&render(COURSE_TOPICS, &vars)?).await?;
        info!(
            topics = parse_topics(&outline).len(),
            "topic outline generated"
        );
        Ok(outline)
    }
}

/// Variables for a section template, drawn from the saved details.
fn section_vars(section: &Section, d: &CourseDetails) -> template::TemplateVars {
    let mut vars = template::vars([
        ("course_title", d.title.clone()),
        ("course_topics", d.topics_markdown.clone()),
    ]);
    match section {
        Section::InstructionMethod(m) | Section::AssessmentMethod(m) => {
            vars.insert("method_name".to_string(), m.clone());
        }
        Section::LessonPlanNarrative => {
            vars.extend(template::vars([
                ("course_duration", d.course_hours.to_string()),
                ("instructional_duration", d.instructional_hours.to_string()),
                ("assessment_duration", d.assessment_hours.to_string()),
                ("instructional_methods", d.instructional_methods.join(", ")),
                ("assessment_methods", d.assessment_methods.join(", ")),
            ]));
        }
        _ => {}
    }
    vars
}

fn now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerator;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        record: Mutex<CourseRecord>,
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn load(&self) -> Result<CourseRecord, DomainError> {
            Ok(self.record.lock().await.clone())
        }
        async fn save(&self, record: &CourseRecord) -> Result<(), DomainError> {
            *self.record.lock().await = record.clone();
            Ok(())
        }
    }

    /// Records the last prompt it was given.
    #[derive(Default)]
    struct EchoGenerator {
        last_prompt: Mutex<String>,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
            *self.last_prompt.lock().await = prompt.to_string();
            Ok("drafted".to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Err(DomainError::Generation("API error 500".to_string()))
        }
    }

    fn details() -> CourseDetails {
        CourseDetails {
            title: "Data Literacy".to_string(),
            topics_markdown: "## Topic 1: Basics\n## Topic 2: Charts".to_string(),
            num_topics: 2,
            ..CourseDetails::default()
        }
    }

    #[tokio::test]
    async fn test_generate_requires_details() {
        let svc = CourseService::new(
            Arc::new(MockTextGenerator::with_delay(0)),
            Arc::new(MemoryStore::default()),
        );
        let err = svc.generate_section(&Section::AboutCourse).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCourseDetails(_)));
    }

    #[tokio::test]
    async fn test_save_details_rejects_invalid() {
        let store = Arc::new(MemoryStore::default());
        let svc = CourseService::new(Arc::new(MockTextGenerator::with_delay(0)), store.clone());
        let bad = CourseDetails {
            title: String::new(),
            ..details()
        };
        assert!(svc.save_details(bad).await.is_err());
        assert!(store.load().await.unwrap().details.is_none());
    }

    #[tokio::test]
    async fn test_generate_section_stores_text() {
        let store = Arc::new(MemoryStore::default());
        let generator = Arc::new(EchoGenerator::default());
        let svc = CourseService::new(generator.clone(), store.clone());
        let summary = svc.save_details(details()).await.unwrap();
        assert_eq!(summary.instructional_per_topic, 420);

        let section = Section::InstructionMethod("Case studies".to_string());
        assert_eq!(svc.generate_section(&section).await.unwrap(), "drafted");

        let prompt = generator.last_prompt.lock().await.clone();
        assert!(prompt.contains("Course Title: Data Literacy"));
        assert!(prompt.contains("Instructional Method: Case studies"));
        assert!(prompt.contains("## Topic 2: Charts"));
        let record = store.load().await.unwrap();
        assert_eq!(record.section_text(&section), Some("drafted"));
    }

    #[tokio::test]
    async fn test_prompt_override_used_and_validated() {
        let store = Arc::new(MemoryStore::default());
        let generator = Arc::new(EchoGenerator::default());
        let svc = CourseService::new(generator.clone(), store.clone());
        svc.save_details(details()).await.unwrap();

        let err = svc
            .set_prompt_override(&Section::AboutCourse, "Write about {method_name}".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingPlaceholder(ref n) if n == "method_name"));

        svc.set_prompt_override(&Section::AboutCourse, "Short blurb for {course_title}".to_string())
            .await
            .unwrap();
        svc.generate_section(&Section::AboutCourse).await.unwrap();
        assert_eq!(*generator.last_prompt.lock().await, "Short blurb for Data Literacy");

        svc.reset_prompt_override(&Section::AboutCourse).await.unwrap();
        assert_eq!(
            svc.template_for(&Section::AboutCourse).await.unwrap(),
            prompts::ABOUT_COURSE
        );
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_record_untouched() {
        let store = Arc::new(MemoryStore::default());
        let svc = CourseService::new(Arc::new(FailingGenerator), store.clone());
        svc.save_details(details()).await.unwrap();
        let before = store.load().await.unwrap();
        let err = svc.generate_section(&Section::JobRoles).await.unwrap_err();
        assert!(matches!(err, DomainError::Generation(_)));
        assert_eq!(store.load().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_generate_topics_outline() {
        let generator = Arc::new(EchoGenerator::default());
        let svc = CourseService::new(generator.clone(), Arc::new(MemoryStore::default()));
        let request = TopicRequest {
            course_title: "Sales".to_string(),
            num_days: 2,
            skill_context: Some("Customer engagement".to_string()),
            special_requirements: None,
        };
        svc.generate_topics(&request).await.unwrap();
        let prompt = generator.last_prompt.lock().await.clone();
        assert!(prompt.contains("Number of Days: 2"));
        assert!(prompt.contains("Skill Context: Customer engagement"));
        assert!(prompt.contains("Special Requirements: None"));
        assert!(prompt.contains("no more than 6 topics"));

        let empty = TopicRequest::default();
        assert!(svc.generate_topics(&empty).await.is_err());
    }

    #[test]
    fn test_max_topics_saturates() {
        let request = |num_days| TopicRequest {
            num_days,
            ..TopicRequest::default()
        };
        assert_eq!(request(0).max_topics(), 3);
        assert_eq!(request(2).max_topics(), 6);
        assert_eq!(request(i64::MAX).max_topics(), i64::MAX);
    }
}
