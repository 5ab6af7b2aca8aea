//! Lesson plan service. Lays out the saved course and writes the documents.

use crate::adapters::render::lesson_plan;
use crate::domain::{CourseRecord, DomainError, LessonPlan, Section};
use crate::ports::RecordStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

/// Paths of the documents written for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPlanFiles {
    pub markdown: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
}

pub struct LessonPlanService {
    store: Arc<dyn RecordStore>,
    output_dir: PathBuf,
}

impl LessonPlanService {
    pub fn new(store: Arc<dyn RecordStore>, output_dir: PathBuf) -> Self {
        Self { store, output_dir }
    }

    /// Plan for the saved course, including any drafted narrative.
    pub async fn build_saved(&self) -> Result<LessonPlan, DomainError> {
        let record = self.store.load().await?;
        Self::build(&record)
    }

    pub fn build(record: &CourseRecord) -> Result<LessonPlan, DomainError> {
        let details = record.require_details()?;
        let plan = LessonPlan::from_details(details)?.with_narrative(
            record
                .section_text(&Section::LessonPlanNarrative)
                .map(str::to_string),
        );
        info!(
            days = plan.days.len(),
            topics = plan.topics.len(),
            minutes_per_topic = plan.minutes_per_topic,
            "lesson plan built"
        );
        Ok(plan)
    }

    /// Write Markdown, CSV and JSON renderings into the output directory.
    pub async fn write(&self, plan: &LessonPlan) -> Result<LessonPlanFiles, DomainError> {
        write_plan(&self.output_dir, plan).await
    }
}

/// `{title}_Lesson_Plan.{md,csv,json}` under `output_dir`.
pub(crate) async fn write_plan(
    output_dir: &Path,
    plan: &LessonPlan,
) -> Result<LessonPlanFiles, DomainError> {
    fs::create_dir_all(output_dir)
        .await
        .map_err(|e| DomainError::Render(format!("Failed to create output dir: {}", e)))?;

    let stem = format!("{}_Lesson_Plan", safe_name(&plan.course_title));
    let files = LessonPlanFiles {
        markdown: output_dir.join(format!("{}.md", stem)),
        csv: output_dir.join(format!("{}.csv", stem)),
        json: output_dir.join(format!("{}.json", stem)),
    };
    write_text(&files.markdown, &lesson_plan::to_markdown(plan)).await?;
    write_text(&files.csv, &lesson_plan::to_csv(plan)?).await?;
    write_text(&files.json, &lesson_plan::to_json(plan)?).await?;

    info!(path = %files.markdown.display(), "lesson plan written");
    Ok(files)
}

/// File-name-safe form of a course title: spaces become `_`, path separators are dropped.
pub fn safe_name(title: &str) -> String {
    let name: String = title
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if name.is_empty() {
        "Course".to_string()
    } else {
        name
    }
}

pub(crate) async fn write_text(path: &Path, text: &str) -> Result<(), DomainError> {
    fs::write(path, text)
        .await
        .map_err(|e| DomainError::Render(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::RecordJson;
    use crate::domain::CourseDetails;

    #[test]
    fn test_safe_name() {
        assert_eq!(safe_name("Data Literacy 101"), "Data_Literacy_101");
        assert_eq!(safe_name("A/B: Testing"), "AB_Testing");
        assert_eq!(safe_name("  "), "Course");
    }

    #[test]
    fn test_build_includes_narrative() {
        let record = CourseRecord::default()
            .with_details(
                CourseDetails {
                    title: "Sales".to_string(),
                    topics_markdown: "## Topic 1: Prospecting".to_string(),
                    num_topics: 1,
                    ..CourseDetails::default()
                },
                1,
            )
            .with_section(&Section::LessonPlanNarrative, "Overview text".to_string(), 2);
        let plan = LessonPlanService::build(&record).unwrap();
        assert_eq!(plan.narrative.as_deref(), Some("Overview text"));
        assert_eq!(plan.topics.len(), 1);
    }

    #[tokio::test]
    async fn test_write_creates_three_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(RecordJson::new(dir.path().join("course.json")));
        let record = CourseRecord::default().with_details(
            CourseDetails {
                title: "Data Literacy".to_string(),
                topics_markdown: "## Topic 1: Basics\n## Topic 2: Charts".to_string(),
                num_topics: 2,
                ..CourseDetails::default()
            },
            1,
        );
        store.save(&record).await.unwrap();

        let svc = LessonPlanService::new(store, dir.path().join("out"));
        let plan = svc.build_saved().await.unwrap();
        let files = svc.write(&plan).await.unwrap();

        assert!(files.markdown.ends_with("Data_Literacy_Lesson_Plan.md"));
        let md = std::fs::read_to_string(&files.markdown).unwrap();
        assert!(md.contains("# Lesson Plan: Data Literacy"));
        assert!(std::fs::read_to_string(&files.csv).unwrap().starts_with("Day,Timing"));
        assert!(files.json.exists());
    }
}
