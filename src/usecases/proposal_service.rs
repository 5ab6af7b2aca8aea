//! Proposal service. Workbook in, Markdown course proposal and lesson plan out.

use super::lesson_plan_service::{LessonPlanFiles, safe_name, write_plan, write_text};
use crate::adapters::render::proposal_md;
use crate::domain::{CourseData, DomainError, LessonPlan};
use crate::ports::CourseSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

pub struct ProposalService {
    source: Arc<dyn CourseSource>,
    output_dir: PathBuf,
}

impl ProposalService {
    pub fn new(source: Arc<dyn CourseSource>, output_dir: PathBuf) -> Self {
        Self { source, output_dir }
    }

    pub async fn extract(&self, workbook: &Path) -> Result<CourseData, DomainError> {
        self.source.load(workbook).await
    }

    /// Write the proposal Markdown; returns its path.
    pub async fn write(&self, data: &CourseData) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| DomainError::Render(format!("Failed to create output dir: {}", e)))?;
        let path = self.output_dir.join(format!(
            "{}_Course_Proposal.md",
            safe_name(&data.particulars.course_title)
        ));
        write_text(&path, &proposal_md::to_markdown(data)).await?;
        info!(path = %path.display(), "course proposal written");
        Ok(path)
    }

    /// Lay out the workbook's own days and durations and write the lesson plan
    /// beside the proposal.
    pub async fn write_lesson_plan(
        &self,
        data: &CourseData,
    ) -> Result<(LessonPlan, LessonPlanFiles), DomainError> {
        let plan = LessonPlan::from_course_data(data)?;
        let files = write_plan(&self.output_dir, &plan).await?;
        Ok((plan, files))
    }
}
