//! Audit service. Checks a filled-in workbook against the saved course.

use super::lesson_plan_service::{safe_name, write_text};
use crate::adapters::render::audit_md;
use crate::domain::{AuditReport, DomainError, audit};
use crate::ports::{CourseSource, RecordStore};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

pub struct AuditService {
    source: Arc<dyn CourseSource>,
    store: Arc<dyn RecordStore>,
    output_dir: PathBuf,
}

impl AuditService {
    pub fn new(
        source: Arc<dyn CourseSource>,
        store: Arc<dyn RecordStore>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            store,
            output_dir,
        }
    }

    pub async fn audit(&self, workbook: &Path) -> Result<AuditReport, DomainError> {
        let record = self.store.load().await?;
        // Fail on missing details before touching the workbook.
        record.require_details()?;
        let data = self.source.load(workbook).await?;
        let report = audit::audit(&record, &data)?;
        info!(
            issues = report.issues.len(),
            passes = report.passes.len(),
            "audit complete"
        );
        Ok(report)
    }

    pub async fn write_report(&self, report: &AuditReport) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| DomainError::Render(format!("Failed to create output dir: {}", e)))?;
        let path = self.output_dir.join(format!(
            "{}_CP_Audit_Report.md",
            safe_name(&report.course_title)
        ));
        let generated = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        write_text(&path, &audit_md::to_markdown(report, &generated)).await?;
        info!(path = %path.display(), "audit report written");
        Ok(path)
    }
}
