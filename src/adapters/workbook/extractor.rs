//! Implements CourseSource over a workbook exported as one CSV per sheet.
//!
//! `<dir>/<sheet name>.csv` for every sheet in `layout::ALL_SHEETS`.

use super::layout::*;
use super::sheet::Sheet;
use crate::domain::{
    AssessmentMode, CourseBackground, CourseData, CourseParticulars, CourseSummary, DomainError,
    InstructionMethod, LearningOutcome,
};
use crate::ports::CourseSource;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

fn addr(col: &str, row: usize) -> String {
    format!("{}{}", col, row)
}

/// Reads the course-proposal workbook from a directory of sheet CSVs.
#[derive(Debug, Default, Clone)]
pub struct CsvWorkbookSource;

impl CsvWorkbookSource {
    pub fn new() -> Self {
        Self
    }

    async fn read_sheet(dir: &Path, name: &str) -> Result<Sheet, DomainError> {
        let path = dir.join(format!("{}.csv", name));
        let bytes = match fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Extract(format!(
                    "missing sheet '{}' ({})",
                    name,
                    path.display()
                )));
            }
            Err(e) => {
                return Err(DomainError::Extract(format!(
                    "read {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        debug!(sheet = name, bytes = bytes.len(), "loaded sheet");
        Sheet::from_reader(name, bytes.as_slice())
    }
}

#[async_trait::async_trait]
impl CourseSource for CsvWorkbookSource {
    async fn load(&self, path: &Path) -> Result<CourseData, DomainError> {
        if !fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false) {
            return Err(DomainError::Extract(format!(
                "workbook directory not found: {}",
                path.display()
            )));
        }

        let mut sheets = HashMap::new();
        for name in ALL_SHEETS {
            sheets.insert(name, Self::read_sheet(path, name).await?);
        }
        let data = extract(&sheets)?;
        info!(
            title = %data.particulars.course_title,
            outcomes = data.learning_outcomes.len(),
            methods = data.instruction_methods.len(),
            assessments = data.assessment_modes.len(),
            "workbook extracted"
        );
        Ok(data)
    }
}

/// Build `CourseData` from loaded sheets.
pub fn extract(sheets: &HashMap<&str, Sheet>) -> Result<CourseData, DomainError> {
    let get = |name: &str| {
        sheets
            .get(name)
            .ok_or_else(|| DomainError::Extract(format!("missing sheet '{}'", name)))
    };
    let methodologies = get(SHEET_METHODOLOGIES)?;
    Ok(CourseData {
        particulars: extract_particulars(get(SHEET_PARTICULARS)?)?,
        background: extract_background(get(SHEET_BACKGROUND)?)?,
        learning_outcomes: extract_learning_outcomes(get(SHEET_INSTRUCTIONAL_DESIGN)?)?,
        instruction_methods: extract_instruction_methods(methodologies)?,
        assessment_modes: extract_assessment_modes(methodologies)?,
        summary: extract_summary(get(SHEET_SUMMARY)?)?,
    })
}

fn extract_particulars(ws: &Sheet) -> Result<CourseParticulars, DomainError> {
    let mut skills = Vec::new();
    for row in UNIQUE_SKILL_START_ROW..=UNIQUE_SKILL_MAX_ROW {
        match ws.cell(&addr(UNIQUE_SKILL_COL, row))? {
            Some(v) => skills.push(v.to_string()),
            None => break,
        }
    }
    if skills.is_empty() {
        skills.push("N/A".to_string());
    }

    Ok(CourseParticulars {
        training_provider: ws.text(CELL_TRAINING_PROVIDER)?,
        course_title: ws.text(CELL_COURSE_TITLE)?,
        course_type: ws.text(CELL_COURSE_TYPE)?,
        about_course: ws.text(CELL_ABOUT_COURSE)?,
        what_youll_learn: ws.text(CELL_WHAT_YOULL_LEARN)?,
        unique_skill_names: skills,
    })
}

fn extract_background(ws: &Sheet) -> Result<CourseBackground, DomainError> {
    Ok(CourseBackground {
        targeted_sectors: ws.text(CELL_TARGETED_SECTORS)?,
        performance_gaps: ws.text(CELL_PERFORMANCE_GAPS)?,
    })
}

fn extract_learning_outcomes(ws: &Sheet) -> Result<Vec<LearningOutcome>, DomainError> {
    let mut outcomes = Vec::new();
    let mut row = ID_DATA_START_ROW;
    while let Some(lo_num) = ws.cell(&addr(ID_COL_LO_NUM, row))? {
        // Topic cells hold the title on the first line and detail below it.
        let topic = ws
            .text(&addr(ID_COL_TOPIC, row))?
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        outcomes.push(LearningOutcome {
            day: ws.int(&addr(ID_COL_DAY, row))?,
            duration_minutes: ws.int(&addr(ID_COL_DURATION, row))?,
            lo_number: lo_num.to_string(),
            learning_outcome: ws.text(&addr(ID_COL_LO_TEXT, row))?,
            topic,
        });
        row += 1;
    }
    Ok(outcomes)
}

fn extract_instruction_methods(ws: &Sheet) -> Result<Vec<InstructionMethod>, DomainError> {
    let mut methods = Vec::new();
    let mut row = METH_DATA_START_ROW;
    while let Some(method) = ws.cell(&addr(METH_COL_METHOD, row))? {
        methods.push(InstructionMethod {
            day: ws.int(&addr(METH_COL_DAY, row))?,
            method: method.to_string(),
            duration_minutes: ws.int(&addr(METH_COL_DURATION, row))?,
            mode_of_training: ws.text(&addr(METH_COL_TRAINING_MODE, row))?,
        });
        row += 1;
    }
    Ok(methods)
}

fn extract_assessment_modes(ws: &Sheet) -> Result<Vec<AssessmentMode>, DomainError> {
    let mut modes = Vec::new();
    let mut row = METH_DATA_START_ROW;
    while let Some(mode) = ws.cell(&addr(ASSESS_COL_MODE, row))? {
        modes.push(AssessmentMode {
            day: ws.int(&addr(ASSESS_COL_DAY, row))?,
            mode: mode.to_string(),
            duration_minutes: ws.int(&addr(ASSESS_COL_DURATION, row))?,
            num_assessors: ws.int(&addr(ASSESS_COL_ASSESSORS, row))?,
            num_candidates: ws.int(&addr(ASSESS_COL_CANDIDATES, row))?,
        });
        row += 1;
    }
    Ok(modes)
}

fn extract_summary(ws: &Sheet) -> Result<CourseSummary, DomainError> {
    Ok(CourseSummary {
        total_course_duration: ws.text(SUMM_TOTAL_COURSE_DURATION)?,
        total_instructional_duration: ws.text(SUMM_TOTAL_INSTRUCTIONAL)?,
        total_assessment_duration: ws.text(SUMM_TOTAL_ASSESSMENT)?,
        mode_of_training: ws.text(SUMM_MODE_OF_TRAINING)?,
    })
}
