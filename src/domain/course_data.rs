//! Data extracted from a course-proposal workbook.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseParticulars {
    pub training_provider: String,
    pub course_title: String,
    pub course_type: String,
    pub about_course: String,
    pub what_youll_learn: String,
    pub unique_skill_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseBackground {
    pub targeted_sectors: String,
    pub performance_gaps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningOutcome {
    pub day: i64,
    pub duration_minutes: i64,
    pub lo_number: String,
    pub learning_outcome: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionMethod {
    pub day: i64,
    pub method: String,
    pub duration_minutes: i64,
    pub mode_of_training: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentMode {
    pub day: i64,
    pub mode: String,
    pub duration_minutes: i64,
    pub num_assessors: i64,
    pub num_candidates: i64,
}

/// Totals as written in the workbook (free text such as `14 hour 0 minutes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub total_course_duration: String,
    pub total_instructional_duration: String,
    pub total_assessment_duration: String,
    pub mode_of_training: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseData {
    pub particulars: CourseParticulars,
    pub background: CourseBackground,
    pub learning_outcomes: Vec<LearningOutcome>,
    pub instruction_methods: Vec<InstructionMethod>,
    pub assessment_modes: Vec<AssessmentMode>,
    pub summary: CourseSummary,
}

impl CourseData {
    /// Instruction methods without duplicates, first occurrence order.
    pub fn unique_methods(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for im in &self.instruction_methods {
            if !seen.contains(&im.method.as_str()) {
                seen.push(&im.method);
            }
        }
        seen
    }
}
