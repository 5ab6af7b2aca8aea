//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/file types here. `CourseRecord` is the saved state that every page
//! action takes in and hands back updated.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Proposal flavour. CASL courses may run without assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseMode {
    #[default]
    Casl,
    Wsq,
}

impl fmt::Display for CourseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseMode::Casl => f.write_str("CASL"),
            CourseMode::Wsq => f.write_str("WSQ"),
        }
    }
}

/// Course parameters entered on the Course Details page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub mode: CourseMode,
    pub title: String,
    /// Topic outline in `## Topic N: name` Markdown.
    pub topics_markdown: String,
    pub course_hours: i64,
    /// Declared topic count; used when the outline has no headings.
    pub num_topics: usize,
    pub instructional_hours: i64,
    pub assessment_hours: i64,
    pub instructional_methods: Vec<String>,
    pub assessment_methods: Vec<String>,
    #[serde(default)]
    pub unique_skill_name: Option<String>,
    #[serde(default)]
    pub tsc_ref_code: Option<String>,
    #[serde(default)]
    pub tsc_title: Option<String>,
}

impl Default for CourseDetails {
    fn default() -> Self {
        Self {
            mode: CourseMode::Casl,
            title: String::new(),
            topics_markdown: String::new(),
            course_hours: 16,
            num_topics: 4,
            instructional_hours: 14,
            assessment_hours: 2,
            instructional_methods: vec![
                "Interactive presentation".to_string(),
                "Discussions".to_string(),
                "Case studies".to_string(),
            ],
            assessment_methods: vec!["Written Exam".to_string(), "Practical Exam".to_string()],
            unique_skill_name: None,
            tsc_ref_code: None,
            tsc_title: None,
        }
    }
}

impl CourseDetails {
    /// Checks applied before details are saved.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |msg: &str| Err(DomainError::InvalidCourseDetails(msg.to_string()));
        if self.title.trim().is_empty() || self.topics_markdown.trim().is_empty() {
            return invalid("enter both a course title and course topics");
        }
        if self.course_hours < 1 || self.instructional_hours < 1 {
            return invalid("course and instructional durations must be at least 1 hour");
        }
        if self.num_topics < 1 {
            return invalid("number of topics must be at least 1");
        }
        if self.assessment_hours < 0 {
            return invalid("assessment duration must not be negative");
        }
        if self.instructional_methods.is_empty() {
            return invalid("select at least one instructional method");
        }
        if self.mode == CourseMode::Wsq {
            if self.assessment_hours < 1 {
                return invalid("WSQ courses need at least 1 hour of assessment");
            }
            if self.assessment_methods.is_empty() {
                return invalid("WSQ courses need at least one assessment method");
            }
        }
        Ok(())
    }

    /// True when assessment is configured (hours and at least one method).
    pub fn has_assessment(&self) -> bool {
        self.assessment_hours > 0 && !self.assessment_methods.is_empty()
    }
}

/// Derived minute figures shown after saving details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationSummary {
    pub duration_per_topic: i64,
    pub instructional_per_topic: i64,
    pub assessment_per_topic: i64,
    pub instructional_per_method: i64,
    /// `None` when no assessment methods are selected.
    pub assessment_per_method: Option<i64>,
}

impl DurationSummary {
    pub fn from_details(d: &CourseDetails) -> Self {
        let per = |hours: i64, n: usize| -> i64 {
            if n == 0 {
                0
            } else {
                (hours as f64 * 60.0 / n as f64).round_ties_even() as i64
            }
        };
        Self {
            duration_per_topic: per(d.course_hours, d.num_topics),
            instructional_per_topic: per(d.instructional_hours, d.num_topics),
            assessment_per_topic: per(d.assessment_hours, d.num_topics),
            instructional_per_method: per(d.instructional_hours, d.instructional_methods.len()),
            assessment_per_method: (!d.assessment_methods.is_empty())
                .then(|| per(d.assessment_hours, d.assessment_methods.len())),
        }
    }
}

/// A narrative section drafted by the text generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    AboutCourse,
    WhatYoullLearn,
    BackgroundPartA,
    BackgroundPartB,
    MinimumEntryRequirement,
    JobRoles,
    LessonPlanNarrative,
    InstructionMethod(String),
    AssessmentMethod(String),
}

impl Section {
    /// Sections that need no extra argument, in menu order.
    pub const FIXED: [Section; 7] = [
        Section::AboutCourse,
        Section::WhatYoullLearn,
        Section::BackgroundPartA,
        Section::BackgroundPartB,
        Section::MinimumEntryRequirement,
        Section::JobRoles,
        Section::LessonPlanNarrative,
    ];

    /// Stable storage key.
    pub fn key(&self) -> String {
        match self {
            Section::AboutCourse => "about_course".to_string(),
            Section::WhatYoullLearn => "what_youll_learn".to_string(),
            Section::BackgroundPartA => "background_part_a".to_string(),
            Section::BackgroundPartB => "background_part_b".to_string(),
            Section::MinimumEntryRequirement => "minimum_entry_requirement".to_string(),
            Section::JobRoles => "job_roles".to_string(),
            Section::LessonPlanNarrative => "lesson_plan".to_string(),
            Section::InstructionMethod(m) => format!("instruction_method:{}", m),
            Section::AssessmentMethod(m) => format!("assessment_method:{}", m),
        }
    }

    /// Key shared by every section using the same prompt template.
    pub fn template_key(&self) -> &'static str {
        match self {
            Section::AboutCourse => "about_course",
            Section::WhatYoullLearn => "what_youll_learn",
            Section::BackgroundPartA => "background_part_a",
            Section::BackgroundPartB => "background_part_b",
            Section::MinimumEntryRequirement => "minimum_entry_requirement",
            Section::JobRoles => "job_roles",
            Section::LessonPlanNarrative => "lesson_plan",
            Section::InstructionMethod(_) => "instruction_method",
            Section::AssessmentMethod(_) => "assessment_method",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Section::AboutCourse => "About This Course".to_string(),
            Section::WhatYoullLearn => "What You'll Learn".to_string(),
            Section::BackgroundPartA => "Background Part A".to_string(),
            Section::BackgroundPartB => "Background Part B".to_string(),
            Section::MinimumEntryRequirement => "Minimum Entry Requirements".to_string(),
            Section::JobRoles => "Job Roles".to_string(),
            Section::LessonPlanNarrative => "Lesson Plan".to_string(),
            Section::InstructionMethod(m) => format!("Instructional Method: {}", m),
            Section::AssessmentMethod(m) => format!("Assessment Method: {}", m),
        }
    }

    /// Placeholders a template for this section may use.
    pub fn allowed_placeholders(&self) -> &'static [&'static str] {
        match self {
            Section::InstructionMethod(_) | Section::AssessmentMethod(_) => {
                &["course_title", "course_topics", "method_name"]
            }
            Section::LessonPlanNarrative => &[
                "course_title",
                "course_topics",
                "course_duration",
                "instructional_duration",
                "assessment_duration",
                "instructional_methods",
                "assessment_methods",
            ],
            _ => &["course_title", "course_topics"],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Generated text for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSection {
    pub text: String,
    /// Unix seconds.
    pub generated_at: i64,
}

/// The saved course record. Page actions consume one and return the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub details: Option<CourseDetails>,
    /// Keyed by [`Section::key`].
    #[serde(default)]
    pub sections: BTreeMap<String, GeneratedSection>,
    /// Keyed by [`Section::template_key`].
    #[serde(default)]
    pub prompt_overrides: BTreeMap<String, String>,
    #[serde(default)]
    pub updated_at: i64,
}

impl CourseRecord {
    pub fn with_details(mut self, details: CourseDetails, at: i64) -> Self {
        self.details = Some(details);
        self.updated_at = at;
        self
    }

    pub fn with_section(mut self, section: &Section, text: String, at: i64) -> Self {
        self.sections.insert(
            section.key(),
            GeneratedSection {
                text,
                generated_at: at,
            },
        );
        self.updated_at = at;
        self
    }

    pub fn with_prompt_override(mut self, section: &Section, template: String, at: i64) -> Self {
        self.prompt_overrides
            .insert(section.template_key().to_string(), template);
        self.updated_at = at;
        self
    }

    pub fn without_prompt_override(mut self, section: &Section, at: i64) -> Self {
        self.prompt_overrides.remove(section.template_key());
        self.updated_at = at;
        self
    }

    pub fn section_text(&self, section: &Section) -> Option<&str> {
        self.sections.get(&section.key()).map(|s| s.text.as_str())
    }

    pub fn prompt_override(&self, section: &Section) -> Option<&str> {
        self.prompt_overrides
            .get(section.template_key())
            .map(String::as_str)
    }

    /// Details, or `InvalidCourseDetails` when none have been saved yet.
    pub fn require_details(&self) -> Result<&CourseDetails, DomainError> {
        self.details.as_ref().ok_or_else(|| {
            DomainError::InvalidCourseDetails(
                "enter course details first on the Course Details page".to_string(),
            )
        })
    }
}
