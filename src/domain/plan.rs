//! A laid-out lesson plan ready for rendering.

use crate::domain::{
    CourseData, CourseDetails, DaySchedule, DomainError, ScheduleBudget, Topic, allocate,
    topics_or_placeholders,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub course_title: String,
    pub num_days: i64,
    pub instructional_hours: i64,
    pub assessment_hours: i64,
    pub instructional_methods: Vec<String>,
    pub assessment_methods: Vec<String>,
    pub topics: Vec<Topic>,
    /// Minutes per topic after the floor division.
    pub minutes_per_topic: i64,
    /// Instructional minutes left off the timetable by the floor division.
    pub unscheduled_minutes: i64,
    pub days: Vec<DaySchedule>,
    /// Generated narrative overview, when one has been drafted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl LessonPlan {
    /// Derive the budget from the entered hours and allocate the topic outline.
    pub fn from_details(details: &CourseDetails) -> Result<Self, DomainError> {
        let topics = topics_or_placeholders(&details.topics_markdown, details.num_topics);
        let budget = ScheduleBudget::from_hours(
            details.course_hours,
            details.instructional_hours,
            details.assessment_hours,
        )?;
        let days = allocate(
            &topics,
            &budget,
            &details.instructional_methods,
            &details.assessment_methods,
        )?;
        Ok(Self {
            course_title: details.title.clone(),
            num_days: budget.num_days,
            instructional_hours: details.instructional_hours,
            assessment_hours: details.assessment_hours,
            instructional_methods: details.instructional_methods.clone(),
            assessment_methods: details.assessment_methods.clone(),
            minutes_per_topic: budget.per_topic_minutes(topics.len()),
            unscheduled_minutes: budget.unscheduled_remainder(topics.len()),
            topics,
            days,
            narrative: None,
        })
    }

    /// Plan for an extracted workbook: one topic per learning outcome, the day
    /// count from the highest `day` column, and budgets summed from the
    /// outcome and assessment durations. The overview comes from the about text.
    pub fn from_course_data(data: &CourseData) -> Result<Self, DomainError> {
        let topics: Vec<Topic> = data
            .learning_outcomes
            .iter()
            .enumerate()
            .map(|(i, lo)| Topic {
                learning_outcome: lo.learning_outcome.clone(),
                ..Topic::new(i + 1, strip_topic_label(&lo.topic))
            })
            .collect();
        let num_days = data
            .learning_outcomes
            .iter()
            .map(|lo| lo.day)
            .max()
            .unwrap_or(1)
            .max(1);
        let budget = ScheduleBudget::new(
            num_days,
            total_minutes(data.learning_outcomes.iter().map(|lo| lo.duration_minutes))?,
            total_minutes(data.assessment_modes.iter().map(|am| am.duration_minutes))?,
        );

        let instructional_methods: Vec<String> =
            data.unique_methods().into_iter().map(str::to_string).collect();
        let mut assessment_methods: Vec<String> = Vec::new();
        for am in &data.assessment_modes {
            if !assessment_methods.contains(&am.mode) {
                assessment_methods.push(am.mode.clone());
            }
        }

        let days = allocate(&topics, &budget, &instructional_methods, &assessment_methods)?;
        Ok(Self {
            course_title: data.particulars.course_title.clone(),
            num_days,
            instructional_hours: budget.instructional_minutes / 60,
            assessment_hours: budget.assessment_minutes / 60,
            instructional_methods,
            assessment_methods,
            minutes_per_topic: budget.per_topic_minutes(topics.len()),
            unscheduled_minutes: budget.unscheduled_remainder(topics.len()),
            topics,
            days,
            narrative: None,
        }
        .with_narrative(Some(course_overview(&data.particulars.about_course))))
    }

    pub fn with_narrative(mut self, narrative: Option<String>) -> Self {
        self.narrative = narrative.filter(|n| !n.trim().is_empty());
        self
    }

    /// Metadata lines printed under the plan title.
    pub fn metadata_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Course Duration: {} Days (9:00 AM \u{2013} 6:00 PM daily)",
                self.num_days
            ),
            format!(
                "Total Training Hours: {} hours (excluding lunch breaks)",
                self.instructional_hours
            ),
            format!("Total Assessment Hours: {} hours", self.assessment_hours),
        ];
        if !self.instructional_methods.is_empty() {
            lines.push(format!(
                "Instructional Methods: {}",
                self.instructional_methods
                    .iter()
                    .map(|m| m.to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        if !self.assessment_methods.is_empty() && self.assessment_hours > 0 {
            lines.push(format!(
                "Assessment Methods: {}",
                self.assessment_methods.join(", ")
            ));
        }
        lines
    }
}

/// Sum of workbook durations; negative or overflowing totals are invalid.
fn total_minutes(durations: impl Iterator<Item = i64>) -> Result<i64, DomainError> {
    durations.into_iter().try_fold(0i64, |acc, d| {
        if d < 0 {
            return Err(DomainError::InvalidScheduleInput(format!(
                "negative duration in workbook: {}",
                d
            )));
        }
        acc.checked_add(d).ok_or_else(|| {
            DomainError::InvalidScheduleInput("workbook durations out of range".to_string())
        })
    })
}

/// `Topic 3: Charts` -> `Charts`. Other text is returned trimmed.
fn strip_topic_label(topic: &str) -> &str {
    let trimmed = topic.trim();
    let Some(rest) = trimmed
        .get(..5)
        .filter(|k| k.eq_ignore_ascii_case("topic"))
        .map(|_| trimmed[5..].trim_start())
    else {
        return trimmed;
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    match rest[digits..].strip_prefix(':') {
        Some(name) if digits > 0 && !name.trim().is_empty() => name.trim(),
        _ => trimmed,
    }
}

/// First substantive paragraph of the about text: at least 80 characters and
/// not a bullet. Falls back to the first 500 characters.
pub fn course_overview(about: &str) -> String {
    about
        .lines()
        .map(str::trim)
        .find(|p| p.chars().count() >= 80 && !p.starts_with("- "))
        .map(str::to_string)
        .unwrap_or_else(|| about.chars().take(500).collect())
}
