//! Quality audit: saved course record vs. a filled-in proposal workbook.

use crate::domain::{CourseData, CourseMode, CourseRecord, DomainError, Section, parse_topics};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Characters compared for generated prose.
const PROSE_COMPARE_CHARS: usize = 200;
/// Characters shown for mismatched prose.
const PROSE_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditIssue {
    pub field: String,
    pub expected: String,
    pub found: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub course_title: String,
    pub issues: Vec<AuditIssue>,
    /// Names of checks that passed, in check order.
    pub passes: Vec<String>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("All {} checks passed. No issues found.", self.passes.len())
        } else {
            format!(
                "{} issue(s) found, {} check(s) passed.",
                self.issues.len(),
                self.passes.len()
            )
        }
    }

    fn issue(&mut self, field: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) {
        self.issues.push(AuditIssue {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        });
    }

    fn pass(&mut self, name: &str) {
        self.passes.push(name.to_string());
    }

    /// Missing/extra comparison of two method lists, case-insensitive.
    fn compare_sets<'a>(
        &mut self,
        label: &str,
        expected: impl IntoIterator<Item = &'a String>,
        found: impl IntoIterator<Item = &'a String>,
    ) {
        let expected: BTreeSet<String> = expected.into_iter().map(|m| m.to_lowercase()).collect();
        let found: BTreeSet<String> = found.into_iter().map(|m| m.to_lowercase()).collect();
        let join = |set: Vec<&String>| set.into_iter().cloned().collect::<Vec<_>>().join(", ");
        let missing: Vec<&String> = expected.difference(&found).collect();
        let extra: Vec<&String> = found.difference(&expected).collect();

        let clean = missing.is_empty() && extra.is_empty();
        if !missing.is_empty() {
            self.issue(format!("{} (missing)", label), join(missing), "(not in CP)");
        }
        if !extra.is_empty() {
            self.issue(format!("{} (extra in CP)", label), "(not selected)", join(extra));
        }
        if clean {
            self.pass(label);
        }
    }

    /// Prefix comparison of generated prose; skipped when nothing was generated.
    fn compare_prose(&mut self, label: &str, expected: Option<&str>, found: &str) {
        let Some(expected) = expected.map(str::trim).filter(|e| !e.is_empty()) else {
            return;
        };
        let found = found.trim();
        let head = |s: &str, n: usize| s.chars().take(n).collect::<String>();
        if head(expected, PROSE_COMPARE_CHARS).to_lowercase()
            == head(found, PROSE_COMPARE_CHARS).to_lowercase()
        {
            self.pass(label);
        } else {
            let found = if found.is_empty() {
                "(empty)".to_string()
            } else {
                format!("{}...", head(found, PROSE_PREVIEW_CHARS))
            };
            self.issue(label, format!("{}...", head(expected, PROSE_PREVIEW_CHARS)), found);
        }
    }
}

/// Compare the saved record against extracted workbook data.
pub fn audit(record: &CourseRecord, data: &CourseData) -> Result<AuditReport, DomainError> {
    let details = record.require_details()?;
    let mut report = AuditReport {
        course_title: details.title.clone(),
        ..Default::default()
    };

    let cp_title = &data.particulars.course_title;
    if cp_title.trim().to_lowercase() == details.title.trim().to_lowercase() {
        report.pass("Course Title");
    } else {
        report.issue("Course Title", details.title.clone(), cp_title.clone());
    }

    if details.mode == CourseMode::Casl {
        let expected = details.unique_skill_name.as_deref().unwrap_or("").trim();
        let cp_skills = data.particulars.unique_skill_names.join(", ");
        if !expected.is_empty() && !cp_skills.to_lowercase().contains(&expected.to_lowercase()) {
            report.issue("Unique Skill Name", expected, cp_skills);
        } else {
            report.pass("Unique Skill Name");
        }
    }

    let cp_topic_count = data.learning_outcomes.len();
    if details.num_topics == cp_topic_count {
        report.pass("Number of Topics");
    } else {
        report.issue(
            "Number of Topics",
            details.num_topics.to_string(),
            cp_topic_count.to_string(),
        );
    }

    let cp_topics: Vec<&str> = data.learning_outcomes.iter().map(|lo| lo.topic.as_str()).collect();
    let mut topics_ok = true;
    for (i, topic) in parse_topics(&details.topics_markdown).iter().enumerate() {
        let needle = topic.name.to_lowercase();
        if !cp_topics.iter().any(|ct| ct.to_lowercase().contains(&needle)) {
            topics_ok = false;
            report.issue(
                format!("Topic {}", i + 1),
                topic.name.clone(),
                cp_topics.get(i).copied().unwrap_or("(missing)"),
            );
        }
    }
    if topics_ok {
        report.pass("Topic Names");
    }

    report.compare_sets(
        "Instructional Methods",
        &details.instructional_methods,
        data.instruction_methods.iter().map(|m| &m.method),
    );
    report.compare_sets(
        "Assessment Methods",
        &details.assessment_methods,
        data.assessment_modes.iter().map(|m| &m.mode),
    );

    report.compare_prose(
        "About This Course",
        record.section_text(&Section::AboutCourse),
        &data.particulars.about_course,
    );
    report.compare_prose(
        "What You'll Learn",
        record.section_text(&Section::WhatYoullLearn),
        &data.particulars.what_youll_learn,
    );
    report.compare_prose(
        "Background Part A",
        record.section_text(&Section::BackgroundPartA),
        &data.background.targeted_sectors,
    );
    report.compare_prose(
        "Background Part B",
        record.section_text(&Section::BackgroundPartB),
        &data.background.performance_gaps,
    );

    Ok(report)
}
