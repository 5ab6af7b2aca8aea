//! Lesson plan documents: Markdown timetable, CSV timetable and JSON.

use crate::domain::{DomainError, LessonPlan};

/// Markdown pipes inside cell text would break the table.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Title, metadata lines, optional narrative, then one table per day.
pub fn to_markdown(plan: &LessonPlan) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Lesson Plan: {}\n\n", plan.course_title));
    for line in plan.metadata_lines() {
        md.push_str(&format!("{}  \n", line));
    }
    md.push('\n');

    if plan.unscheduled_minutes > 0 {
        md.push_str(&format!(
            "> {} instructional minute(s) are not scheduled after dividing evenly across {} topics.\n\n",
            plan.unscheduled_minutes,
            plan.topics.len()
        ));
    }

    if let Some(narrative) = &plan.narrative {
        md.push_str("## Course Overview\n\n");
        md.push_str(narrative.trim());
        md.push_str("\n\n");
    }

    for day in &plan.days {
        md.push_str(&format!("## Day {}\n\n", day.day));
        md.push_str("| Timing | Duration | Description | Methods |\n");
        md.push_str("|--------|----------|-------------|---------|\n");
        for slot in &day.slots {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                slot.time_range(),
                slot.duration_label(),
                cell(&slot.description()),
                cell(slot.methods.as_deref().unwrap_or(""))
            ));
        }
        md.push('\n');
    }
    md
}

/// One row per slot: `Day,Timing,Duration,Description,Methods`.
pub fn to_csv(plan: &LessonPlan) -> Result<String, DomainError> {
    let render_err = |e: csv::Error| DomainError::Render(format!("lesson plan CSV: {}", e));
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());
    wtr.write_record(["Day", "Timing", "Duration", "Description", "Methods"])
        .map_err(render_err)?;
    for day in &plan.days {
        for slot in &day.slots {
            wtr.write_record([
                day.day.to_string(),
                slot.time_range(),
                slot.duration_label(),
                slot.description(),
                slot.methods.clone().unwrap_or_default(),
            ])
            .map_err(render_err)?;
        }
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| DomainError::Render(format!("lesson plan CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| DomainError::Render(format!("lesson plan CSV: {}", e)))
}

pub fn to_json(plan: &LessonPlan) -> Result<String, DomainError> {
    serde_json::to_string_pretty(plan)
        .map_err(|e| DomainError::Render(format!("lesson plan JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseDetails;

    fn plan() -> LessonPlan {
        let details = CourseDetails {
            title: "Data Literacy".to_string(),
            topics_markdown: "## Topic 1: Basics | Terms\n## Topic 2: Charts\n## Topic 3: Stories"
                .to_string(),
            instructional_hours: 14,
            ..CourseDetails::default()
        };
        LessonPlan::from_details(&details).unwrap()
    }

    #[test]
    fn test_markdown_layout() {
        let md = to_markdown(&plan().with_narrative(Some("Day one covers basics.".to_string())));
        assert!(md.starts_with("# Lesson Plan: Data Literacy\n"));
        assert!(md.contains("Course Duration: 2 Days (9:00 AM \u{2013} 6:00 PM daily)"));
        assert!(md.contains("## Course Overview\n\nDay one covers basics."));
        assert!(md.contains("## Day 1\n"));
        assert!(md.contains("## Day 2\n"));
        assert!(md.contains(
            "| 9:00 AM \u{2013} 12:30 PM | 210 mins | T1: Basics \\| Terms | Interactive presentation, Discussions, Case studies |"
        ));
        assert!(md.contains("| 12:30 PM \u{2013} 1:15 PM | 45 mins | Lunch Break |  |"));
        assert!(!md.contains("not scheduled"));
    }

    #[test]
    fn test_markdown_notes_remainder() {
        let mut p = plan();
        p.unscheduled_minutes = 1;
        assert!(to_markdown(&p).contains("> 1 instructional minute(s) are not scheduled"));
    }

    #[test]
    fn test_csv_rows() {
        let p = plan();
        let csv = to_csv(&p).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Day,Timing,Duration,Description,Methods"));
        let slot_count: usize = p.days.iter().map(|d| d.slots.len()).sum();
        assert_eq!(csv.lines().count(), slot_count + 1);
        assert!(csv.contains(
            "2,4:00 PM \u{2013} 6:00 PM,120 mins,\"Assessment: Written Exam, Practical Exam\","
        ));
    }

    #[test]
    fn test_json_carries_slots() {
        let json = to_json(&plan()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["course_title"], "Data Literacy");
        assert_eq!(v["days"][0]["slots"][0]["kind"]["kind"], "topic");
        assert_eq!(v["days"][0]["slots"][1]["kind"]["kind"], "lunch");
        assert!(v.get("narrative").is_none());
    }
}
