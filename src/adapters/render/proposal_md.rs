//! Course proposal as Markdown, from extracted workbook data.

use crate::domain::CourseData;

pub fn to_markdown(data: &CourseData) -> String {
    let p = &data.particulars;
    let skills = p.unique_skill_names.join(", ");
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", p.course_title));
    md.push_str(&format!("**Training Provider:** {}\n", p.training_provider));
    md.push_str(&format!("**Course Type:** {}\n", p.course_type));
    md.push_str(&format!("**Unique Skill:** {}\n\n---\n\n", skills));

    md.push_str("## Section 1: Course Particulars\n\n");
    md.push_str(&format!(
        "**Name of Registered Training Provider:** {}\n\n",
        p.training_provider
    ));
    md.push_str(&format!("**Course Title:** {}\n\n", p.course_title));
    md.push_str(&format!("**Course Type:** {}\n\n", p.course_type));
    md.push_str(&format!("### About This Course\n\n{}\n\n", p.about_course));
    md.push_str(&format!("### What You Will Learn\n\n{}\n\n", p.what_youll_learn));
    md.push_str(&format!("**Unique Skill Name:** {}\n\n", skills));

    md.push_str("---\n\n## Section 2: Course Background\n\n");
    md.push_str(&format!("{}\n\n", data.background.targeted_sectors));
    if !data.background.performance_gaps.is_empty() {
        md.push_str(&format!("{}\n\n", data.background.performance_gaps));
    }

    md.push_str("---\n\n## Section 3: Instructional Design\n\n");
    md.push_str("### Learning Outcomes\n\n");
    md.push_str("| Day | Duration (min) | LO# | Learning Outcome | Topic |\n");
    md.push_str("|-----|---------------|-----|------------------|-------|\n");
    for lo in &data.learning_outcomes {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            lo.day, lo.duration_minutes, lo.lo_number, lo.learning_outcome, lo.topic
        ));
    }
    md.push('\n');

    md.push_str("### Instruction Methods\n\n");
    md.push_str("| Day | Method | Duration (min) | Mode of Training |\n");
    md.push_str("|-----|--------|---------------|------------------|\n");
    for im in &data.instruction_methods {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            im.day, im.method, im.duration_minutes, im.mode_of_training
        ));
    }
    md.push('\n');

    md.push_str("---\n\n## Section 4: Assessment\n\n");
    md.push_str("| Day | Mode of Assessment | Duration (min) | # Assessors | # Candidates |\n");
    md.push_str("|-----|-------------------|---------------|------------|-------------|\n");
    for am in &data.assessment_modes {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            am.day, am.mode, am.duration_minutes, am.num_assessors, am.num_candidates
        ));
    }
    md.push('\n');

    md.push_str("---\n\n## Summary\n\n");
    md.push_str("### (1) Topics covered in this course\n\n");
    for lo in &data.learning_outcomes {
        md.push_str(&format!("- {}\n", lo.topic));
    }
    md.push('\n');

    md.push_str("### (2) Instructional methods\n\n");
    md.push_str(&format!("{}\n\n", data.unique_methods().join(", ")));

    md.push_str("### (3) Duration for each topic\n\n");
    md.push_str("| Topic | Duration (min) |\n|-------|---------------|\n");
    for lo in &data.learning_outcomes {
        md.push_str(&format!("| {} | {} |\n", lo.topic, lo.duration_minutes));
    }
    md.push('\n');

    let s = &data.summary;
    md.push_str("### Course Totals\n\n");
    md.push_str(&format!("- **Total Course Duration:** {}\n", s.total_course_duration));
    md.push_str(&format!(
        "- **Total Instructional Duration:** {}\n",
        s.total_instructional_duration
    ));
    md.push_str(&format!(
        "- **Total Assessment Duration:** {}\n",
        s.total_assessment_duration
    ));
    md.push_str(&format!("- **Mode of Training:** {}\n", s.mode_of_training));
    md
}
