//! Quality audit report as Markdown.

use crate::domain::AuditReport;

/// `generated` is a display timestamp for the report header.
pub fn to_markdown(report: &AuditReport, generated: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!("# CP Quality Audit: {}\n\n", report.course_title));
    md.push_str(&format!("*Generated: {}*\n\n", generated));
    md.push_str(&format!("**Result:** {}\n\n", report.summary()));

    if !report.issues.is_empty() {
        md.push_str("## Issues\n\n");
        md.push_str("| Field | Expected | Found in CP |\n");
        md.push_str("|-------|----------|-------------|\n");
        for issue in &report.issues {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                issue.field,
                issue.expected.replace('|', "\\|").replace('\n', " "),
                issue.found.replace('|', "\\|").replace('\n', " ")
            ));
        }
        md.push('\n');
    }

    if !report.passes.is_empty() {
        md.push_str(&format!("## Passed Checks ({})\n\n", report.passes.len()));
        for pass in &report.passes {
            md.push_str(&format!("- [x] {}\n", pass));
        }
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuditIssue;

    #[test]
    fn test_issues_and_passes() {
        let report = AuditReport {
            course_title: "Data Literacy".to_string(),
            issues: vec![AuditIssue {
                field: "Course Title".to_string(),
                expected: "Data Literacy".to_string(),
                found: "Data\nLiteracy 101".to_string(),
            }],
            passes: vec!["Number of Topics".to_string()],
        };
        let md = to_markdown(&report, "2026-01-05 10:00 UTC");
        assert!(md.contains("**Result:** 1 issue(s) found, 1 check(s) passed."));
        assert!(md.contains("| Course Title | Data Literacy | Data Literacy 101 |"));
        assert!(md.contains("## Passed Checks (1)\n\n- [x] Number of Topics\n"));
    }

    #[test]
    fn test_clean_report_has_no_issue_table() {
        let report = AuditReport {
            course_title: "X".to_string(),
            issues: vec![],
            passes: vec!["Course Title".to_string()],
        };
        let md = to_markdown(&report, "now");
        assert!(!md.contains("## Issues"));
        assert!(md.contains("All 1 checks passed."));
    }
}
