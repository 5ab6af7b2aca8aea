//! End-to-end page workflows against the mock generator and temp directories.

use course_forge::adapters::ai::MockTextGenerator;
use course_forge::adapters::persistence::RecordJson;
use course_forge::adapters::workbook::CsvWorkbookSource;
use course_forge::adapters::workbook::layout::*;
use course_forge::domain::{CourseDetails, CourseMode, DomainError, Section, parse_topics};
use course_forge::ports::{CourseSource, RecordStore, TextGenerator};
use course_forge::usecases::{
    AuditService, CourseService, LessonPlanService, ProposalService, TopicRequest,
};
use std::path::Path;
use std::sync::Arc;

struct Harness {
    _dir: tempfile::TempDir,
    workbook: std::path::PathBuf,
    store: Arc<dyn RecordStore>,
    course: CourseService,
    lesson_plan: LessonPlanService,
    proposal: ProposalService,
    audit: AuditService,
}

fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output");
    let generator: Arc<dyn TextGenerator> = Arc::new(MockTextGenerator::with_delay(0));
    let store: Arc<dyn RecordStore> = Arc::new(RecordJson::new(dir.path().join("data/course.json")));
    let source: Arc<dyn CourseSource> = Arc::new(CsvWorkbookSource::new());
    Harness {
        workbook: dir.path().join("workbook"),
        course: CourseService::new(generator, Arc::clone(&store)),
        lesson_plan: LessonPlanService::new(Arc::clone(&store), out.clone()),
        proposal: ProposalService::new(Arc::clone(&source), out.clone()),
        audit: AuditService::new(source, Arc::clone(&store), out),
        store,
        _dir: dir,
    }
}

fn write_sheet(dir: &Path, name: &str, csv: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(format!("{}.csv", name)), csv).unwrap();
}

/// A workbook matching `details()`.
fn write_workbook(dir: &Path, title: &str) {
    let mut particulars = format!(
        ",,\n,,Acme Training\n,,{}\n,,Short Course\n,,\n,,About the course.\n,,You will learn.\n,,\n,,\n",
        title
    );
    particulars.push_str(",,Data Analysis\n");
    write_sheet(dir, SHEET_PARTICULARS, &particulars);
    write_sheet(
        dir,
        SHEET_BACKGROUND,
        ",\n,\n,\n,Retail and logistics\n,\n,\n,\n,Reporting gaps\n",
    );

    let mut design = ",\n".repeat(14);
    design.push_str(",1,420,LO1,Explain data,\"Topic 1: Data Basics\nDetails\"\n");
    design.push_str(",2,420,LO2,Build charts,Topic 2: Charts\n");
    write_sheet(dir, SHEET_INSTRUCTIONAL_DESIGN, &design);

    let mut methods = ",\n".repeat(6);
    methods.push_str(",1,Interactive presentation,120,Classroom,,,,,2,Written Exam,60,1,20\n");
    methods.push_str(",1,Discussions,120,Classroom,,,,,2,Practical Exam,60,1,20\n");
    methods.push_str(",2,Case studies,120,Classroom,,,,,,,,,\n");
    write_sheet(dir, SHEET_METHODOLOGIES, &methods);

    write_sheet(
        dir,
        SHEET_SUMMARY,
        ",\n,\n,,,,,,16 hours\n,,,,,,14 hours,,2 hours,,Classroom\n",
    );
}

fn details() -> CourseDetails {
    CourseDetails {
        mode: CourseMode::Casl,
        title: "Data Literacy".to_string(),
        topics_markdown: "## Topic 1: Data Basics\n- Explain data\n\n## Topic 2: Charts\n- Build charts"
            .to_string(),
        num_topics: 2,
        unique_skill_name: Some("Data Analysis".to_string()),
        ..CourseDetails::default()
    }
}

#[tokio::test]
async fn course_details_to_lesson_plan_documents() {
    let h = harness();
    h.course.save_details(details()).await.unwrap();
    h.course
        .generate_section(&Section::LessonPlanNarrative)
        .await
        .unwrap();

    let plan = h.lesson_plan.build_saved().await.unwrap();
    assert_eq!(plan.num_days, 2);
    assert_eq!(plan.minutes_per_topic, 420);
    assert!(plan.narrative.as_deref().unwrap().contains("Data Literacy"));

    let files = h.lesson_plan.write(&plan).await.unwrap();
    let md = std::fs::read_to_string(&files.markdown).unwrap();
    assert!(md.contains("## Day 2"));
    assert!(md.contains("T2: Charts (Cont'd)"));
    assert!(md.contains("Assessment: Written Exam, Practical Exam"));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&files.json).unwrap()).unwrap();
    assert_eq!(json["days"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn lesson_plan_requires_details() {
    let h = harness();
    assert!(matches!(
        h.lesson_plan.build_saved().await,
        Err(DomainError::InvalidCourseDetails(_))
    ));
}

#[tokio::test]
async fn generated_topics_feed_the_outline() {
    let h = harness();
    let outline = h
        .course
        .generate_topics(&TopicRequest {
            course_title: "Data Literacy".to_string(),
            num_days: 2,
            ..TopicRequest::default()
        })
        .await
        .unwrap();
    let topics = parse_topics(&outline);
    assert_eq!(topics.len(), 4);

    let d = CourseDetails {
        topics_markdown: outline,
        num_topics: topics.len(),
        ..details()
    };
    h.course.save_details(d).await.unwrap();
    let plan = h.lesson_plan.build_saved().await.unwrap();
    assert_eq!(plan.topics.len(), 4);
    assert_eq!(plan.minutes_per_topic, 210);
}

#[tokio::test]
async fn record_survives_a_new_store() {
    let h = harness();
    h.course.save_details(details()).await.unwrap();
    h.course.generate_section(&Section::AboutCourse).await.unwrap();

    let reopened = RecordJson::new(h._dir.path().join("data/course.json"));
    let record = reopened.load().await.unwrap();
    assert_eq!(record, h.store.load().await.unwrap());
    assert!(record.section_text(&Section::AboutCourse).is_some());
}

#[tokio::test]
async fn workbook_to_proposal() {
    let h = harness();
    write_workbook(&h.workbook, "Data Literacy");
    let data = h.proposal.extract(&h.workbook).await.unwrap();
    assert_eq!(data.particulars.training_provider, "Acme Training");
    assert_eq!(data.learning_outcomes[0].topic, "Topic 1: Data Basics");
    assert_eq!(data.assessment_modes.len(), 2);
    assert_eq!(data.summary.total_assessment_duration, "2 hours");

    let path = h.proposal.write(&data).await.unwrap();
    let md = std::fs::read_to_string(path).unwrap();
    assert!(md.contains("Interactive presentation, Discussions, Case studies"));
    assert!(md.contains("- **Mode of Training:** Classroom"));
}

#[tokio::test]
async fn workbook_to_lesson_plan() {
    let h = harness();
    write_workbook(&h.workbook, "Data Literacy");
    let data = h.proposal.extract(&h.workbook).await.unwrap();
    let proposal = h.proposal.write(&data).await.unwrap();
    let (plan, files) = h.proposal.write_lesson_plan(&data).await.unwrap();

    assert_eq!(files.markdown.parent(), proposal.parent());
    assert_eq!(plan.num_days, 2);
    assert_eq!(plan.narrative.as_deref(), Some("About the course."));
    let md = std::fs::read_to_string(&files.markdown).unwrap();
    assert!(md.starts_with("# Lesson Plan: Data Literacy"));
    assert!(md.contains("## Course Overview\n\nAbout the course."));
    assert!(md.contains("T2: Charts (Cont'd)"));
    assert!(md.contains(
        "| 4:00 PM \u{2013} 6:00 PM | 120 mins | Assessment: Written Exam, Practical Exam |"
    ));
}

#[tokio::test]
async fn audit_matching_workbook_passes() {
    let h = harness();
    h.course.save_details(details()).await.unwrap();
    write_workbook(&h.workbook, "Data Literacy");

    let report = h.audit.audit(&h.workbook).await.unwrap();
    assert!(report.is_clean(), "{:?}", report.issues);
    assert_eq!(report.passes.len(), 6);
}

#[tokio::test]
async fn audit_flags_title_and_writes_report() {
    let h = harness();
    h.course.save_details(details()).await.unwrap();
    h.course.generate_section(&Section::AboutCourse).await.unwrap();
    write_workbook(&h.workbook, "Data Literacy Advanced");

    let report = h.audit.audit(&h.workbook).await.unwrap();
    let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(fields, vec!["Course Title", "About This Course"]);

    let path = h.audit.write_report(&report).await.unwrap();
    let md = std::fs::read_to_string(path).unwrap();
    assert!(md.contains("2 issue(s) found"));
}

#[tokio::test]
async fn audit_missing_workbook_is_extract_error() {
    let h = harness();
    h.course.save_details(details()).await.unwrap();
    assert!(matches!(
        h.audit.audit(&h.workbook).await,
        Err(DomainError::Extract(_))
    ));
}
