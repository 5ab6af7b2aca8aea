//! Implements InputPort. Inquire-based interactive menu.
//!
//! One menu entry per page; a failed action prints its error and returns to
//! the menu so the user can retry.

use crate::adapters::ai::prompts::{ASSESSMENT_METHODS, INSTRUCTION_METHODS};
use crate::domain::{
    AuditReport, CourseDetails, CourseMode, DomainError, LessonPlan, Section, parse_topics,
};
use crate::ports::InputPort;
use crate::usecases::{
    AuditService, CourseService, LessonPlanService, ProposalService, TopicRequest,
};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, CustomType, MultiSelect, Select, Text};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const MENU_DETAILS: &str = "Course Details";
const MENU_GENERATE: &str = "Generate Section";
const MENU_PROMPTS: &str = "Edit Prompt Template";
const MENU_LESSON_PLAN: &str = "Lesson Plan";
const MENU_PROPOSAL: &str = "Proposal from Workbook";
const MENU_AUDIT: &str = "Quality Audit";
const MENU_QUIT: &str = "Quit";

/// Why a page stopped early.
enum PageError {
    Cancelled,
    Domain(DomainError),
}

impl From<DomainError> for PageError {
    fn from(e: DomainError) -> Self {
        PageError::Domain(e)
    }
}

impl From<InquireError> for PageError {
    fn from(e: InquireError) -> Self {
        match e {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                PageError::Cancelled
            }
            other => PageError::Domain(DomainError::Prompt(other.to_string())),
        }
    }
}

type PageResult = Result<(), PageError>;

/// Inquire theme for every prompt. Call once at startup.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightYellow))
        .with_selected_checkbox(Styled::new("[x]").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// Run `fut` behind a spinner with `message`.
async fn with_spinner<T>(message: &str, fut: impl Future<Output = T>) -> T {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    course: Arc<CourseService>,
    lesson_plan: Arc<LessonPlanService>,
    proposal: Arc<ProposalService>,
    audit: Arc<AuditService>,
}

impl TuiInputPort {
    pub fn new(
        course: Arc<CourseService>,
        lesson_plan: Arc<LessonPlanService>,
        proposal: Arc<ProposalService>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            course,
            lesson_plan,
            proposal,
            audit,
        }
    }

    async fn details_page(&self) -> PageResult {
        let saved = self.course.record().await?.details.unwrap_or_default();

        let mode = Select::new("Proposal type:", vec![CourseMode::Casl, CourseMode::Wsq])
            .with_starting_cursor(usize::from(saved.mode == CourseMode::Wsq))
            .prompt()?;
        let title = Text::new("Course title:")
            .with_default(&saved.title)
            .prompt()?;

        let course_hours = CustomType::<i64>::new("Course duration (hours):")
            .with_default(saved.course_hours)
            .with_help_message("8 hours per training day")
            .prompt()?;

        let skill_name = if mode == CourseMode::Casl {
            Some(
                Text::new("Unique skill name:")
                    .with_default(saved.unique_skill_name.as_deref().unwrap_or(""))
                    .prompt()?,
            )
        } else {
            None
        };
        let (tsc_ref_code, tsc_title) = if mode == CourseMode::Wsq {
            (
                Some(
                    Text::new("TSC reference code:")
                        .with_default(saved.tsc_ref_code.as_deref().unwrap_or(""))
                        .prompt()?,
                ),
                Some(
                    Text::new("TSC title:")
                        .with_default(saved.tsc_title.as_deref().unwrap_or(""))
                        .prompt()?,
                ),
            )
        } else {
            (None, None)
        };

        let topics_markdown = self
            .topics_prompt(&saved, &title, course_hours, skill_name.as_deref())
            .await?;
        let parsed = parse_topics(&topics_markdown).len();
        let num_topics = CustomType::<usize>::new("Number of topics:")
            .with_default(if parsed > 0 { parsed } else { saved.num_topics })
            .prompt()?;

        let instructional_hours = CustomType::<i64>::new("Instructional duration (hours):")
            .with_default(saved.instructional_hours)
            .prompt()?;
        let assessment_hours = CustomType::<i64>::new("Assessment duration (hours):")
            .with_default(saved.assessment_hours)
            .with_help_message(if mode == CourseMode::Casl {
                "0 for no assessment"
            } else {
                "WSQ courses need at least 1 hour"
            })
            .prompt()?;

        let instructional_methods = methods_prompt(
            "Instructional methods:",
            INSTRUCTION_METHODS,
            &saved.instructional_methods,
        )?;
        let assessment_methods = if assessment_hours > 0 {
            methods_prompt(
                "Assessment methods:",
                ASSESSMENT_METHODS,
                &saved.assessment_methods,
            )?
        } else {
            Vec::new()
        };

        let details = CourseDetails {
            mode,
            title,
            topics_markdown,
            course_hours,
            num_topics,
            instructional_hours,
            assessment_hours,
            instructional_methods,
            assessment_methods,
            unique_skill_name: skill_name.filter(|s| !s.trim().is_empty()),
            tsc_ref_code: tsc_ref_code.filter(|s| !s.trim().is_empty()),
            tsc_title: tsc_title.filter(|s| !s.trim().is_empty()),
        };
        let summary = self.course.save_details(details).await?;

        println!("Course details saved.");
        println!("  Duration per topic:        {} mins", summary.duration_per_topic);
        println!("  Instructional per topic:   {} mins", summary.instructional_per_topic);
        println!("  Assessment per topic:      {} mins", summary.assessment_per_topic);
        println!("  Instructional per method:  {} mins", summary.instructional_per_method);
        if let Some(per_method) = summary.assessment_per_method {
            println!("  Assessment per method:     {} mins", per_method);
        }
        Ok(())
    }

    async fn topics_prompt(
        &self,
        saved: &CourseDetails,
        title: &str,
        course_hours: i64,
        skill: Option<&str>,
    ) -> Result<String, PageError> {
        const KEEP: &str = "Keep saved topics";
        const AI: &str = "Generate topics with AI";
        const TYPE: &str = "Type topic names";
        const FILE: &str = "Load outline from a Markdown file";

        let mut options = vec![AI, TYPE, FILE];
        if !saved.topics_markdown.trim().is_empty() {
            options.insert(0, KEEP);
        }
        match Select::new("Course topics:", options).prompt()? {
            KEEP => Ok(saved.topics_markdown.clone()),
            AI => {
                let num_days = CustomType::<i64>::new("Number of days:")
                    .with_default((course_hours / 8).max(1))
                    .with_help_message("Typically 2-3 topics per day")
                    .prompt()?;
                let special = Text::new("Special requirements (optional):").prompt()?;
                let request = TopicRequest {
                    course_title: title.to_string(),
                    num_days,
                    skill_context: skill.map(str::to_string),
                    special_requirements: Some(special),
                };
                let outline = with_spinner(
                    "Generating course topics...",
                    self.course.generate_topics(&request),
                )
                .await?;
                println!("\n{}\n", outline);
                if Confirm::new("Use this outline?").with_default(true).prompt()? {
                    Ok(outline)
                } else {
                    Err(PageError::Cancelled)
                }
            }
            TYPE => {
                let mut lines = Vec::new();
                loop {
                    let name = Text::new(&format!("Topic {} (blank to finish):", lines.len() + 1))
                        .prompt()?;
                    if name.trim().is_empty() {
                        break;
                    }
                    lines.push(format!("## Topic {}: {}", lines.len() + 1, name.trim()));
                }
                Ok(lines.join("\n"))
            }
            _ => {
                let path = Text::new("Outline file:").prompt()?;
                tokio::fs::read_to_string(path.trim()).await.map_err(|e| {
                    PageError::Domain(DomainError::InvalidCourseDetails(format!(
                        "cannot read {}: {}",
                        path.trim(),
                        e
                    )))
                })
            }
        }
    }

    /// Section choice, expanding method sections over the saved methods.
    async fn section_prompt(&self, message: &str) -> Result<Section, PageError> {
        const INSTRUCTION: &str = "Instructional Method";
        const ASSESSMENT: &str = "Assessment Method";

        let mut options: Vec<String> = Section::FIXED.iter().map(Section::title).collect();
        options.push(INSTRUCTION.to_string());
        options.push(ASSESSMENT.to_string());
        let choice = Select::new(message, options).prompt()?;

        if let Some(section) = Section::FIXED.iter().find(|s| s.title() == choice) {
            return Ok(section.clone());
        }
        let record = self.course.record().await?;
        let details = record.details.unwrap_or_default();
        let methods = if choice == INSTRUCTION {
            details.instructional_methods
        } else {
            details.assessment_methods
        };
        if methods.is_empty() {
            return Err(DomainError::InvalidCourseDetails(format!(
                "no {} methods saved",
                choice.to_lowercase()
            ))
            .into());
        }
        let method = Select::new("Method:", methods).prompt()?;
        Ok(if choice == INSTRUCTION {
            Section::InstructionMethod(method)
        } else {
            Section::AssessmentMethod(method)
        })
    }

    async fn generate_page(&self) -> PageResult {
        let section = self.section_prompt("Section to generate:").await?;
        let text = with_spinner(
            &format!("Generating {}...", section.title()),
            self.course.generate_section(&section),
        )
        .await?;
        println!("\n## {}\n\n{}\n", section.title(), text);
        Ok(())
    }

    async fn prompts_page(&self) -> PageResult {
        const SHOW: &str = "Show template";
        const LOAD: &str = "Replace from file";
        const RESET: &str = "Reset to default";

        let section = self.section_prompt("Template to edit:").await?;
        let current = self.course.template_for(&section).await?;
        println!(
            "\nPlaceholders: {}\n",
            section
                .allowed_placeholders()
                .iter()
                .map(|p| format!("{{{}}}", p))
                .collect::<Vec<_>>()
                .join(", ")
        );
        match Select::new("Action:", vec![SHOW, LOAD, RESET]).prompt()? {
            SHOW => println!("{}\n", current),
            LOAD => {
                let path = Text::new("Template file:").prompt()?;
                let text = tokio::fs::read_to_string(path.trim()).await.map_err(|e| {
                    DomainError::InvalidCourseDetails(format!("cannot read {}: {}", path.trim(), e))
                })?;
                self.course.set_prompt_override(&section, text).await?;
                println!("Template saved.");
            }
            _ => {
                self.course.reset_prompt_override(&section).await?;
                println!("Template reset to default.");
            }
        }
        Ok(())
    }

    async fn lesson_plan_page(&self) -> PageResult {
        let plan = self.lesson_plan.build_saved().await?;
        print_plan(&plan);
        let files = self.lesson_plan.write(&plan).await?;
        println!("Written:");
        println!("  {}", files.markdown.display());
        println!("  {}", files.csv.display());
        println!("  {}", files.json.display());
        Ok(())
    }

    async fn proposal_page(&self) -> PageResult {
        let dir = workbook_prompt()?;
        let data = with_spinner("Extracting workbook...", self.proposal.extract(&dir)).await?;
        let path = self.proposal.write(&data).await?;
        println!(
            "Proposal for '{}' written to {}",
            data.particulars.course_title,
            path.display()
        );
        let (plan, files) = self.proposal.write_lesson_plan(&data).await?;
        print_plan(&plan);
        println!("Lesson plan written to {}", files.markdown.display());
        Ok(())
    }

    async fn audit_page(&self) -> PageResult {
        let dir = workbook_prompt()?;
        let report = with_spinner(
            "Extracting data and running audit...",
            self.audit.audit(&dir),
        )
        .await?;
        print_report(&report);
        if Confirm::new("Write audit report?")
            .with_default(!report.is_clean())
            .prompt()?
        {
            let path = self.audit.write_report(&report).await?;
            println!("Audit report written to {}", path.display());
        }
        Ok(())
    }
}

fn methods_prompt(
    message: &str,
    catalogue: &[&str],
    saved: &[String],
) -> Result<Vec<String>, PageError> {
    let defaults: Vec<usize> = catalogue
        .iter()
        .enumerate()
        .filter(|(_, m)| saved.iter().any(|s| s == *m))
        .map(|(i, _)| i)
        .collect();
    let picked = MultiSelect::new(message, catalogue.to_vec())
        .with_default(&defaults)
        .prompt()?;
    Ok(picked.into_iter().map(str::to_string).collect())
}

fn workbook_prompt() -> Result<PathBuf, PageError> {
    let dir = Text::new("Workbook directory (one CSV per sheet):").prompt()?;
    Ok(PathBuf::from(dir.trim()))
}

fn print_plan(plan: &LessonPlan) {
    println!("\nLesson Plan: {}", plan.course_title);
    for line in plan.metadata_lines() {
        println!("  {}", line);
    }
    if plan.unscheduled_minutes > 0 {
        println!(
            "  Note: {} instructional minute(s) left unscheduled",
            plan.unscheduled_minutes
        );
    }
    for day in &plan.days {
        println!("\nDay {}", day.day);
        for slot in &day.slots {
            println!(
                "  {:<22} {:>9}  {}",
                slot.time_range(),
                slot.duration_label(),
                slot.description()
            );
        }
    }
    println!();
}

fn print_report(report: &AuditReport) {
    println!("\n{}", report.summary());
    for issue in &report.issues {
        println!("  [!] {}", issue.field);
        println!("      Expected:    {}", issue.expected);
        println!("      Found in CP: {}", issue.found);
    }
    for pass in &report.passes {
        println!("  [ok] {}", pass);
    }
    println!();
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let menu = vec![
            MENU_DETAILS,
            MENU_GENERATE,
            MENU_PROMPTS,
            MENU_LESSON_PLAN,
            MENU_PROPOSAL,
            MENU_AUDIT,
            MENU_QUIT,
        ];
        loop {
            let choice = match Select::new("Main menu:", menu.clone()).prompt() {
                Ok(c) => c,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(DomainError::Prompt(e.to_string())),
            };
            let result = match choice {
                MENU_DETAILS => self.details_page().await,
                MENU_GENERATE => self.generate_page().await,
                MENU_PROMPTS => self.prompts_page().await,
                MENU_LESSON_PLAN => self.lesson_plan_page().await,
                MENU_PROPOSAL => self.proposal_page().await,
                MENU_AUDIT => self.audit_page().await,
                _ => return Ok(()),
            };
            match result {
                Ok(()) | Err(PageError::Cancelled) => {}
                Err(PageError::Domain(e)) => eprintln!("Error: {}\n", e),
            }
        }
    }
}
