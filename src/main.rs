//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use course_forge::adapters::ai::{MockTextGenerator, OpenAiAdapter};
use course_forge::adapters::persistence::RecordJson;
use course_forge::adapters::ui::tui::TuiInputPort;
use course_forge::adapters::workbook::CsvWorkbookSource;
use course_forge::ports::{CourseSource, InputPort, RecordStore, TextGenerator};
use course_forge::shared::config::AppConfig;
use course_forge::usecases::{AuditService, CourseService, LessonPlanService, ProposalService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    course_forge::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded; using defaults");
        AppConfig::default()
    });

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    let output_path = PathBuf::from(cfg.output_dir_or_default());
    tokio::fs::create_dir_all(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir: {}", e))?;
    info!(
        data = %data_path.display(),
        output = %output_path.display(),
        "directories"
    );

    // --- Text generation ---
    let generator: Arc<dyn TextGenerator> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "text generation enabled with OpenAI adapter"
        );
        Arc::new(
            OpenAiAdapter::new(
                cfg.ai_api_url_or_default(),
                cfg.ai_api_key().unwrap_or_default(),
                cfg.ai_model_or_default(),
            )
            .with_temperature(cfg.ai_temperature_or_default()),
        )
    } else {
        warn!("COURSE_FORGE_AI_API_KEY not set, using mock text generator");
        Arc::new(MockTextGenerator::new())
    };

    // --- Storage and workbook source ---
    let store: Arc<dyn RecordStore> = Arc::new(RecordJson::new(data_path.join("course.json")));
    let source: Arc<dyn CourseSource> = Arc::new(CsvWorkbookSource::new());

    // --- Services ---
    let course_service = Arc::new(CourseService::new(
        Arc::clone(&generator),
        Arc::clone(&store),
    ));
    let lesson_plan_service = Arc::new(LessonPlanService::new(
        Arc::clone(&store),
        output_path.clone(),
    ));
    let proposal_service = Arc::new(ProposalService::new(
        Arc::clone(&source),
        output_path.clone(),
    ));
    let audit_service = Arc::new(AuditService::new(
        Arc::clone(&source),
        Arc::clone(&store),
        output_path,
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        course_service,
        lesson_plan_service,
        proposal_service,
        audit_service,
    ));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
