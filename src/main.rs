//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use elective_advisor::adapters::advisor::{HttpAdvisorAdapter, MockAdvisorAdapter};
use elective_advisor::adapters::transcript::HtmlTranscriptWriter;
use elective_advisor::adapters::ui::tui::TuiInputPort;
use elective_advisor::domain::RenderMode;
use elective_advisor::ports::{AdvisorPort, InputPort, TranscriptPort};
use elective_advisor::shared::config::AppConfig;
use elective_advisor::usecases::AdvisorService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
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

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    let render_mode = cfg.render_mode().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to structured rendering");
        RenderMode::Structured
    });

    // --- Recommendation backend ---
    let advisor: Arc<dyn AdvisorPort> = if cfg.use_mock() {
        warn!("ADVISOR_USE_MOCK set, using mock advisor");
        Arc::new(MockAdvisorAdapter::with_delay(cfg.mock_delay_ms_or_default()))
    } else {
        let url = cfg.api_url_or_default();
        let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());
        info!(url = %url, timeout_secs = timeout.as_secs(), "recommendation backend");
        Arc::new(
            HttpAdvisorAdapter::new(url, timeout).map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    // --- Transcript view ---
    let sink: Option<Arc<dyn TranscriptPort>> = if cfg.export_transcript() {
        let data_dir = PathBuf::from(cfg.data_dir_or_default());
        let writer = HtmlTranscriptWriter::new(&data_dir, render_mode);
        info!(path = %writer.path().display(), mode = ?render_mode, "transcript export enabled");
        Some(Arc::new(writer) as Arc<dyn TranscriptPort>)
    } else {
        None
    };

    let service = Arc::new(AdvisorService::new(advisor, sink));

    elective_advisor::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(Arc::clone(&service)));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
