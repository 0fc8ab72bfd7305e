//! Finreport API server.
//!
//! Main entry point for the report generation service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finreport_api::{create_router, AppState};
use finreport_core::pdf::{PdfConverter, TemplateResources};
use finreport_core::report::{ReportContext, ReportRegistry, ReportService};
use finreport_core::template::{HandlebarsEngine, JsonLabelLoader};
use finreport_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finreport=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Load templates from disk
    let engine = HandlebarsEngine::from_dir(&config.templates.root)
        .context("failed to load report templates")?;
    info!(root = %config.templates.root, "templates loaded");

    let ctx = ReportContext {
        template_engine: Arc::new(engine),
        pdf_converter: pdf_converter(),
        resources: Arc::new(TemplateResources::new(&config.templates.root)),
        labels: Arc::new(JsonLabelLoader::new(&config.templates.root)),
    };

    // Register report handlers; duplicate names are fatal at startup
    let registry = ReportRegistry::with_default_reports()
        .context("failed to build report registry")?;
    info!(reports = registry.len(), "report registry built");

    let service = ReportService::new(registry, ctx);

    // Create router
    let app = create_router(AppState {
        service: Arc::new(service),
    });

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(feature = "chromium")]
fn pdf_converter() -> Arc<dyn PdfConverter> {
    info!("PDF conversion enabled (chromium)");
    Arc::new(finreport_core::pdf::ChromiumConverter::new())
}

#[cfg(not(feature = "chromium"))]
fn pdf_converter() -> Arc<dyn PdfConverter> {
    info!("PDF conversion disabled; HTML and CSV outputs remain available");
    Arc::new(finreport_core::pdf::DisabledConverter::new())
}
