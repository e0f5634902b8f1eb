use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eduhire::config::Config;
use eduhire::dashboard::completeness::compute_completeness_report;
use eduhire::dashboard::summary::{build_summary, DashboardDefaults};
use eduhire::state::AppState;
use eduhire::storage::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting eduhire v{}", env!("CARGO_PKG_VERSION"));

    let store = FileStore::open(&config.data_dir)?;
    let app = AppState::new(Arc::new(store), &config);

    let Some(session) = app.sessions.restore() else {
        info!("Nobody is signed in at {}", config.data_dir.display());
        return Ok(());
    };

    let Some(record) = app.sessions.current_user(&session) else {
        info!("Record for {} disappeared; nothing to show", session.email());
        return Ok(());
    };

    let summary = build_summary(&record, &DashboardDefaults::default());
    let completeness = compute_completeness_report(&record.profile);
    let resume = app.studio.generate(&session).await;

    let report = json!({
        "dashboard": summary,
        "completeness": completeness,
        "resume": resume,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
