//! Sri Maa app composition root.
//!
//! Loads configuration, initializes logging, populates the content store from
//! the fixture source, and runs the optional startup services under a bounded
//! timeout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use srimaa_content::config::Config;
use srimaa_content::services::{run_startup_tasks, StartupTask};
use srimaa_content::source::{decode_catalog, ContentSource, FixtureSource};
use srimaa_content::AppContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sri Maa content store");
    tracing::info!("Feed limit: {}", config.feed_limit);
    tracing::info!("Feed sort: {}", config.feed_sort.as_str());

    // Populate the store from the static fixture
    let mut ctx = AppContext::new(config.clone());
    let source = FixtureSource::new();
    let report = ctx.store.initialize(&source).await?;

    if report.total_dropped() > 0 || report.total_duplicates() > 0 {
        tracing::warn!(
            dropped = report.total_dropped(),
            duplicates = report.total_duplicates(),
            "Some fixture records were dropped"
        );
    }
    for (collection, count) in ctx.store.counts() {
        tracing::info!(collection = collection.as_str(), count, "Collection ready");
    }
    if ctx.store.current_saying().is_none() {
        tracing::warn!("No saying of the day in source");
    }

    let feed = srimaa_content::query::recent_posts(
        ctx.store.posts(),
        config.feed_limit,
        config.feed_sort,
    );
    tracing::info!(posts = feed.len(), "Home feed prepared");

    // Startup services stay disabled until a real backend exists; the env
    // flags opt them in under the configured per-task budget.
    let sync_task = if config.enable_sync {
        StartupTask::enabled("sync", async {
            // Dry-run sync: fetch and decode the payload end to end.
            let source = FixtureSource::new();
            let payload = source.fetch().await?;
            decode_catalog(&payload)?;
            Ok(())
        })
    } else {
        StartupTask::disabled("sync")
    };

    let notifications_task = if config.enable_notifications {
        StartupTask::enabled("notifications", async { Ok(()) })
    } else {
        StartupTask::disabled("notifications")
    };

    let outcomes = run_startup_tasks(
        vec![sync_task, notifications_task],
        config.startup_timeout,
    )
    .await;

    for (name, outcome) in &outcomes {
        tracing::info!(task = %name, outcome = ?outcome, "Startup service outcome");
    }

    tracing::info!("Content store ready");

    Ok(())
}
