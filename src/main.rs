//! dashboard-probe
//!
//! Runs the dashboard's periodic paths headlessly against a live backend.
//!
//! Usage:
//!   dashboard-probe [watch]   stats refresh, session poll and inactivity timer until Ctrl+C
//!   dashboard-probe stats     fetch /api/stats once
//!   dashboard-probe session   check the session once
//!
//! Configuration comes from `dashboard.toml` in DASHBOARD_CONFIG_DIR and
//! DASHBOARD_* environment variables (DASHBOARD_BASE_URL, DASHBOARD_SESSION_COOKIE, ...).

use std::cell::RefCell;
use std::future::Future;
use std::process;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use store_dashboard::api::http::HttpApi;
use store_dashboard::api::DashboardApi;
use store_dashboard::config::{self, DashboardConfig};
use store_dashboard::controller::Dashboard;
use store_dashboard::logging;
use store_dashboard::page::MemoryPage;
use tokio::signal;
use tokio::task::LocalSet;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

const STAT_LABELS: [&str; 4] = [
    "total_orders",
    "pending_orders",
    "completed_orders",
    "total_revenue",
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!(
        "dashboard-probe v{} ({})",
        env!("DASHBOARD_VERSION"),
        env!("DASHBOARD_GIT_SHA")
    );

    let config = config::load_config()?;
    tracing::info!("Configuration loaded, backend: {}", config.base_url);

    let api = HttpApi::from_config(&config)?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "watch".to_string());
    match command.as_str() {
        "stats" => {
            let stats = api.stats().await?;
            for (label, value) in STAT_LABELS.iter().zip(stats.positional()) {
                println!("{label}: {value}");
            }
        }
        "session" => {
            let check = api.check_session().await?;
            println!("valid: {}", check.valid);
        }
        "watch" => {
            LocalSet::new().run_until(watch(config, api)).await;
        }
        other => {
            eprintln!("Error: Unknown command '{}'", other);
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: dashboard-probe [watch|stats|session]");
}

async fn watch(config: DashboardConfig, api: HttpApi) {
    let page = Rc::new(MemoryPage::new().with_stat_slots(STAT_LABELS.len()));
    let dashboard = Rc::new(Dashboard::new(page.clone(), Rc::new(api), config.clone()));
    let shutdown = CancellationToken::new();

    // First refresh right away; the timer then takes over.
    dashboard.refresh_stats().await;
    let last_stats = Rc::new(RefCell::new(log_stats(&page, &[])));

    let (d, p, last) = (dashboard.clone(), page.clone(), last_stats.clone());
    every(config.stats_interval_secs, shutdown.clone(), move || {
        let (d, p, last) = (d.clone(), p.clone(), last.clone());
        async move {
            d.refresh_stats().await;
            let previous = last.borrow().clone();
            *last.borrow_mut() = log_stats(&p, &previous);
        }
    });

    let d = dashboard.clone();
    every(config.session_poll_secs, shutdown.clone(), move || {
        let d = d.clone();
        async move {
            let was_warned = d.session().warning_shown();
            d.poll_session().await;
            if !was_warned && d.session().warning_shown() {
                tracing::warn!("Session warning raised by session poll");
            }
        }
    });

    let d = dashboard.clone();
    every(config.inactivity_tick_secs, shutdown.clone(), move || {
        let d = d.clone();
        async move {
            let was_warned = d.session().warning_shown();
            d.inactivity_tick();
            let session = d.session();
            tracing::debug!("Idle for {} minutes", session.idle_minutes());
            if !was_warned && session.warning_shown() {
                tracing::warn!("Session warning raised after inactivity");
            }
        }
    });

    tracing::info!("Watching (Ctrl+C to stop)");
    shutdown_signal().await;
    shutdown.cancel();
    tracing::info!("Shutdown complete");
}

/// Log stat slots that changed since `previous`; returns the current values.
fn log_stats(page: &MemoryPage, previous: &[String]) -> Vec<String> {
    let current = page.state().stat_slots.clone();
    for (i, (label, value)) in STAT_LABELS.iter().zip(&current).enumerate() {
        if previous.get(i) != Some(value) {
            tracing::info!("{}: {}", label, value);
        }
    }
    current
}

/// Run `tick` every `secs` seconds on the local set until `shutdown` fires.
/// Each fire runs as its own task; a slow request does not hold back the next.
fn every<F, Fut>(secs: u64, shutdown: CancellationToken, mut tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    tokio::task::spawn_local(async move {
        let mut timer = interval(Duration::from_secs(secs));
        // The first tick completes immediately; browser timers wait one period.
        timer.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = timer.tick() => {
                    tokio::task::spawn_local(tick());
                }
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
