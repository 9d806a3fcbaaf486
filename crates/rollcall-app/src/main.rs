//! Rollcall operator binary.
//!
//! Hydrates the registry from the configured snapshot and prints the
//! current aggregate report, optionally with advisory insight. Useful for
//! checking what a deployment has on disk without the presentation layer.
//!
//! ## Environment
//! - `ROLLCALL_SNAPSHOT` - snapshot file path (default: `rollcall.json`)
//! - `ADVISOR_ENDPOINT` / `ADVISOR_TIMEOUT_SECS` - advisory service config
//! - `ROLLCALL_ADVICE=1` - also request advisory insight
//! - `RUST_LOG` - tracing filter (default: `info`)

use tracing::info;
use tracing_subscriber::EnvFilter;

use rollcall_advisor::{AdvisorConfig, AdvisoryClient};
use rollcall_app::EnrollmentService;
use rollcall_store::JsonSnapshotStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let snapshot_path =
        std::env::var("ROLLCALL_SNAPSHOT").unwrap_or_else(|_| "rollcall.json".to_string());
    info!(path = %snapshot_path, "loading registry snapshot");

    let advisor_config = AdvisorConfig::load().unwrap_or_default();
    let service = EnrollmentService::new(
        JsonSnapshotStore::new(&snapshot_path),
        AdvisoryClient::new(advisor_config),
    );

    let summary = service.summarize();
    println!("Active members: {}", summary.total_count);
    println!("Total revenue:  {}", summary.total_revenue);
    println!("Per location:");
    for row in &summary.per_location {
        println!(
            "  {:<10} {:>4} members  income {}",
            row.location.code(),
            row.count,
            row.income
        );
    }

    if std::env::var("ROLLCALL_ADVICE").as_deref() == Ok("1") {
        println!("\nAdvisory insight:\n{}", service.request_advice().await);
    }
}
