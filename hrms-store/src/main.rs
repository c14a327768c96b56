use anyhow::Context;
use hrms_store::{Config, Store, init_logger_with_file};

fn main() -> anyhow::Result<()> {
    // 1. Environment: .env, config, logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(work_dir = %config.work_dir, "HRMS store starting...");

    // 2. Open the store (seed, then load persisted collections)
    let store = Store::from_config(&config).context("failed to open HRMS store")?;

    for (collection, records) in store.collection_counts() {
        tracing::info!(collection, records, "Collection ready");
    }

    // 3. Today's headline numbers
    let summary = store.dashboard_summary(chrono::Local::now().date_naive());
    tracing::info!(
        employees = summary.total_employees,
        active = summary.active_employees,
        pending_leaves = summary.pending_leaves,
        on_leave = summary.on_leave,
        present = summary.present,
        "Dashboard"
    );

    Ok(())
}
