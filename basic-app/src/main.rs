//! Minimal wiring example for the Lernilo data stores
//!
//! Opens a local SQLite database, seeds a pair of feature flags, and runs a
//! fetch/update/increment cycle with a fixed demo session.

use std::{env, path, sync::Arc};

use lernilo_data_adapter_sqlite::DataAdapterSqlite;
use lernilo_stores::{PlatformSettingsStore, UserStatsStore};
use lernilo_types::data_adapter::StatField;
use lernilo_types::notify::{Notice, Notifier};
use lernilo_types::session::StaticSession;

pub struct Config {
	pub db_dir: path::PathBuf,
}

/// Logs notices instead of showing UI toasts
#[derive(Debug)]
struct LogNotifier;

impl Notifier for LogNotifier {
	fn notify(&self, notice: Notice) {
		tracing::info!("notice: {:?} {}", notice.kind, notice.message);
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
	};
	tracing_subscriber::fmt::init();

	std::fs::create_dir_all(&config.db_dir).unwrap();
	let adapter =
		Arc::new(DataAdapterSqlite::new(config.db_dir.join("lernilo.db")).await.unwrap());

	let settings = PlatformSettingsStore::new(adapter.clone(), Arc::new(LogNotifier));
	settings.fetch_all().await;
	if settings.settings().is_empty() {
		adapter
			.create_setting("beta_mode", false, Some("Enable beta features"))
			.await
			.unwrap();
		adapter
			.create_setting("maintenance_mode", false, Some("Disable student access"))
			.await
			.unwrap();
		settings.fetch_all().await;
	}

	tracing::info!("beta_mode: {}", settings.get("beta_mode"));
	settings.update("beta_mode", true).await;
	tracing::info!("beta_mode: {}", settings.get("beta_mode"));

	let session = Arc::new(StaticSession::user("demo-user"));
	let stats = UserStatsStore::new(adapter.clone(), session);
	stats.fetch_or_create().await;
	stats.increment_one(StatField::LessonsWatched).await;
	stats.increment(StatField::TotalWatchTime, 300).await;
	tracing::info!("stats: {:?}", stats.stats());
}

// vim: ts=4
