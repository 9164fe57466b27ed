//! SQLite-backed data adapter for Lernilo.
//!
//! Persists the platform settings and per-user statistics tables in a single
//! SQLite database, WAL journaled.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use lernilo::data_adapter::{DataAdapter, PlatformSetting, StatField, UserStats};
use lernilo::prelude::*;

mod schema;
mod setting;
mod stats;
mod utils;

use schema::init_db;

#[derive(Debug)]
pub struct DataAdapterSqlite {
	db: SqlitePool,
}

impl DataAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> LnResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}

	/// Seeds a setting row. Settings are provisioned externally in
	/// production; this is for tooling and tests.
	pub async fn create_setting(
		&self,
		key: &str,
		value: bool,
		description: Option<&str>,
	) -> LnResult<()> {
		setting::create(&self.db, key, value, description).await
	}
}

#[async_trait]
impl DataAdapter for DataAdapterSqlite {
	async fn list_settings(&self) -> LnResult<Vec<PlatformSetting>> {
		setting::list(&self.db).await
	}

	async fn update_setting(&self, key: &str, value: bool) -> LnResult<()> {
		setting::update(&self.db, key, value).await
	}

	async fn read_user_stats(&self, user_id: &UserId) -> LnResult<UserStats> {
		stats::read(&self.db, user_id).await
	}

	async fn create_user_stats(&self, user_id: &UserId) -> LnResult<UserStats> {
		stats::create(&self.db, user_id).await
	}

	async fn update_user_stat(
		&self,
		user_id: &UserId,
		field: StatField,
		value: i64,
	) -> LnResult<()> {
		stats::update_field(&self.db, user_id, field, value).await
	}
}

// vim: ts=4
