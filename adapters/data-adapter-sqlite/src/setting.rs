//! Platform settings storage

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use lernilo::data_adapter::PlatformSetting;
use lernilo::prelude::*;

fn setting_from_row(row: &SqliteRow) -> Result<PlatformSetting, sqlx::Error> {
	Ok(PlatformSetting {
		setting_id: row.try_get("setting_id")?,
		setting_key: row.try_get::<String, _>("setting_key")?.into(),
		setting_value: row.try_get("setting_value")?,
		description: row.try_get::<Option<String>, _>("description")?.map(Into::into),
		updated_at: Timestamp(row.try_get("updated_at")?),
	})
}

/// List all settings ordered by key
pub(crate) async fn list(db: &SqlitePool) -> LnResult<Vec<PlatformSetting>> {
	let rows = sqlx::query(
		"SELECT setting_id, setting_key, setting_value, description, updated_at
		 FROM platform_settings ORDER BY setting_key",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut settings = Vec::with_capacity(rows.len());
	for row in &rows {
		settings.push(setting_from_row(row).inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(settings)
}

/// Update the value of the setting matching `key`
///
/// Matching no row is not an error: rows are provisioned externally and the
/// external store arbitrates concurrent writes.
pub(crate) async fn update(db: &SqlitePool, key: &str, value: bool) -> LnResult<()> {
	sqlx::query(
		"UPDATE platform_settings SET setting_value = ?1, updated_at = unixepoch()
		 WHERE setting_key = ?2",
	)
	.bind(value)
	.bind(key)
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;
	Ok(())
}

/// Insert a new setting row
pub(crate) async fn create(
	db: &SqlitePool,
	key: &str,
	value: bool,
	description: Option<&str>,
) -> LnResult<()> {
	sqlx::query(
		"INSERT INTO platform_settings (setting_key, setting_value, description)
		 VALUES (?1, ?2, ?3)",
	)
	.bind(key)
	.bind(value)
	.bind(description)
	.execute(db)
	.await
	.inspect_err(inspect)
	.or(Err(Error::DbError))?;
	Ok(())
}

// vim: ts=4
