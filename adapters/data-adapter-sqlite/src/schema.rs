//! Database schema initialization

use sqlx::SqlitePool;

/// Create the tables if they do not exist yet
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS platform_settings (
		setting_id integer NOT NULL,
		setting_key text NOT NULL UNIQUE,
		setting_value boolean NOT NULL DEFAULT 0,
		description text,
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(setting_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// User statistics
	//*****************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS user_stats (
		user_id text NOT NULL,
		lessons_watched integer NOT NULL DEFAULT 0,
		exams_completed integer NOT NULL DEFAULT 0,
		homework_submitted integer NOT NULL DEFAULT 0,
		total_watch_time integer NOT NULL DEFAULT 0,
		PRIMARY KEY(user_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
