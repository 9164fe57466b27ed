//! Per-user statistics storage

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use lernilo::data_adapter::{StatField, UserStats};
use lernilo::prelude::*;

fn stats_from_row(row: &SqliteRow) -> Result<UserStats, sqlx::Error> {
	Ok(UserStats {
		user_id: UserId(row.try_get::<String, _>("user_id")?.into()),
		lessons_watched: row.try_get("lessons_watched")?,
		exams_completed: row.try_get("exams_completed")?,
		homework_submitted: row.try_get("homework_submitted")?,
		total_watch_time: row.try_get("total_watch_time")?,
	})
}

/// Read the statistics row of a user
pub(crate) async fn read(db: &SqlitePool, user_id: &UserId) -> LnResult<UserStats> {
	let res = sqlx::query(
		"SELECT user_id, lessons_watched, exams_completed, homework_submitted, total_watch_time
		 FROM user_stats WHERE user_id = ?1",
	)
	.bind(&*user_id.0)
	.fetch_one(db)
	.await;

	map_res(res, stats_from_row)
}

/// Insert a zero-valued statistics row
pub(crate) async fn create(db: &SqlitePool, user_id: &UserId) -> LnResult<UserStats> {
	sqlx::query("INSERT INTO user_stats (user_id) VALUES (?1)")
		.bind(&*user_id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	Ok(UserStats::zero(user_id.clone()))
}

/// Persist an absolute counter value
pub(crate) async fn update_field(
	db: &SqlitePool,
	user_id: &UserId,
	field: StatField,
	value: i64,
) -> LnResult<()> {
	// Column name comes from the closed StatField enum, never from input
	let query = format!("UPDATE user_stats SET {} = ?1 WHERE user_id = ?2", field.as_str());
	sqlx::query(&query)
		.bind(value)
		.bind(&*user_id.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;
	Ok(())
}

// vim: ts=4
