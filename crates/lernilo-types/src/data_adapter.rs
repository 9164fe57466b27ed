//! Adapter that stores platform settings and per-user engagement statistics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// A centrally stored feature flag.
///
/// Rows are provisioned externally; this layer only reads them and flips
/// `setting_value`. `setting_key` is unique across the table.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSetting {
	pub setting_id: i64,
	pub setting_key: Box<str>,
	pub setting_value: bool,
	pub description: Option<Box<str>>,
	pub updated_at: Timestamp,
}

/// Engagement counters for a single user. At most one row per user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
	pub user_id: UserId,
	pub lessons_watched: i64,
	pub exams_completed: i64,
	pub homework_submitted: i64,
	pub total_watch_time: i64,
}

impl UserStats {
	/// A freshly created record with all counters at zero
	pub fn zero(user_id: UserId) -> Self {
		Self {
			user_id,
			lessons_watched: 0,
			exams_completed: 0,
			homework_submitted: 0,
			total_watch_time: 0,
		}
	}

	pub fn get(&self, field: StatField) -> i64 {
		match field {
			StatField::LessonsWatched => self.lessons_watched,
			StatField::ExamsCompleted => self.exams_completed,
			StatField::HomeworkSubmitted => self.homework_submitted,
			StatField::TotalWatchTime => self.total_watch_time,
		}
	}

	pub fn set(&mut self, field: StatField, value: i64) {
		match field {
			StatField::LessonsWatched => self.lessons_watched = value,
			StatField::ExamsCompleted => self.exams_completed = value,
			StatField::HomeworkSubmitted => self.homework_submitted = value,
			StatField::TotalWatchTime => self.total_watch_time = value,
		}
	}
}

/// Selects one of the [`UserStats`] counter columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
	LessonsWatched,
	ExamsCompleted,
	HomeworkSubmitted,
	TotalWatchTime,
}

impl StatField {
	/// Column name in the `user_stats` table
	pub const fn as_str(&self) -> &'static str {
		match self {
			StatField::LessonsWatched => "lessons_watched",
			StatField::ExamsCompleted => "exams_completed",
			StatField::HomeworkSubmitted => "homework_submitted",
			StatField::TotalWatchTime => "total_watch_time",
		}
	}
}

/// A Lernilo data adapter
///
/// A `DataAdapter` is responsible for persisting the platform settings and
/// the per-user statistics records. The remote store is the sole arbiter of
/// write atomicity; this trait gives the stores a point of dependency
/// injection instead of a module-level client.
#[async_trait]
pub trait DataAdapter: Debug + Send + Sync {
	/// Lists all platform settings, ordered by `setting_key`
	async fn list_settings(&self) -> LnResult<Vec<PlatformSetting>>;

	/// Point update of `setting_value` and `updated_at` for the row matching
	/// `key`. Matching no row is not an error: settings rows are provisioned
	/// externally and last-write-wins semantics apply.
	async fn update_setting(&self, key: &str, value: bool) -> LnResult<()>;

	/// Reads the statistics row of a user, [`Error::NotFound`] when absent
	async fn read_user_stats(&self, user_id: &UserId) -> LnResult<UserStats>;

	/// Inserts a zero-valued statistics row. Fails if the row already exists.
	async fn create_user_stats(&self, user_id: &UserId) -> LnResult<UserStats>;

	/// Persists an absolute counter value computed by the caller
	async fn update_user_stat(
		&self,
		user_id: &UserId,
		field: StatField,
		value: i64,
	) -> LnResult<()>;
}

// vim: ts=4
