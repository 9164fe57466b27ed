//! Data adapter CRUD operation tests
//!
//! Tests settings list/update and statistics read/create/update against a
//! temporary SQLite database.

use lernilo::data_adapter::{DataAdapter, StatField};
use lernilo::error::Error;
use lernilo::types::UserId;
use lernilo_data_adapter_sqlite::DataAdapterSqlite;
use tempfile::TempDir;

async fn create_test_adapter() -> (DataAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = DataAdapterSqlite::new(temp_dir.path().join("data.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_list_settings_empty() {
	let (adapter, _temp) = create_test_adapter().await;

	let settings = adapter.list_settings().await.expect("Should list settings");

	assert!(settings.is_empty());
}

#[tokio::test]
async fn test_create_and_list_settings_ordered() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter
		.create_setting("maintenance_mode", false, None)
		.await
		.expect("Should create setting");
	adapter
		.create_setting("beta_mode", true, Some("Enable beta features"))
		.await
		.expect("Should create setting");

	let settings = adapter.list_settings().await.expect("Should list settings");

	assert_eq!(settings.len(), 2);
	assert_eq!(&*settings[0].setting_key, "beta_mode");
	assert!(settings[0].setting_value);
	assert_eq!(settings[0].description.as_deref(), Some("Enable beta features"));
	assert_eq!(&*settings[1].setting_key, "maintenance_mode");
	assert!(!settings[1].setting_value);
}

#[tokio::test]
async fn test_update_setting() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_setting("beta_mode", false, None).await.expect("Should create setting");

	adapter.update_setting("beta_mode", true).await.expect("Should update setting");

	let settings = adapter.list_settings().await.expect("Should list settings");
	assert!(settings[0].setting_value);
}

#[tokio::test]
async fn test_update_unknown_setting_is_not_an_error() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter.update_setting("does_not_exist", true).await;

	assert!(result.is_ok());
	let settings = adapter.list_settings().await.expect("Should list settings");
	assert!(settings.is_empty());
}

#[tokio::test]
async fn test_duplicate_setting_key_fails() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_setting("beta_mode", false, None).await.expect("Should create setting");
	let result = adapter.create_setting("beta_mode", true, None).await;

	assert!(matches!(result, Err(Error::DbError)));
}

#[tokio::test]
async fn test_read_missing_stats_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;
	let user_id = UserId::from("u-1");

	let result = adapter.read_user_stats(&user_id).await;

	assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_create_and_read_stats() {
	let (adapter, _temp) = create_test_adapter().await;
	let user_id = UserId::from("u-1");

	let created = adapter.create_user_stats(&user_id).await.expect("Should create stats");
	assert_eq!(created.user_id, user_id);
	assert_eq!(created.lessons_watched, 0);
	assert_eq!(created.total_watch_time, 0);

	let read = adapter.read_user_stats(&user_id).await.expect("Should read stats");
	assert_eq!(read, created);
}

#[tokio::test]
async fn test_duplicate_stats_create_fails() {
	let (adapter, _temp) = create_test_adapter().await;
	let user_id = UserId::from("u-1");

	adapter.create_user_stats(&user_id).await.expect("Should create stats");
	let result = adapter.create_user_stats(&user_id).await;

	assert!(matches!(result, Err(Error::DbError)));
}

#[tokio::test]
async fn test_update_stat_field() {
	let (adapter, _temp) = create_test_adapter().await;
	let user_id = UserId::from("u-1");

	adapter.create_user_stats(&user_id).await.expect("Should create stats");
	adapter
		.update_user_stat(&user_id, StatField::LessonsWatched, 5)
		.await
		.expect("Should update stat");

	let stats = adapter.read_user_stats(&user_id).await.expect("Should read stats");
	assert_eq!(stats.lessons_watched, 5);
	assert_eq!(stats.exams_completed, 0);
	assert_eq!(stats.homework_submitted, 0);
	assert_eq!(stats.total_watch_time, 0);
}

#[tokio::test]
async fn test_stats_are_isolated_per_user() {
	let (adapter, _temp) = create_test_adapter().await;
	let alice = UserId::from("u-alice");
	let bob = UserId::from("u-bob");

	adapter.create_user_stats(&alice).await.expect("Should create stats");
	adapter.create_user_stats(&bob).await.expect("Should create stats");
	adapter
		.update_user_stat(&alice, StatField::ExamsCompleted, 3)
		.await
		.expect("Should update stat");

	let bob_stats = adapter.read_user_stats(&bob).await.expect("Should read stats");
	assert_eq!(bob_stats.exams_completed, 0);
}
