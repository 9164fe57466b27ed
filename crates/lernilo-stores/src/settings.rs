//! Platform feature flag store

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::broadcast;

use lernilo_types::data_adapter::{DataAdapter, PlatformSetting};
use lernilo_types::notify::{Notice, Notifier};
use lernilo_types::prelude::*;

use crate::event::{EVENT_BUFFER, StoreEvent};

/// Cached view of the centrally stored feature flags.
///
/// The cache is replaced wholesale by [`fetch_all`](Self::fetch_all);
/// concurrent updates racing with a fetch are not sequenced, the last
/// network response wins.
#[derive(Debug)]
pub struct PlatformSettingsStore {
	adapter: Arc<dyn DataAdapter>,
	notifier: Arc<dyn Notifier>,
	settings: RwLock<Vec<PlatformSetting>>,
	loading: AtomicBool,
	events: broadcast::Sender<StoreEvent>,
}

impl PlatformSettingsStore {
	pub fn new(adapter: Arc<dyn DataAdapter>, notifier: Arc<dyn Notifier>) -> Self {
		let (events, _) = broadcast::channel(EVENT_BUFFER);
		Self {
			adapter,
			notifier,
			settings: RwLock::new(Vec::new()),
			loading: AtomicBool::new(false),
			events,
		}
	}

	/// Subscribe to state change events
	pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
		self.events.subscribe()
	}

	fn emit(&self, event: StoreEvent) {
		let _ = self.events.send(event);
	}

	fn set_loading(&self, loading: bool) {
		self.loading.store(loading, Ordering::SeqCst);
		self.emit(StoreEvent::Loading(loading));
	}

	pub fn is_loading(&self) -> bool {
		self.loading.load(Ordering::SeqCst)
	}

	/// Loads all settings into the local cache, ordered by key.
	///
	/// A failed load is logged and leaves the previous cache untouched.
	pub async fn fetch_all(&self) {
		self.set_loading(true);
		match self.adapter.list_settings().await {
			Ok(settings) => {
				*self.settings.write() = settings;
				self.emit(StoreEvent::Updated);
			}
			Err(err) => warn!("Failed to fetch platform settings: {}", err),
		}
		self.set_loading(false);
	}

	/// Flips a single flag and resynchronizes the cache.
	///
	/// Reports the outcome through the notifier and returns whether the
	/// update was persisted. On failure the local cache stays untouched.
	pub async fn update(&self, key: &str, value: bool) -> bool {
		match self.adapter.update_setting(key, value).await {
			Ok(()) => {
				self.notifier.notify(Notice::success("settings.update_success"));
				self.fetch_all().await;
				true
			}
			Err(err) => {
				warn!("Failed to update setting {}: {}", key, err);
				self.notifier.notify(Notice::error("settings.update_failed"));
				false
			}
		}
	}

	/// Cache lookup of a single flag. Unknown keys read as disabled.
	pub fn get(&self, key: &str) -> bool {
		self.settings
			.read()
			.iter()
			.find(|setting| &*setting.setting_key == key)
			.is_some_and(|setting| setting.setting_value)
	}

	/// Snapshot of the cached settings list
	pub fn settings(&self) -> Vec<PlatformSetting> {
		self.settings.read().clone()
	}
}

// vim: ts=4
