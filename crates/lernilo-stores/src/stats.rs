//! Per-user engagement statistics store

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::broadcast;

use lernilo_types::data_adapter::{DataAdapter, StatField, UserStats};
use lernilo_types::prelude::*;
use lernilo_types::session::SessionProvider;

use crate::event::{EVENT_BUFFER, StoreEvent};

/// Cached statistics record of the signed-in user.
///
/// The session provider is consulted on every call, so the consumer re-runs
/// [`fetch_or_create`](Self::fetch_or_create) whenever the active identity
/// changes. In-flight responses are not cancelled; the last one to resolve
/// wins.
#[derive(Debug)]
pub struct UserStatsStore {
	adapter: Arc<dyn DataAdapter>,
	session: Arc<dyn SessionProvider>,
	stats: RwLock<Option<UserStats>>,
	loading: AtomicBool,
	events: broadcast::Sender<StoreEvent>,
}

impl UserStatsStore {
	pub fn new(adapter: Arc<dyn DataAdapter>, session: Arc<dyn SessionProvider>) -> Self {
		let (events, _) = broadcast::channel(EVENT_BUFFER);
		Self {
			adapter,
			session,
			stats: RwLock::new(None),
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

	/// Loads the statistics row of the current user, inserting a zero-valued
	/// row when none is found.
	///
	/// Without an active session the cache is cleared and the call returns
	/// immediately. A failed load falls through to the create path as well:
	/// absence and load failure are not distinguished, so the insert may
	/// conflict with an existing row, in which case the conflict is logged
	/// and the cache stays empty.
	pub async fn fetch_or_create(&self) {
		let Some(user_id) = self.session.current_user() else {
			*self.stats.write() = None;
			self.set_loading(false);
			self.emit(StoreEvent::Updated);
			return;
		};

		self.set_loading(true);
		let loaded = match self.adapter.read_user_stats(&user_id).await {
			Ok(stats) => Some(stats),
			Err(Error::NotFound) => None,
			Err(err) => {
				warn!("Failed to fetch stats for {}: {}", user_id, err);
				None
			}
		};

		let adopted = match loaded {
			Some(stats) => Some(stats),
			None => match self.adapter.create_user_stats(&user_id).await {
				Ok(stats) => Some(stats),
				Err(err) => {
					warn!("Failed to create stats for {}: {}", user_id, err);
					None
				}
			},
		};

		*self.stats.write() = adopted;
		self.emit(StoreEvent::Updated);
		self.set_loading(false);
	}

	/// Adds `amount` to a counter and persists the new absolute value.
	///
	/// No-op without an active session or a loaded record. A failed write is
	/// logged and leaves the local state stale.
	pub async fn increment(&self, field: StatField, amount: i64) {
		let Some(user_id) = self.session.current_user() else {
			return;
		};
		let Some(current) = self.stats.read().as_ref().map(|stats| stats.get(field)) else {
			return;
		};

		let value = current + amount;
		match self.adapter.update_user_stat(&user_id, field, value).await {
			Ok(()) => {
				if let Some(stats) = self.stats.write().as_mut() {
					stats.set(field, value);
				}
				self.emit(StoreEvent::Updated);
			}
			Err(err) => {
				warn!("Failed to update {} for {}: {}", field.as_str(), user_id, err);
			}
		}
	}

	/// Single-step increment
	pub async fn increment_one(&self, field: StatField) {
		self.increment(field, 1).await;
	}

	/// Snapshot of the cached record, `None` when signed out or not loaded
	pub fn stats(&self) -> Option<UserStats> {
		self.stats.read().clone()
	}
}

// vim: ts=4
