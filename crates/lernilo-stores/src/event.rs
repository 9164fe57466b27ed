//! Store change notification
//!
//! Each store owns a broadcast channel; subscribers that lag lose events but
//! never block the store.

/// Event emitted whenever a store's observable state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
	/// The loading flag flipped
	Loading(bool),
	/// Cached data was replaced or mutated
	Updated,
}

/// Buffered events per subscriber
pub(crate) const EVENT_BUFFER: usize = 16;

// vim: ts=4
