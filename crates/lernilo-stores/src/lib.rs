//! Reactive data-access stores for the Lernilo web client.
//!
//! Each store caches rows fetched through a [`DataAdapter`], exposes a
//! loading flag, and broadcasts [`StoreEvent`]s so the UI layer can
//! re-render on state changes. Re-fetch triggers are explicit calls; the
//! stores never install lifecycle hooks of their own.
//!
//! [`DataAdapter`]: lernilo_types::data_adapter::DataAdapter

pub mod event;
pub mod settings;
pub mod stats;

pub use event::StoreEvent;
pub use settings::PlatformSettingsStore;
pub use stats::UserStatsStore;

// vim: ts=4
