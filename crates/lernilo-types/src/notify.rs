//! User-facing notification seam
//!
//! Stores report operation outcomes through a [`Notifier`]; the UI layer
//! decides how to present them (toasts in the web client). Messages are
//! localization keys, never display strings.

use std::fmt::Debug;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
}

/// A one-shot user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	/// Localization key resolved by the UI layer
	pub message: Box<str>,
}

impl Notice {
	pub fn success(message: impl Into<Box<str>>) -> Self {
		Self { kind: NoticeKind::Success, message: message.into() }
	}

	pub fn error(message: impl Into<Box<str>>) -> Self {
		Self { kind: NoticeKind::Error, message: message.into() }
	}
}

/// Sink for user notifications
pub trait Notifier: Debug + Send + Sync {
	fn notify(&self, notice: Notice);
}

/// Discards all notices
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
	fn notify(&self, _notice: Notice) {}
}

// vim: ts=4
