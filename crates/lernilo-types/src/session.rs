//! Session provider seam
//!
//! Authentication itself lives outside this workspace; the stores only need
//! to know who is currently signed in.

use std::fmt::Debug;
use std::sync::RwLock;

use crate::error::{Error, LnResult};
use crate::types::UserId;

/// Provides the identity of the currently authenticated user, if any
pub trait SessionProvider: Debug + Send + Sync {
	fn current_user(&self) -> Option<UserId>;

	/// Current user or [`Error::NoSession`]
	fn require_user(&self) -> LnResult<UserId> {
		self.current_user().ok_or(Error::NoSession)
	}
}

/// Session provider with a settable identity, for tools and tests
#[derive(Debug, Default)]
pub struct StaticSession {
	user: RwLock<Option<UserId>>,
}

impl StaticSession {
	pub fn user(id: impl Into<UserId>) -> Self {
		Self { user: RwLock::new(Some(id.into())) }
	}

	pub fn anonymous() -> Self {
		Self::default()
	}

	pub fn set(&self, user: Option<UserId>) {
		if let Ok(mut guard) = self.user.write() {
			*guard = user;
		}
	}
}

impl SessionProvider for StaticSession {
	fn current_user(&self) -> Option<UserId> {
		self.user.read().ok().and_then(|guard| guard.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_session() {
		let session = StaticSession::user("u-1");
		assert_eq!(session.current_user(), Some(UserId::from("u-1")));
		assert!(session.require_user().is_ok());

		session.set(None);
		assert_eq!(session.current_user(), None);
		assert!(matches!(session.require_user(), Err(Error::NoSession)));
	}
}

// vim: ts=4
