//! Core scalar types

use serde::{Deserialize, Serialize};

/// Opaque user identity issued by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UserId(pub Box<str>);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for UserId {
	fn from(s: &str) -> Self {
		Self(s.into())
	}
}

/// Unix timestamp in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Self {
		Self(chrono::Utc::now().timestamp())
	}
}

pub fn now() -> Timestamp {
	Timestamp::now()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_id_display() {
		let user_id = UserId::from("u-42");
		assert_eq!(user_id.to_string(), "u-42");
	}

	#[test]
	fn test_now_is_positive() {
		assert!(now().0 > 0);
	}
}

// vim: ts=4
