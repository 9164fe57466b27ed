//! Static user role catalog
//!
//! Pure data: every role maps to a display label, a description, and an icon
//! identifier used by the web client. Adding a role means extending the enum;
//! the `match` tables below are total, so the compiler flags every mapping
//! that misses the new variant.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed set of platform user roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
	Student,
	Teacher,
	Assistant,
	Parent,
	Editor,
	Support,
	Admin,
}

impl UserRole {
	pub const ALL: [UserRole; 7] = [
		UserRole::Student,
		UserRole::Teacher,
		UserRole::Assistant,
		UserRole::Parent,
		UserRole::Editor,
		UserRole::Support,
		UserRole::Admin,
	];

	/// Stable tag as stored in the database
	pub const fn as_str(&self) -> &'static str {
		match self {
			UserRole::Student => "student",
			UserRole::Teacher => "teacher",
			UserRole::Assistant => "assistant",
			UserRole::Parent => "parent",
			UserRole::Editor => "editor",
			UserRole::Support => "support",
			UserRole::Admin => "admin",
		}
	}

	/// Default display label
	pub const fn label(&self) -> &'static str {
		match self {
			UserRole::Student => "Student",
			UserRole::Teacher => "Teacher",
			UserRole::Assistant => "Teaching Assistant",
			UserRole::Parent => "Parent",
			UserRole::Editor => "Content Editor",
			UserRole::Support => "Support Agent",
			UserRole::Admin => "Administrator",
		}
	}

	pub const fn description(&self) -> &'static str {
		match self {
			UserRole::Student => "Watches lessons, takes exams, and submits homework",
			UserRole::Teacher => "Publishes lessons and grades student work",
			UserRole::Assistant => "Helps a teacher manage classes and review submissions",
			UserRole::Parent => "Follows the progress of linked student accounts",
			UserRole::Editor => "Curates and maintains the course catalog",
			UserRole::Support => "Handles user questions and account issues",
			UserRole::Admin => "Full access to platform configuration and users",
		}
	}

	/// Icon identifier used by the web client
	pub const fn icon(&self) -> &'static str {
		match self {
			UserRole::Student => "graduation-cap",
			UserRole::Teacher => "presentation",
			UserRole::Assistant => "clipboard-list",
			UserRole::Parent => "users",
			UserRole::Editor => "pen-square",
			UserRole::Support => "life-buoy",
			UserRole::Admin => "shield",
		}
	}
}

impl std::fmt::Display for UserRole {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for UserRole {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		UserRole::ALL
			.into_iter()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| Error::ValidationError(format!("Unknown role: {}", s)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tables_are_total() {
		for role in UserRole::ALL {
			assert!(!role.as_str().is_empty());
			assert!(!role.label().is_empty());
			assert!(!role.description().is_empty());
			assert!(!role.icon().is_empty());
		}
	}

	#[test]
	fn test_tag_round_trip() {
		for role in UserRole::ALL {
			let parsed: UserRole = role.as_str().parse().unwrap();
			assert_eq!(parsed, role);
		}
		assert!("principal".parse::<UserRole>().is_err());
	}

	#[test]
	fn test_serde_tags_match_db_tags() {
		for role in UserRole::ALL {
			let json = serde_json::to_string(&role).unwrap();
			assert_eq!(json, format!("\"{}\"", role.as_str()));
		}
	}
}

// vim: ts=4
