//! Error type shared by the stores and adapters.

pub type LnResult<T> = std::result::Result<T, Error>;

/// Failure taxonomy of the data-access layer.
///
/// Persistence failures are logged where they occur and mapped to these
/// variants; the stores absorb them and never panic or propagate past their
/// own API boundary.
#[derive(Debug)]
pub enum Error {
	/// The requested row does not exist
	NotFound,
	/// No authenticated user session
	NoSession,
	/// Query or transport failure in the persistence layer
	DbError,
	ValidationError(String),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::NoSession => write!(f, "no active session"),
			Error::DbError => write!(f, "database error"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
