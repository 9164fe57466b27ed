//! Convenience re-exports used across the workspace

pub use crate::error::{Error, LnResult};
pub use crate::types::{Timestamp, UserId, now};

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
