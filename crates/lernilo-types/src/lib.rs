//! Shared types, adapter traits, and core utilities for the Lernilo platform.
//!
//! This crate contains the foundational types that are shared between the
//! store crates and all adapter implementations. Extracting these into a
//! separate crate allows adapter crates to compile in parallel with the
//! store modules.

pub mod data_adapter;
pub mod error;
pub mod notify;
pub mod prelude;
pub mod roles;
pub mod session;
pub mod types;

// vim: ts=4
