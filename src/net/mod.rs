//! Networking: wire types, auth endpoint calls, and session operations.

pub mod api;
pub mod session_client;
pub mod types;
