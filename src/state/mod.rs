//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `SessionState` is a plain struct wrapped in an `RwSignal` at the app
//! root, so its transitions stay synchronous and unit-testable while
//! components subscribe reactively through context.

pub mod session;
