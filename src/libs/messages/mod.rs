//! User-facing messages and the macros that display them.
//!
//! Every string shown to the user lives in the [`Message`] enum so wording
//! stays in one place. The `msg_*` macros route output either to the
//! tracing system (debug mode) or plain console printing.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
