//! Backend bridge: the worker thread that owns the tokio runtime and performs
//! generation service calls queued by the UI.

pub mod commands;
pub mod runtime;
