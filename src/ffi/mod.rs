//! C FFI layer.
//!
//! Exports C ABI functions so hosts outside Rust can drive the engine.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `engine`. These functions are thin wrappers that
//! handle null checks, pointer safety, and C-to-Rust conversions.

pub mod lifecycle;
pub mod run;

pub use lifecycle::{fs_engine_create, fs_engine_destroy, EngineHandle};
pub use run::{fs_engine_cancel, fs_engine_run, FS_CANCELLED, FS_NULL_POINTER, FS_OK, FS_SIM_ERROR};
