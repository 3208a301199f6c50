//! Engine handle creation and destruction.

use crate::engine::{CancellationToken, TrialEngine};

/// Opaque handle pairing an engine with the token that cancels its runs.
pub struct EngineHandle {
    pub(crate) engine: TrialEngine,
    pub(crate) cancel: CancellationToken,
}

/// Creates a configured engine and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new engine handle, or null if the configuration is invalid
/// (negative counts, a grid smaller than 2, fewer trials than workers).
///
/// # Safety
/// The returned pointer must eventually be freed with `fs_engine_destroy()`.
#[no_mangle]
pub extern "C" fn fs_engine_create(
    grid_size: i32,
    initial_occupants: i32,
    steps: i32,
    trials: i32,
    workers: i32,
) -> *mut EngineHandle {
    if grid_size < 0 || initial_occupants < 0 || steps < 0 || trials < 0 || workers < 0 {
        return std::ptr::null_mut();
    }

    match TrialEngine::new(
        grid_size as usize,
        initial_occupants,
        steps as u32,
        trials as usize,
        workers as usize,
    ) {
        Ok(engine) => Box::into_raw(Box::new(EngineHandle {
            engine,
            cancel: CancellationToken::new(),
        })),
        Err(err) => {
            tracing::warn!(%err, "Rejected engine configuration");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine handle and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `fs_engine_create()`, or null
/// - `ptr` must not be used after this call, and no run may be in progress
#[no_mangle]
pub unsafe extern "C" fn fs_engine_destroy(ptr: *mut EngineHandle) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}
