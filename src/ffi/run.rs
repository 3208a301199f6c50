//! Blocking runs and cross-thread cancellation.

use super::lifecycle::EngineHandle;

pub const FS_OK: i32 = 0;
pub const FS_NULL_POINTER: i32 = 1;
pub const FS_SIM_ERROR: i32 = 2;
pub const FS_CANCELLED: i32 = 3;

/// Runs every trial and writes the estimate to `out_estimate`.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `fs_engine_create()`, or null
/// - `out_estimate` must be a valid pointer to an f64, or null
///
/// # Returns
/// `FS_OK` on success, `FS_NULL_POINTER` if either pointer is null,
/// `FS_SIM_ERROR` if a worker failed, `FS_CANCELLED` if `fs_engine_cancel()`
/// was called. `out_estimate` is only written on success.
#[no_mangle]
pub unsafe extern "C" fn fs_engine_run(ptr: *const EngineHandle, out_estimate: *mut f64) -> i32 {
    if ptr.is_null() || out_estimate.is_null() {
        return FS_NULL_POINTER;
    }

    let handle = &*ptr;
    match handle.engine.run(&handle.cancel) {
        Ok(Some(estimate)) => {
            *out_estimate = estimate.mean_empty_cells;
            FS_OK
        }
        Ok(None) => FS_CANCELLED,
        Err(err) => {
            tracing::error!(%err, "Engine run failed");
            FS_SIM_ERROR
        }
    }
}

/// Cancels the current and all future runs of this handle.
///
/// Safe to call from another thread while `fs_engine_run()` blocks.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `fs_engine_create()`, or null
#[no_mangle]
pub unsafe extern "C" fn fs_engine_cancel(ptr: *const EngineHandle) {
    if ptr.is_null() {
        return;
    }
    (*ptr).cancel.cancel();
}
