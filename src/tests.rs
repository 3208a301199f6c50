#[cfg(test)]
mod tests {
    use crate::ffi::{
        fs_engine_cancel, fs_engine_create, fs_engine_destroy, fs_engine_run, EngineHandle,
        FS_CANCELLED, FS_OK,
    };
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_ffi_full_run() {
        unsafe {
            let handle = fs_engine_create(10, 1, 10, 40, 4);
            assert!(!handle.is_null(), "valid config should produce a handle");

            let mut estimate = -1.0;
            assert_eq!(fs_engine_run(handle, &mut estimate), FS_OK);
            assert!(
                (0.0..=100.0).contains(&estimate),
                "estimate {estimate} outside the grid"
            );

            // A handle can run more than once
            let mut again = -1.0;
            assert_eq!(fs_engine_run(handle, &mut again), FS_OK);
            assert!((0.0..=100.0).contains(&again));

            fs_engine_destroy(handle);
        }
    }

    #[test]
    fn test_ffi_cancel_from_other_thread() {
        unsafe {
            let handle = fs_engine_create(30, 1, 50, 10_000_000, 2);
            assert!(!handle.is_null());

            // Raw pointers are not Send; pass the address instead
            let addr = handle as usize;
            let canceller = thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                fs_engine_cancel(addr as *const EngineHandle);
            });

            let mut estimate = -1.0;
            assert_eq!(fs_engine_run(handle, &mut estimate), FS_CANCELLED);
            assert_eq!(estimate, -1.0);

            canceller.join().unwrap();
            fs_engine_destroy(handle);
        }
    }

    #[test]
    fn test_ffi_occupant_free_grid() {
        unsafe {
            let handle = fs_engine_create(4, 0, 7, 9, 3);
            let mut estimate = 0.0;
            assert_eq!(fs_engine_run(handle, &mut estimate), FS_OK);
            assert_eq!(estimate, 16.0);
            fs_engine_destroy(handle);
        }
    }
}
