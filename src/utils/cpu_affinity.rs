//! CPU affinity pinning for stable measurements.
//!
//! The sweep runs on one thread; pinning it to the core it already occupies
//! keeps the scheduler from migrating it mid-measurement. Linux only; other
//! platforms get a no-op guard.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Core the calling thread is currently running on.
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Save the current affinity mask so it can be restored later.
    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
                true
            } else {
                false
            }
        }
    }

    /// Pin the calling thread to one core.
    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    /// Restore the affinity mask saved by [`save_affinity`].
    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| {
            if let Some(set) = cell.borrow_mut().take() {
                unsafe {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
                }
            } else {
                false
            }
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save_affinity() -> bool {
        false
    }

    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }

    pub fn restore_affinity() -> bool {
        false
    }
}

/// RAII guard: pins the thread to its current core, restores affinity on drop.
pub struct CpuPinGuard {
    pinned: bool,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let pinned = match platform::current_cpu() {
            Some(core) => platform::save_affinity() && platform::set_affinity(core),
            None => false,
        };
        Self { pinned }
    }

    /// Whether pinning actually took effect on this platform.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned {
            platform::restore_affinity();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_roundtrip() {
        let guard = CpuPinGuard::new();
        // Pinning may legitimately fail (restricted cgroups, non-Linux).
        let _ = guard.is_pinned();
        drop(guard);
        // A second guard after restore must behave the same way.
        let _again = CpuPinGuard::new();
    }
}
