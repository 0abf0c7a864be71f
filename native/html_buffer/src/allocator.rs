//! Allocator Configuration
//!
//! `mimalloc` backs the global allocator when its feature is on. With
//! `memory_tracking`, a counting wrapper records current and peak bytes so
//! the host can watch the cost of the buffers it hands us.

#[cfg(feature = "memory_tracking")]
pub mod tracking {
    use std::alloc::{GlobalAlloc, Layout};
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
    pub static PEAK_ALLOCATED: AtomicUsize = AtomicUsize::new(0);

    pub struct TrackingAllocator;

    #[cfg(feature = "mimalloc")]
    static UNDERLYING: mimalloc::MiMalloc = mimalloc::MiMalloc;

    #[cfg(not(feature = "mimalloc"))]
    static UNDERLYING: std::alloc::System = std::alloc::System;

    unsafe impl GlobalAlloc for TrackingAllocator {
        unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
            let ptr = UNDERLYING.alloc(layout);
            if !ptr.is_null() {
                let current = ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
                PEAK_ALLOCATED.fetch_max(current, Ordering::Relaxed);
            }
            ptr
        }

        unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
            ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
            UNDERLYING.dealloc(ptr, layout)
        }
    }

    /// Bytes currently allocated
    pub fn current() -> usize {
        ALLOCATED.load(Ordering::SeqCst)
    }

    /// High-water mark since load or the last reset
    pub fn peak() -> usize {
        PEAK_ALLOCATED.load(Ordering::SeqCst)
    }

    /// Reset the peak to the current usage, returning `(current, old_peak)`
    pub fn reset() -> (usize, usize) {
        let current = current();
        let peak = PEAK_ALLOCATED.swap(current, Ordering::SeqCst);
        (current, peak)
    }
}

#[cfg(not(feature = "memory_tracking"))]
pub mod tracking {
    pub fn current() -> usize {
        0
    }

    pub fn peak() -> usize {
        0
    }

    pub fn reset() -> (usize, usize) {
        (0, 0)
    }
}

#[cfg(feature = "memory_tracking")]
#[global_allocator]
static GLOBAL: tracking::TrackingAllocator = tracking::TrackingAllocator;

#[cfg(all(feature = "mimalloc", not(feature = "memory_tracking")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
