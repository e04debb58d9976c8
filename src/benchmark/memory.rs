//! Per-thread heap accounting for peak-memory measurement.
//!
//! [`TrackingAllocator`] wraps the system allocator and keeps, for every
//! thread, the bytes it currently holds and the high-water mark. A
//! [`MemoryProbe`] resets the high-water mark on the calling thread and
//! later reports how far above its starting point it climbed.
//!
//! The allocator only counts once installed by the final binary:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOCATOR: u_fleet::benchmark::TrackingAllocator = u_fleet::benchmark::TrackingAllocator;
//! ```
//!
//! Without it every probe reports zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
    static PEAK: Cell<usize> = const { Cell::new(0) };
}

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// A [`GlobalAlloc`] that counts live and peak bytes per thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Returns `true` once the allocator has served an allocation, i.e. it
    /// is installed as the global allocator.
    pub fn is_active() -> bool {
        ACTIVE.load(Ordering::Relaxed)
    }
}

fn record_alloc(size: usize) {
    let _ = LIVE.try_with(|live| {
        let now = live.get().saturating_add(size);
        live.set(now);
        let _ = PEAK.try_with(|peak| {
            if now > peak.get() {
                peak.set(now);
            }
        });
    });
}

fn record_dealloc(size: usize) {
    // Memory freed on another thread than it was allocated on saturates at zero.
    let _ = LIVE.try_with(|live| live.set(live.get().saturating_sub(size)));
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ACTIVE.store(true, Ordering::Relaxed);
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            ACTIVE.store(true, Ordering::Relaxed);
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record_dealloc(layout.size());
            record_alloc(new_size);
        }
        new_ptr
    }
}

/// Measures the heap high-water mark of the current thread.
///
/// # Examples
///
/// ```
/// use u_fleet::benchmark::MemoryProbe;
///
/// let probe = MemoryProbe::start();
/// let buffer = vec![0u8; 4096];
/// drop(buffer);
/// // Zero unless `TrackingAllocator` is the global allocator.
/// let _peak = probe.peak_bytes();
/// ```
#[derive(Debug)]
pub struct MemoryProbe {
    baseline: usize,
}

impl MemoryProbe {
    /// Starts measuring from the thread's current live bytes.
    pub fn start() -> Self {
        let baseline = LIVE.try_with(Cell::get).unwrap_or(0);
        let _ = PEAK.try_with(|peak| peak.set(baseline));
        Self { baseline }
    }

    /// Highest number of bytes held above the baseline since [`start`](Self::start).
    pub fn peak_bytes(&self) -> usize {
        PEAK.try_with(Cell::get).unwrap_or(0).saturating_sub(self.baseline)
    }
}
