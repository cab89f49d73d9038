// Logical clock capability for verification heights
//
// Heights are supplied by the environment (a block height or logical tick);
// the registry only reads them at mutation time. Keeping the source behind a
// trait lets hosts plug in their chain view and lets tests pin exact values.

use std::sync::atomic::{AtomicU64, Ordering};

// ================================
// Clock Trait
// ================================

/// Source of the environment's current logical time.
///
/// Monotonicity is the environment's contract, not enforced here.
pub trait BlockClock: Send + Sync {
    /// Current height
    fn current_height(&self) -> u64;
}

// ================================
// Wall-Clock Adapter
// ================================

/// Derives heights from UNIX seconds for hosts without a chain view.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl BlockClock for SystemClock {
    fn current_height(&self) -> u64 {
        // Pre-epoch timestamps clamp to zero rather than wrapping.
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

// ================================
// Manually Driven Clock
// ================================

/// Externally advanced clock for deterministic environments.
///
/// Hosts tracking a real chain call `set_height` as blocks arrive; tests use
/// it to pin exact stamp values.
#[derive(Debug, Default)]
pub struct ManualClock {
    height: AtomicU64,
}

impl ManualClock {
    /// Create a clock at the given height
    pub fn new(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Overwrite the current height
    pub fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }

    /// Advance by `blocks` and return the new height
    pub fn advance(&self, blocks: u64) -> u64 {
        self.height.fetch_add(blocks, Ordering::SeqCst) + blocks
    }
}

impl BlockClock for ManualClock {
    fn current_height(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }
}
