//! Interning pool configuration
//!
//! Sizing and maintenance options for [`crate::names::NamePool`]. The defaults suit a single
//! analysis session; the presets trade memory for throughput in either direction.

/// Configuration for a [`crate::names::NamePool`]
///
/// The pool holds weak references only, so the configuration never changes which values are
/// alive. It controls the initial allocation, the lock granularity, and how often entries whose
/// values have been dropped are swept out of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePoolConfig {
    /// Number of entries to reserve up front
    pub initial_capacity: usize,

    /// Number of independently locked shards (must be a power of two greater than one)
    /// More shards reduce contention between threads interning different identifiers
    pub shard_amount: usize,

    /// Number of fresh insertions between automatic sweeps of dead entries
    /// `0` disables automatic sweeps; [`crate::names::NamePool::purge`] still works
    pub purge_threshold: usize,
}

impl Default for NamePoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            shard_amount: 32,
            purge_threshold: 16 * 1024,
        }
    }
}

impl NamePoolConfig {
    /// Creates a configuration for short-lived pools
    ///
    /// Small footprint, few shards, and no automatic sweeps.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            initial_capacity: 0,
            shard_amount: 4,
            purge_threshold: 0,
        }
    }

    /// Creates a configuration for pools shared by many worker threads
    ///
    /// Reserves a large table and uses many shards. Sweeps run rarely.
    #[must_use]
    pub fn high_throughput() -> Self {
        Self {
            initial_capacity: 64 * 1024,
            shard_amount: 256,
            purge_threshold: 256 * 1024,
        }
    }

    /// Returns the shard amount rounded to a value the backing map accepts
    ///
    /// `DashMap` requires a power of two greater than one; anything else is rounded up.
    #[must_use]
    pub fn effective_shard_amount(&self) -> usize {
        self.shard_amount.max(2).next_power_of_two()
    }
}
