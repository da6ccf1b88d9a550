//! Interning arena for name values.
//!
//! A [`NamePool`] maps `(kind, identifier)` to the single shared allocation currently backing
//! that identifier. Values obtained from one pool for equal identifiers of one kind therefore
//! share storage and can be compared by address through [`Name::same_instance`], which is what
//! consumers doing many comparisons on hot paths rely on.
//!
//! # Ownership
//!
//! The pool stores `Weak` references only. It never extends the lifetime of a value: once the
//! last owner drops a name, its entry is dead and is either replaced on the next request for the
//! same identifier or swept by [`NamePool::purge`]. Sweeps also run automatically every
//! [`NamePoolConfig::purge_threshold`] insertions.
//!
//! # Thread Safety
//!
//! Get-or-create is atomic per key: the lookup, the liveness check and the insertion happen
//! under one shard lock of the backing `DashMap`, so concurrent requests for the same identifier
//! can never produce two distinct allocations.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::{Name, NamePool, TypeName};
//!
//! let pool = NamePool::new();
//! let a: TypeName = pool.get("N.C, A, 1.2.3.4");
//! let b = pool.type_name("N.C, A, 1.2.3.4");
//! assert!(TypeName::same_instance(&a, &b));
//!
//! // unpooled values are equal but not shared
//! let c = TypeName::new("N.C, A, 1.2.3.4");
//! assert_eq!(a, c);
//! assert!(!TypeName::same_instance(&a, &c));
//! ```

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Weak,
};

use dashmap::{mapref::entry::Entry, DashMap};
use rayon::prelude::*;

use crate::names::{
    EventName, FieldName, MethodName, Name, NameKind, NamePoolConfig, ParameterName,
    PropertyName, TypeName,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PoolKey {
    kind: NameKind,
    identifier: Box<str>,
}

/// Explicit interning arena for name values.
///
/// Pools are independent of each other; a value interned in one pool is never shared with
/// another. Wrap a pool in an `Arc` to share it between owners.
pub struct NamePool {
    entries: DashMap<PoolKey, Weak<str>>,
    inserts: AtomicUsize,
    config: NamePoolConfig,
}

impl NamePool {
    /// Creates a pool with [`NamePoolConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(NamePoolConfig::default())
    }

    /// Creates a pool with the given configuration.
    #[must_use]
    pub fn with_config(config: NamePoolConfig) -> Self {
        NamePool {
            entries: DashMap::with_capacity_and_shard_amount(
                config.initial_capacity,
                config.effective_shard_amount(),
            ),
            inserts: AtomicUsize::new(0),
            config,
        }
    }

    /// The configuration this pool was created with.
    #[must_use]
    pub fn config(&self) -> &NamePoolConfig {
        &self.config
    }

    /// Decodes `identifier` as a name of kind `N` and interns it.
    ///
    /// Malformed input is normalised to the unknown value of `N` first, so all malformed
    /// identifiers of one kind intern to the same sentinel instance.
    pub fn get<N: Name>(&self, identifier: &str) -> N {
        let normalized = N::normalize(identifier);
        let key = PoolKey {
            kind: N::KIND,
            identifier: normalized.into(),
        };

        let (shared, inserted) = match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => match occupied.get().upgrade() {
                Some(live) => (live, false),
                None => {
                    let fresh: Arc<str> = Arc::from(normalized);
                    occupied.insert(Arc::downgrade(&fresh));
                    (fresh, false)
                }
            },
            Entry::Vacant(vacant) => {
                let fresh: Arc<str> = Arc::from(normalized);
                vacant.insert(Arc::downgrade(&fresh));
                (fresh, true)
            }
        };

        // the shard lock is released here; sweeping while holding it would deadlock
        if inserted {
            self.maybe_purge();
        }

        N::from_shared(shared)
    }

    /// Interns a type name.
    pub fn type_name(&self, identifier: &str) -> TypeName {
        self.get(identifier)
    }

    /// Interns a method name.
    pub fn method(&self, identifier: &str) -> MethodName {
        self.get(identifier)
    }

    /// Interns a field name.
    pub fn field(&self, identifier: &str) -> FieldName {
        self.get(identifier)
    }

    /// Interns a property name.
    pub fn property(&self, identifier: &str) -> PropertyName {
        self.get(identifier)
    }

    /// Interns an event name.
    pub fn event(&self, identifier: &str) -> EventName {
        self.get(identifier)
    }

    /// Interns a parameter name.
    pub fn parameter(&self, identifier: &str) -> ParameterName {
        self.get(identifier)
    }

    /// Interns many identifiers of one kind in parallel.
    ///
    /// The result preserves the order of `identifiers`.
    pub fn intern_all<N: Name>(&self, identifiers: &[&str]) -> Vec<N> {
        identifiers
            .par_iter()
            .map(|identifier| self.get::<N>(identifier))
            .collect()
    }

    /// Number of entries currently in the map, including dead ones not yet swept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose value is still owned somewhere.
    #[must_use]
    pub fn live(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().strong_count() > 0)
            .count()
    }

    /// Removes all entries whose value has been dropped.
    ///
    /// Returns the number of removed entries.
    pub fn purge(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        let removed = before.saturating_sub(self.entries.len());
        log::trace!("name pool purge removed {} dead entries", removed);
        removed
    }

    /// Removes every entry. Values handed out earlier stay valid but are no longer shared with
    /// values requested afterwards.
    pub fn clear(&self) {
        self.entries.clear();
    }

    fn maybe_purge(&self) {
        let threshold = self.config.purge_threshold;
        if threshold == 0 {
            return;
        }

        let count = self.inserts.fetch_add(1, Ordering::Relaxed) + 1;
        if count % threshold == 0 {
            self.purge();
        }
    }
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NamePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamePool")
            .field("entries", &self.entries.len())
            .field("config", &self.config)
            .finish()
    }
}
