//! Fingerprint-keyed cache for the effective policy map.
//!
//! The cache holds one immutable snapshot behind a lock. Readers clone the
//! `Arc` together with its fingerprint; writers publish a complete new
//! snapshot by swapping the pointer, so a partially built map is never
//! observable. Two writers racing on the same fingerprint publish equal
//! values, so last-write-wins is harmless.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashSet;

/// One generation of the effective policy map.
#[derive(Debug)]
pub struct EffectivePolicies {
    /// Fingerprint of the inputs this snapshot was built from.
    pub fingerprint: String,
    /// Role catalog the tokens were normalized against.
    pub catalog: Vec<String>,
    /// Policy key to normalized display-cased role names.
    pub roles: BTreeMap<String, Vec<String>>,
    /// Policy key to configured role tokens absent from the catalog.
    pub unknown: BTreeMap<String, Vec<String>>,
    /// Policies whose unknown roles were already audited this generation.
    pub(crate) audited: DashSet<String>,
}

impl EffectivePolicies {
    /// Create a snapshot with an empty audited set.
    pub fn new(
        fingerprint: String,
        catalog: Vec<String>,
        roles: BTreeMap<String, Vec<String>>,
        unknown: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            fingerprint,
            catalog,
            roles,
            unknown,
            audited: DashSet::new(),
        }
    }

    /// Mark a policy as audited. Returns `true` the first time only.
    pub(crate) fn mark_audited(&self, policy: &str) -> bool {
        self.audited.insert(policy.to_string())
    }

    /// Number of policies audited for unknown roles this generation.
    pub fn audited_count(&self) -> usize {
        self.audited.len()
    }
}

/// Shared holder of the current snapshot.
#[derive(Debug, Default)]
pub struct PolicyCache {
    /// Current snapshot, if one has been built.
    current: RwLock<Option<Arc<EffectivePolicies>>>,
    /// Number of snapshots published since creation.
    generations: AtomicU64,
}

impl PolicyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot if it was built from `fingerprint`.
    pub fn get(&self, fingerprint: &str) -> Option<Arc<EffectivePolicies>> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .filter(|snapshot| snapshot.fingerprint == fingerprint)
            .cloned()
    }

    /// Replace the current snapshot.
    pub fn publish(&self, snapshot: Arc<EffectivePolicies>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(snapshot);
        self.generations.fetch_add(1, Ordering::Relaxed);
    }

    /// Drop the current snapshot; the next read rebuilds it.
    pub fn clear(&self) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Number of snapshots published so far.
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }
}
