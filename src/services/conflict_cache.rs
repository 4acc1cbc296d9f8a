use std::collections::HashMap;
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::conflict::Conflict;
use crate::models::resource::ResourceRecord;
use crate::models::settings::EngineSettings;
use crate::models::task::{TaskCandidateInput, TaskRecord};
use crate::services::conflict_service;

const DEFAULT_CAPACITY: usize = 256;

/// Deterministic content hash over a (tasks, resources, candidate)
/// snapshot. Identical snapshots hash identically, so a detector run can be
/// memoized across keystroke-equivalent re-checks.
pub fn snapshot_hash(
    tasks: &[TaskRecord],
    resources: &[ResourceRecord],
    candidate: Option<&TaskCandidateInput>,
) -> String {
    let mut hasher = Sha256::new();
    if let Ok(serialized) = serde_json::to_vec(tasks) {
        hasher.update(&serialized);
    }
    hasher.update(b"|");
    if let Ok(serialized) = serde_json::to_vec(resources) {
        hasher.update(&serialized);
    }
    hasher.update(b"|");
    if let Some(candidate) = candidate {
        if let Ok(serialized) = serde_json::to_vec(candidate) {
            hasher.update(&serialized);
        }
    }
    STANDARD_NO_PAD.encode(hasher.finalize())
}

/// Capacity-bounded memo cache for detector runs, keyed by snapshot hash.
///
/// Purely an optimization for interactive callers re-running the detector
/// on every edit; results are identical to the uncached functions. The map
/// is flushed wholesale when full, which is adequate at the expected
/// snapshot churn.
pub struct ConflictCache {
    entries: Mutex<HashMap<String, Vec<Conflict>>>,
    capacity: usize,
}

impl Default for ConflictCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ConflictCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn detect_cached(
        &self,
        tasks: &[TaskRecord],
        resources: &[ResourceRecord],
        settings: &EngineSettings,
    ) -> Vec<Conflict> {
        let key = snapshot_hash(tasks, resources, None);
        self.get_or_compute(key, || {
            conflict_service::detect_conflicts(tasks, resources, settings)
        })
    }

    pub fn check_candidate_cached(
        &self,
        candidate: &TaskCandidateInput,
        tasks: &[TaskRecord],
        resources: &[ResourceRecord],
        settings: &EngineSettings,
    ) -> Vec<Conflict> {
        let key = snapshot_hash(tasks, resources, Some(candidate));
        self.get_or_compute(key, || {
            conflict_service::check_candidate(candidate, tasks, resources, settings)
        })
    }

    fn get_or_compute<F>(&self, key: String, compute: F) -> Vec<Conflict>
    where
        F: FnOnce() -> Vec<Conflict>,
    {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(findings) = entries.get(&key) {
            debug!(target: "app::conflict::cache", %key, "cache hit");
            return findings.clone();
        }

        let findings = compute();
        if entries.len() >= self.capacity {
            debug!(
                target: "app::conflict::cache",
                evicted = entries.len(),
                "cache full, flushing"
            );
            entries.clear();
        }
        entries.insert(key, findings.clone());
        findings
    }
}
