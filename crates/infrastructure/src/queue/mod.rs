use addv_application::ports::{QueueRepository, UpdateAction, UpdateOutcome};
use addv_domain::QueueEntry;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Sharded in-memory queue, one shard lock per bucket rather than a single
/// global mutex over the whole table. Domains never expire; an entry lives
/// until quorum removes it or the process restarts.
pub struct InMemoryQueue {
    entries: DashMap<String, QueueEntry>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl Default for InMemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueRepository for InMemoryQueue {
    fn exists(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    fn insert_if_absent(&self, domain: String, entry: QueueEntry) -> bool {
        match self.entries.entry(domain) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(entry);
                true
            }
        }
    }

    fn peek(&self, domain: &str) -> Option<QueueEntry> {
        self.entries.get(domain).map(|r| r.clone())
    }

    fn snapshot_keys(&self, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(limit)
            .map(|r| r.key().clone())
            .collect()
    }

    fn update_with(
        &self,
        domain: &str,
        f: Box<dyn FnOnce(&mut QueueEntry) -> UpdateAction + Send + '_>,
    ) -> UpdateOutcome {
        match self.entries.entry(domain.to_string()) {
            Entry::Vacant(_) => UpdateOutcome::NotFound,
            Entry::Occupied(mut occ) => match f(occ.get_mut()) {
                UpdateAction::NoOp => UpdateOutcome::NoOp,
                UpdateAction::Keep => UpdateOutcome::Kept,
                UpdateAction::Delete => {
                    let (_, entry) = occ.remove_entry();
                    UpdateOutcome::Removed(entry)
                }
            },
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
