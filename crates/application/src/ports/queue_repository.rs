use addv_domain::QueueEntry;

/// What a mutation closure passed to [`QueueRepository::update_with`]
/// decided to do with the entry it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// No change was made (e.g. a duplicate submission) — no event should
    /// be emitted by the caller.
    NoOp,
    /// The entry was mutated and remains in the queue.
    Keep,
    /// The entry was mutated and should now be removed (quorum reached).
    Delete,
}

/// What happened as a result of an `update_with` call.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The domain was not in the queue.
    NotFound,
    /// The closure ran but reported [`UpdateAction::NoOp`].
    NoOp,
    /// The closure ran, mutated the entry, and it remains queued.
    Kept,
    /// The closure ran, mutated the entry, and it was removed. Carries
    /// the final value so the caller can compute a verdict from it.
    Removed(QueueEntry),
}

/// A concurrent domain → [`QueueEntry`] store. Implementations must
/// guarantee that `update_with` and `insert_if_absent`/deletion on the
/// same key never interleave (per-key linearizability); no ordering is
/// required across distinct keys.
pub trait QueueRepository: Send + Sync {
    fn exists(&self, domain: &str) -> bool;

    /// Inserts `entry` under `domain` iff absent. Returns `true` iff this
    /// call performed the insertion.
    fn insert_if_absent(&self, domain: String, entry: QueueEntry) -> bool;

    /// A read-only, un-synchronized copy of the current entry for
    /// `domain`, if queued. Staleness relative to concurrent mutation is
    /// acceptable — callers that need atomicity use [`Self::update_with`].
    fn peek(&self, domain: &str) -> Option<QueueEntry>;

    /// Up to `limit` domains currently in the queue, in arbitrary order.
    /// Not a consistent snapshot: entries may be added or removed by
    /// concurrent callers before or after this call returns.
    fn snapshot_keys(&self, limit: usize) -> Vec<String>;

    /// Applies `f` to the entry for `domain` atomically with respect to
    /// any other `update_with`/deletion on the same key.
    fn update_with(
        &self,
        domain: &str,
        f: Box<dyn FnOnce(&mut QueueEntry) -> UpdateAction + Send + '_>,
    ) -> UpdateOutcome;

    fn len(&self) -> usize;
}
