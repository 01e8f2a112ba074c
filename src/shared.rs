use crate::error::SlotError;
use crate::rank::{rank, Candidate, RankOptions};
use crate::store::{SlotStore, Toggled};
use parking_lot::RwLock;
use std::sync::Arc;

/// Toggles take the write lock, reads and ranking the read lock.
/// Cloning the handle shares the underlying store.
#[derive(Clone, Debug)]
pub struct SharedSlotStore {
    inner: Arc<RwLock<SlotStore>>,
}

impl SharedSlotStore {
    pub fn new(store: SlotStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn toggle(&self, day: u8, hour: u8, member_id: &str) -> Result<Toggled, SlotError> {
        self.inner.write().toggle(day, hour, member_id)
    }

    /// Runs `f` against a consistent view of the store.
    pub fn read<R>(&self, f: impl FnOnce(&SlotStore) -> R) -> R {
        f(&*self.inner.read())
    }

    pub fn rank(&self, options: RankOptions) -> Vec<Candidate> {
        let store = self.inner.read();
        rank(&store, store.roster().len(), options)
    }

    /// Copy of the current assignments, detached from later toggles.
    pub fn snapshot(&self) -> SlotStore {
        self.inner.read().clone()
    }
}

impl From<SlotStore> for SharedSlotStore {
    fn from(store: SlotStore) -> Self {
        SharedSlotStore::new(store)
    }
}
