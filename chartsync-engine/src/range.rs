use crate::SyncEngine;
use chartsync_core::RangeUpdate;
use std::cell::Cell;

/// Holds the sync lock for the duration of one broadcast. Dropping releases
/// the lock on every exit path, a panicking panel update included; a lock
/// left set would silently disable all future range synchronization.
struct SyncLockGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> SyncLockGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.get() {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl Drop for SyncLockGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl SyncEngine {
    /// Range broadcast: apply the source panel's new time window (or auto
    /// reset) to every other panel, in registry order. Returns the number of
    /// panels updated.
    ///
    /// Applying a range to a panel may synchronously fire that panel's own
    /// range-change notification back into this method; the nested call
    /// finds the lock held and returns before touching any panel.
    pub fn handle_range_change(&self, source_id: &str, update: RangeUpdate) -> usize {
        let state = self.state();
        let Some(_guard) = SyncLockGuard::acquire(&state.range_lock) else {
            log::debug!("range broadcast from {source_id} suppressed, propagation in flight");
            return 0;
        };

        let panels = state.panels.borrow();
        let mut updated = 0;
        for entry in panels.iter() {
            if entry.borrow().id() == source_id {
                continue;
            }
            let mut panel = entry.borrow_mut();
            match panel.set_time_range(update) {
                Ok(()) => updated += 1,
                Err(err) => log::warn!("panel {} did not sync this tick: {err}", panel.id()),
            }
        }
        updated
    }
}
