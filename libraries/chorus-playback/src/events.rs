//! Read-model broadcast
//!
//! Any number of UI surfaces (player bar, track cards, chat song-share
//! buttons) subscribe to the same snapshot stream so they stay consistent
//! without coordinating with each other.

use crate::types::PlaybackReadModel;
use std::sync::{Arc, Mutex};

/// Handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&PlaybackReadModel) + Send + Sync>;

#[derive(Default)]
struct Table {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

/// Multi-reader subscriber registry
///
/// Notification runs over a snapshot taken under the lock and invokes the
/// callbacks after releasing it, so a callback may subscribe or unsubscribe
/// (through a cloned handle) without deadlocking or invalidating the
/// iteration.
#[derive(Default)]
pub struct Subscribers {
    table: Mutex<Table>,
}

impl Subscribers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it will receive every subsequent snapshot
    pub fn subscribe(
        &self,
        callback: impl Fn(&PlaybackReadModel) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut table = self.table.lock().expect("subscriber table poisoned");
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Arc::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut table = self.table.lock().expect("subscriber table poisoned");
        let before = table.entries.len();
        table.entries.retain(|(entry_id, _)| *entry_id != id.0);
        table.entries.len() != before
    }

    /// Deliver a snapshot to every current subscriber
    pub fn notify(&self, model: &PlaybackReadModel) {
        let snapshot: Vec<Callback> = {
            let table = self.table.lock().expect("subscriber table poisoned");
            table.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for callback in snapshot {
            callback(model);
        }
    }

    /// Drop every subscription (used at session teardown)
    pub fn clear(&self) {
        let mut table = self.table.lock().expect("subscriber table poisoned");
        table.entries.clear();
    }

    /// Number of active subscriptions
    pub fn len(&self) -> usize {
        self.table.lock().expect("subscriber table poisoned").entries.len()
    }

    /// Check if there are no subscribers
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
