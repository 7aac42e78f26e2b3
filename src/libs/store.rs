//! In-memory attendance store shared by the action handler and the scheduler.
//!
//! The store maps user identifiers to their [`UserRecord`] and remembers the
//! order in which users were first seen, so report rows always list users
//! first-seen-first. State is transient by design: it lives for the current
//! process run and is cleared wholesale by the daily reset sweep.
//!
//! Both call sites (the transport action handler and the scheduler) hold the
//! store behind a [`SharedStore`], whose mutex is the mutual-exclusion
//! boundary around every read-modify-write sequence.

use crate::libs::record::{UserId, UserRecord};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared handle to the process-wide store.
pub type SharedStore = Arc<Mutex<AttendanceStore>>;

/// Insertion-ordered map of `UserId -> UserRecord`.
#[derive(Debug, Default)]
pub struct AttendanceStore {
    records: HashMap<UserId, UserRecord>,
    /// First-seen order of user ids, kept in sync with `records`.
    order: Vec<UserId>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store in the shared handle used across tasks.
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Returns the record for `user_id`, creating it on first activity.
    ///
    /// The display name is refreshed to the last-seen value on every call;
    /// no rename history is kept.
    pub fn entry(&mut self, user_id: UserId, user_name: &str) -> &mut UserRecord {
        let order = &mut self.order;
        let record = self.records.entry(user_id).or_insert_with(|| {
            order.push(user_id);
            UserRecord::new(user_name)
        });
        if record.name != user_name {
            record.name = user_name.to_string();
        }
        record
    }

    pub fn get(&self, user_id: UserId) -> Option<&UserRecord> {
        self.records.get(&user_id)
    }

    /// Iterates records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &UserRecord)> {
        self.order.iter().filter_map(|id| self.records.get(id).map(|r| (*id, r)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears every record, returning how many were dropped. Idempotent.
    pub fn reset_all(&mut self) -> usize {
        let dropped = self.records.len();
        self.records.clear();
        self.order.clear();
        dropped
    }
}
