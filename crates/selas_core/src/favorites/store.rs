//! Observable favorites store.
//!
//! # Responsibility
//! - Track which keys are marked favorite, in insertion order.
//! - Broadcast every change to subscribers as an immutable snapshot.
//!
//! # Invariants
//! - A snapshot never contains the same key twice.
//! - Snapshots are replaced wholesale; a snapshot already handed out never
//!   changes.
//! - Replace-and-broadcast runs under the channel's single write lock, so
//!   concurrent writers serialize and no subscriber sees a partial update.
//! - No-op mutations do not emit.

use log::debug;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable, insertion-ordered set of favorite keys.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesSnapshot<K> {
    keys: Arc<[K]>,
}

impl<K> FavoritesSnapshot<K> {
    fn empty() -> Self {
        Self {
            keys: Arc::from(Vec::new()),
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: PartialEq> FavoritesSnapshot<K> {
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }
}

impl<K: Clone> FavoritesSnapshot<K> {
    pub fn to_vec(&self) -> Vec<K> {
        self.keys.to_vec()
    }
}

impl<K> Default for FavoritesSnapshot<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, K> IntoIterator for &'a FavoritesSnapshot<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Favorites state container shared by every catalog screen.
///
/// Commands (`add_favorite`, `remove_favorite`, `toggle_favorite`) are the
/// only way to change state; readers get snapshots or a subscription.
pub struct FavoritesStore<K> {
    sender: watch::Sender<FavoritesSnapshot<K>>,
}

impl<K> FavoritesStore<K>
where
    K: Clone + PartialEq + Debug,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(FavoritesSnapshot::empty());
        Self { sender }
    }

    /// Marks `key` as favorite.
    ///
    /// Returns `true` when the snapshot changed, `false` when `key` was
    /// already present (no-op, nothing is emitted).
    pub fn add_favorite(&self, key: K) -> bool {
        let changed = self.sender.send_if_modified(|snapshot| {
            if snapshot.contains(&key) {
                return false;
            }
            let mut next = Vec::with_capacity(snapshot.len() + 1);
            next.extend_from_slice(snapshot.keys());
            next.push(key.clone());
            *snapshot = FavoritesSnapshot { keys: next.into() };
            true
        });
        debug!(
            "event=favorite_add module=favorites status=ok key={:?} changed={} size={}",
            key,
            changed,
            self.len()
        );
        changed
    }

    /// Unmarks `key`.
    ///
    /// Returns `true` when the snapshot changed, `false` when `key` was not
    /// present (no-op, nothing is emitted).
    pub fn remove_favorite(&self, key: &K) -> bool {
        let changed = self.sender.send_if_modified(|snapshot| {
            if !snapshot.contains(key) {
                return false;
            }
            let next = snapshot
                .iter()
                .filter(|existing| *existing != key)
                .cloned()
                .collect::<Vec<_>>();
            *snapshot = FavoritesSnapshot { keys: next.into() };
            true
        });
        debug!(
            "event=favorite_remove module=favorites status=ok key={:?} changed={} size={}",
            key,
            changed,
            self.len()
        );
        changed
    }

    /// Flips membership of `key` and returns the new state.
    ///
    /// The check and the update happen under one lock acquisition.
    pub fn toggle_favorite(&self, key: K) -> bool {
        let mut now_favorite = false;
        self.sender.send_modify(|snapshot| {
            let next = if snapshot.contains(&key) {
                snapshot
                    .iter()
                    .filter(|existing| **existing != key)
                    .cloned()
                    .collect::<Vec<_>>()
            } else {
                now_favorite = true;
                let mut next = snapshot.to_vec();
                next.push(key.clone());
                next
            };
            *snapshot = FavoritesSnapshot { keys: next.into() };
        });
        debug!(
            "event=favorite_toggle module=favorites status=ok key={:?} favorite={}",
            key, now_favorite
        );
        now_favorite
    }

    /// Returns whether `key` is in the current snapshot.
    pub fn is_favorite(&self, key: &K) -> bool {
        self.sender.borrow().contains(key)
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> FavoritesSnapshot<K> {
        self.sender.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().is_empty()
    }

    /// Starts a new snapshot sequence, beginning with the current value.
    pub fn subscribe(&self) -> FavoritesSubscription<K> {
        FavoritesSubscription {
            receiver: self.sender.subscribe(),
            primed: false,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<K> Default for FavoritesStore<K>
where
    K: Clone + PartialEq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy sequence of favorites snapshots.
///
/// The first [`next`](Self::next) yields the snapshot current at that time;
/// later calls wait for the next change. Rapid successive changes may be
/// conflated into the latest snapshot.
pub struct FavoritesSubscription<K> {
    receiver: watch::Receiver<FavoritesSnapshot<K>>,
    primed: bool,
}

impl<K: Clone> FavoritesSubscription<K> {
    /// Returns the latest snapshot without waiting.
    pub fn current(&self) -> FavoritesSnapshot<K> {
        self.receiver.borrow().clone()
    }

    /// Returns whether a snapshot newer than the last one yielded exists.
    pub fn has_pending(&self) -> bool {
        !self.primed || self.receiver.has_changed().unwrap_or(false)
    }

    /// Yields the next snapshot.
    ///
    /// Returns `None` once the store has been dropped and no unseen
    /// snapshot remains.
    pub async fn next(&mut self) -> Option<FavoritesSnapshot<K>> {
        if !self.primed {
            self.primed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::FavoritesStore;

    #[test]
    fn add_keeps_insertion_order() {
        let store = FavoritesStore::new();
        store.add_favorite(10_i64);
        store.add_favorite(1);
        store.add_favorite(5);
        assert_eq!(store.snapshot().keys(), &[10, 1, 5]);
    }

    #[test]
    fn duplicate_add_and_absent_remove_are_noops() {
        let store = FavoritesStore::new();
        assert!(store.add_favorite(7_i64));
        assert!(!store.add_favorite(7));
        assert!(!store.remove_favorite(&8));
        assert_eq!(store.snapshot().keys(), &[7]);
    }

    #[test]
    fn held_snapshot_is_not_mutated_by_later_writes() {
        let store = FavoritesStore::new();
        store.add_favorite(1_i64);
        let before = store.snapshot();
        store.add_favorite(2);
        store.remove_favorite(&1);
        assert_eq!(before.keys(), &[1]);
        assert_eq!(store.snapshot().keys(), &[2]);
    }

    #[test]
    fn toggle_flips_membership() {
        let store = FavoritesStore::new();
        assert!(store.toggle_favorite(3_i64));
        assert!(store.is_favorite(&3));
        assert!(!store.toggle_favorite(3));
        assert!(!store.is_favorite(&3));
        assert!(store.is_empty());
    }

    #[test]
    fn pending_flag_tracks_unseen_changes() {
        let store = FavoritesStore::<i64>::new();
        let subscription = store.subscribe();
        assert!(subscription.has_pending());
        assert_eq!(store.subscriber_count(), 1);
        drop(subscription);
        assert_eq!(store.subscriber_count(), 0);
    }
}
