use selas_core::{FavoriteKey, FavoritesStore};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const KEYS: [FavoriteKey; 6] = [-3, 0, 1, 10, 20, i64::MAX];

fn store_with(keys: &[FavoriteKey]) -> FavoritesStore<FavoriteKey> {
    let store = FavoritesStore::new();
    for key in keys {
        store.add_favorite(*key);
    }
    store
}

#[test]
fn repeated_add_matches_single_add() {
    for key in KEYS {
        let once = store_with(&[1, 2]);
        once.add_favorite(key);

        let twice = store_with(&[1, 2]);
        twice.add_favorite(key);
        twice.add_favorite(key);

        assert_eq!(once.snapshot(), twice.snapshot(), "key {key}");
    }
}

#[test]
fn removing_absent_key_leaves_snapshot_unchanged() {
    let store = store_with(&[5, 7]);
    let before = store.snapshot();
    for key in [0, 6, 8, -5] {
        assert!(!store.remove_favorite(&key));
    }
    assert_eq!(store.snapshot(), before);
}

#[test]
fn add_then_remove_restores_original_snapshot() {
    let store = store_with(&[4, 2, 9]);
    let original = store.snapshot();
    for key in [1, 3, 100] {
        assert!(store.add_favorite(key));
        assert!(store.remove_favorite(&key));
        assert_eq!(store.snapshot(), original, "key {key}");
    }
}

#[test]
fn membership_agrees_with_latest_snapshot() {
    let store = store_with(&[10, 1]);
    store.remove_favorite(&10);
    store.add_favorite(20);
    let snapshot = store.snapshot();
    for key in KEYS {
        assert_eq!(store.is_favorite(&key), snapshot.contains(&key), "key {key}");
    }
}

#[test]
fn concrete_favorites_scenario() {
    let store = FavoritesStore::new();
    store.add_favorite(10);
    store.add_favorite(1);
    assert_eq!(store.snapshot().keys(), &[10, 1]);
    assert!(!store.is_favorite(&2));

    store.remove_favorite(&10);
    assert_eq!(store.snapshot().to_vec(), vec![1]);
}

#[test]
fn concurrent_writers_do_not_lose_updates() {
    let store = Arc::new(FavoritesStore::<FavoriteKey>::new());
    let handles = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for offset in 0..50 {
                    store.add_favorite(worker * 1_000 + offset);
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().expect("writer thread should not panic");
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 8 * 50);
    for worker in 0..8 {
        assert!(snapshot.contains(&(worker * 1_000 + 49)));
    }
}

#[tokio::test]
async fn new_subscriber_gets_current_snapshot_immediately() {
    let store = store_with(&[3, 4]);
    let mut subscription = store.subscribe();
    assert_eq!(subscription.current().keys(), &[3, 4]);

    let first = subscription.next().await.expect("current value is available");
    assert_eq!(first.keys(), &[3, 4]);
}

#[tokio::test]
async fn subscriber_observes_later_changes() {
    let store = Arc::new(FavoritesStore::<FavoriteKey>::new());
    let mut subscription = store.subscribe();
    assert!(subscription.next().await.expect("initial").is_empty());

    let writer = Arc::clone(&store);
    let task = tokio::spawn(async move {
        writer.add_favorite(42);
    });

    let next = tokio::time::timeout(Duration::from_secs(5), subscription.next())
        .await
        .expect("change should arrive")
        .expect("store is alive");
    assert_eq!(next.keys(), &[42]);
    task.await.expect("writer task should finish");
}

#[tokio::test]
async fn noop_mutations_are_not_emitted() {
    let store = store_with(&[1]);
    let mut subscription = store.subscribe();
    subscription.next().await.expect("initial");

    store.add_favorite(1);
    store.remove_favorite(&2);
    assert!(!subscription.has_pending());

    store.add_favorite(2);
    assert!(subscription.has_pending());
    assert_eq!(subscription.next().await.expect("change").keys(), &[1, 2]);
}

#[tokio::test]
async fn resubscribing_restarts_from_current_value() {
    let store = store_with(&[8]);
    let mut first = store.subscribe();
    first.next().await.expect("initial");
    store.add_favorite(9);
    drop(first);

    let mut second = store.subscribe();
    assert_eq!(second.next().await.expect("current").keys(), &[8, 9]);
}

#[tokio::test]
async fn subscription_ends_when_store_is_dropped() {
    let store = store_with(&[1]);
    let mut subscription = store.subscribe();
    subscription.next().await.expect("initial");
    drop(store);
    assert!(subscription.next().await.is_none());
}
