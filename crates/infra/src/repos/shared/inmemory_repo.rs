use super::repo::DeleteResult;
use lab_reminders_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    // Every write leaves the Vec consistent, poisoning is ignored
    collection.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Inserts `val` unless an item matching `exists` is already stored.
/// The check and the insert happen under the same lock.
pub fn insert_unless<T: Clone, F: Fn(&T) -> bool>(
    val: &T,
    collection: &Mutex<Vec<T>>,
    exists: F,
) -> bool {
    let mut collection = lock(collection);
    if collection.iter().any(|item| exists(item)) {
        return false;
    }
    collection.push(val.clone());
    true
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    lock(collection)
        .iter()
        .find(|item| item.id() == val_id)
        .cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    lock(collection)
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = lock(collection);
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

pub fn delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> DeleteResult {
    DeleteResult {
        deleted_count: find_and_delete_by(collection, compare).len() as i64,
    }
}

pub fn find_and_delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = lock(collection);
    let mut deleted_items = Vec::new();
    let mut kept_items = Vec::with_capacity(collection.len());

    for item in collection.drain(..) {
        if compare(&item) {
            deleted_items.push(item);
        } else {
            kept_items.push(item);
        }
    }
    *collection = kept_items;

    deleted_items
}

/// Applies `merge` to the item matching `matches`, or inserts `val`
/// when there is none
pub fn upsert<T: Clone, F: Fn(&T) -> bool, U: FnOnce(&mut T)>(
    val: &T,
    collection: &Mutex<Vec<T>>,
    matches: F,
    merge: U,
) {
    let mut collection = lock(collection);
    match collection.iter_mut().find(|item| matches(item)) {
        Some(existing) => merge(existing),
        None => collection.push(val.clone()),
    }
}
