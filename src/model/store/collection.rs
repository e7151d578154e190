use std::marker::PhantomData;

use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::ballot::Vote;
use crate::model::voter::Voter;

use super::keyvalue::KeyValueStore;

/// A record type with a fixed home in the key-value store.
pub trait StoreCollection {
    /// The store entry this collection lives under.
    const KEY: &'static str;
}

/// A typed view of one stored collection: a JSON array of records kept
/// whole under a single store entry.
///
/// Storage failures are absorbed at this layer. `load` falls back to an
/// empty collection when the entry is absent, unreadable, or corrupt, and
/// `save` becomes a no-op when the substrate rejects the write; both leave
/// a diagnostic in the log. Callers above this layer never see an error.
pub struct Coll<'s, T> {
    store: &'s dyn KeyValueStore,
    _record: PhantomData<T>,
}

impl<'s, T> Coll<'s, T>
where
    T: StoreCollection,
{
    /// Get a handle on this collection in the given store.
    pub fn from_store(store: &'s dyn KeyValueStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

impl<T> Coll<'_, T>
where
    T: StoreCollection + Serialize + DeserializeOwned,
{
    /// Read the full collection; empty if absent or unreadable.
    pub fn load(&self) -> Vec<T> {
        let text = match self.store.get(T::KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!("Failed to read collection '{}': {err}", T::KEY);
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(err) => {
                error!("Corrupt collection '{}': {err}", T::KEY);
                Vec::new()
            }
        }
    }

    /// Write the full collection, replacing whatever was stored.
    pub fn save(&self, records: &[T]) {
        let text = match serde_json::to_string(records) {
            Ok(text) => text,
            Err(err) => {
                error!("Failed to serialize collection '{}': {err}", T::KEY);
                return;
            }
        };
        if let Err(err) = self.store.set(T::KEY, &text) {
            error!("Failed to write collection '{}': {err}", T::KEY);
        }
    }
}

/// Registered voters.
impl StoreCollection for Voter {
    const KEY: &'static str = "voter_users";
}

/// Cast votes.
impl StoreCollection for Vote {
    const KEY: &'static str = "voter_votes";
}
