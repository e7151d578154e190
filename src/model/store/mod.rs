//! The persistence substrate: an opaque key-value store and the typed
//! collections kept inside it.

mod collection;
mod keyvalue;

pub use collection::{Coll, StoreCollection};
pub use keyvalue::{FileStore, KeyValueStore, MemoryStore};
