//! The data layer: entities, their stored collections, and the storage
//! substrate beneath them.

pub mod ballot;
pub mod candidate;
pub mod session;
pub mod store;
pub mod voter;
