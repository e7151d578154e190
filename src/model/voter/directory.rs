use log::warn;

use crate::model::store::{Coll, KeyValueStore};

use super::Voter;

/// The registered-voter directory, backed by one stored collection.
///
/// Lookups are linear scans over the loaded collection; the directory is
/// sized for a single booth, not an electoral roll.
pub struct Directory<'s> {
    voters: Coll<'s, Voter>,
}

impl<'s> Directory<'s> {
    /// Get a handle on the directory in the given store.
    pub fn from_store(store: &'s dyn KeyValueStore) -> Self {
        Self {
            voters: Coll::from_store(store),
        }
    }

    /// Look up a voter by their ID.
    pub fn find_by_voter_id(&self, voter_id: &str) -> Option<Voter> {
        self.voters
            .load()
            .into_iter()
            .find(|voter| voter.voter_id.as_str() == voter_id)
    }

    /// Is this voter ID already taken?
    pub fn exists(&self, voter_id: &str) -> bool {
        self.find_by_voter_id(voter_id).is_some()
    }

    /// Insert a new voter. The caller has already checked that the ID is
    /// unused; the directory does not re-check.
    pub fn register(&self, voter: Voter) {
        let mut voters = self.voters.load();
        voters.push(voter);
        self.voters.save(&voters);
    }

    /// Flip `has_voted` on the matching record and persist the collection.
    /// Returns whether a record matched.
    pub fn mark_voted(&self, voter_id: &str) -> bool {
        let mut voters = self.voters.load();
        match voters
            .iter_mut()
            .find(|voter| voter.voter_id.as_str() == voter_id)
        {
            Some(voter) => {
                voter.has_voted = true;
                self.voters.save(&voters);
                true
            }
            None => {
                warn!("No voter record matched ID '{voter_id}' when marking voted");
                false
            }
        }
    }

    /// Number of registered voters.
    pub fn len(&self) -> usize {
        self.voters.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
