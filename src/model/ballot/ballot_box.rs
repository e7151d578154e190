use std::collections::HashMap;

use crate::model::candidate::{CandidateKey, Catalog};
use crate::model::store::{Coll, KeyValueStore};

use super::Vote;

/// The append-only list of cast votes.
///
/// Nothing here enforces one vote per voter; that gate is the directory's
/// `has_voted` flag, checked by the voting workflow before anything is
/// appended.
pub struct BallotBox<'s> {
    votes: Coll<'s, Vote>,
}

impl<'s> BallotBox<'s> {
    /// Get a handle on the ballot box in the given store.
    pub fn from_store(store: &'s dyn KeyValueStore) -> Self {
        Self {
            votes: Coll::from_store(store),
        }
    }

    /// Append one vote and persist the collection.
    pub fn append(&self, vote: Vote) {
        let mut votes = self.votes.load();
        votes.push(vote);
        self.votes.save(&votes);
    }

    /// Count the stored votes per catalog key. Every catalog key appears in
    /// the result, zero included; options outside the catalog are ignored.
    pub fn tally(&self, catalog: &Catalog) -> HashMap<CandidateKey, u64> {
        let mut counts: HashMap<CandidateKey, u64> = catalog
            .iter()
            .map(|candidate| (candidate.key.clone(), 0))
            .collect();
        for vote in self.votes.load() {
            if let Some(count) = counts.get_mut(&vote.option) {
                *count += 1;
            }
        }
        counts
    }

    /// Number of stored votes.
    pub fn len(&self) -> usize {
        self.votes.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
