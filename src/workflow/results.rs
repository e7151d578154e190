use serde::Serialize;

use crate::model::ballot::BallotBox;
use crate::model::candidate::{CandidateKey, Catalog};

/// One line of the results table, ready to hand to a UI or an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsRow {
    pub key: CandidateKey,
    pub name: String,
    pub count: u64,
}

/// Recompute the per-candidate counts from the stored votes: one row per
/// catalog entry, in catalog order. A pure read; nothing is cached and
/// nothing is written.
pub fn results(ballot_box: &BallotBox<'_>, catalog: &Catalog) -> Vec<ResultsRow> {
    let counts = ballot_box.tally(catalog);
    catalog
        .iter()
        .map(|candidate| ResultsRow {
            key: candidate.key.clone(),
            name: candidate.name.clone(),
            count: counts.get(&candidate.key).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::model::ballot::Vote;
    use crate::model::store::MemoryStore;

    use super::*;

    #[test]
    fn rows_follow_catalog_order_with_zero_counts() {
        let store = MemoryStore::new();
        let rows = results(&BallotBox::from_store(&store), &Catalog::example());

        let keys = rows.iter().map(|row| row.key.as_str()).collect::<Vec<_>>();
        assert_eq!(vec!["1", "2", "3", "4", "5"], keys);
        assert!(rows.iter().all(|row| row.count == 0));
        assert_eq!("N.O.T.A", rows[4].name);
    }

    #[test]
    fn counts_reflect_the_stored_votes() {
        let store = MemoryStore::new();
        let ballot_box = BallotBox::from_store(&store);
        ballot_box.append(Vote::new("TN-1024", "2"));
        ballot_box.append(Vote::new("TN-2048", "2"));
        ballot_box.append(Vote::new("TN-4096", "5"));

        let rows = results(&ballot_box, &Catalog::example());

        assert_eq!(
            vec![0, 2, 0, 0, 1],
            rows.iter().map(|row| row.count).collect::<Vec<_>>()
        );
    }

    #[test]
    fn rows_serialize_for_a_ui() {
        let store = MemoryStore::new();
        let rows = results(&BallotBox::from_store(&store), &Catalog::example());

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!("1", json["key"]);
        assert_eq!("DMK Party", json["name"]);
        assert_eq!(0, json["count"]);
    }
}
