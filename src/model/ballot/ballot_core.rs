use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::candidate::CandidateKey;
use crate::model::voter::VoterId;

/// A single cast vote, exactly as the ballot box stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    /// Who cast it.
    pub voter_id: VoterId,
    /// The chosen candidate key. Not validated against the catalog when
    /// cast; unknown keys simply never show up in a tally.
    pub option: CandidateKey,
    /// When it was cast; ISO-8601 in the persisted form.
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    /// A vote cast right now.
    pub fn new(voter_id: impl Into<VoterId>, option: impl Into<CandidateKey>) -> Self {
        Self {
            voter_id: voter_id.into(),
            option: option.into(),
            timestamp: Utc::now(),
        }
    }
}
