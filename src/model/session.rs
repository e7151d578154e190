use chrono::{DateTime, Utc};

use crate::model::voter::VoterId;

/// Proof of a successful credential check.
///
/// Only the authentication workflow can mint one, so holding a `Session` is
/// holding the outcome of that check; the voting workflow demands one
/// rather than trusting identity read back out of mutable UI state. A
/// session is never persisted and dies with the process. It does not expire
/// on its own: a booth serves one voter at a time, and the `has_voted` flag
/// stops a stale session from voting twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    voter_id: VoterId,
    issued_at: DateTime<Utc>,
}

impl Session {
    /// Mint a session for a voter whose credentials just checked out.
    pub(crate) fn new(voter_id: VoterId) -> Self {
        Self {
            voter_id,
            issued_at: Utc::now(),
        }
    }

    /// The authenticated voter.
    pub fn voter_id(&self) -> &VoterId {
        &self.voter_id
    }

    /// When the credential check happened.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
