use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A voter's self-chosen unique identifier, the key into the directory.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for VoterId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for VoterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for VoterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VoterId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Core voter data, exactly as the directory stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub name: String,
    pub date_of_birth: String,
    pub voter_id: VoterId,
    pub phone_number: String,
    /// Stored and compared in plaintext; part of the persisted layout, not
    /// a security measure.
    pub password: String,
    /// One-way flag flipped by the voting workflow, never cleared.
    pub has_voted: bool,
}

impl Voter {
    /// A freshly registered voter who has not yet cast a ballot.
    pub fn new(
        name: String,
        date_of_birth: String,
        voter_id: impl Into<VoterId>,
        phone_number: String,
        password: String,
    ) -> Self {
        Self {
            name,
            date_of_birth,
            voter_id: voter_id.into(),
            phone_number,
            password,
            has_voted: false,
        }
    }
}
