use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};
use crate::model::session::Session;
use crate::model::voter::Directory;

/// The credential form: the two fields the UI collects to sign a voter in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsForm {
    pub voter_id: String,
    pub password: String,
}

/// Check credentials against the directory and mint a session.
///
/// An unknown voter ID and a wrong password produce the same error, so a
/// caller cannot probe which IDs are registered. A voter whose ballot is
/// already spent cannot sign in again.
pub fn authenticate(directory: &Directory<'_>, form: &CredentialsForm) -> Result<Session> {
    let voter = directory
        .find_by_voter_id(&form.voter_id)
        .filter(|voter| voter.password == form.password)
        .ok_or(AuthError::InvalidCredentials)?;

    if voter.has_voted {
        return Err(AuthError::AlreadyVoted.into());
    }

    Ok(Session::new(voter.voter_id))
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl CredentialsForm {
        /// Matches [`Voter::example`](crate::model::voter::Voter::example).
        pub fn example() -> Self {
            Self {
                voter_id: "TN-1024".to_owned(),
                password: "Abcdefg1!".to_owned(),
            }
        }
    }
}
