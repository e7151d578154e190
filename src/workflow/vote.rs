use crate::error::{AuthError, Result, StateError, ValidationError};
use crate::model::ballot::{BallotBox, Vote};
use crate::model::session::Session;
use crate::model::voter::Directory;

/// Record the authenticated voter's selection.
///
/// The preconditions run in order: something is selected, the session's
/// voter still resolves to a directory record, and their ballot is not yet
/// spent. On success the vote lands in the ballot box first and the
/// voter's `has_voted` flag flips second; the recorded vote is returned.
///
/// The selection is taken on faith. A key outside the catalog is stored
/// like any other and simply never counted, matching the storage contract
/// that the tally, not the cast, filters unknown options.
pub fn cast_vote(
    directory: &Directory<'_>,
    ballot_box: &BallotBox<'_>,
    session: &Session,
    selection: Option<&str>,
) -> Result<Vote> {
    let option = selection.ok_or(ValidationError::NoSelection)?;

    let voter = directory
        .find_by_voter_id(session.voter_id())
        .ok_or(AuthError::UnknownVoter)?;

    if voter.has_voted {
        return Err(StateError::AlreadyVoted.into());
    }

    let vote = Vote::new(voter.voter_id.clone(), option);
    ballot_box.append(vote.clone());
    directory.mark_voted(&voter.voter_id);
    Ok(vote)
}
