use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure a workflow can surface to the user.
///
/// The `Display` of every leaf variant is the exact modal text the UI is
/// expected to show. Callers that only care about the broad category match
/// on the wrapper variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    State(#[from] StateError),
}

/// Malformed, missing, or weak input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all the required fields.")]
    MissingFields,
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long and contain at least one uppercase letter, one lowercase letter, one number, and one symbol.")]
    WeakPassword,
    #[error("Voter ID already registered. Please use a different one or authenticate to vote.")]
    DuplicateVoter,
    #[error("Please select a candidate to vote.")]
    NoSelection,
}

/// Failed credential check or voter lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown voter ID or wrong password, deliberately indistinguishable.
    #[error("Invalid Voter ID or password. Please try again.")]
    InvalidCredentials,
    /// Credentials were valid, but this voter has already cast a ballot.
    #[error("You have already voted.")]
    AlreadyVoted,
    /// The session's voter no longer resolves to a directory record.
    #[error("Authentication failed. Please try again.")]
    UnknownVoter,
}

/// The voter's stored record forbids the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("You have already voted.")]
    AlreadyVoted,
}
