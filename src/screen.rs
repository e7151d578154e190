/// The booth's UI-level states, one per screen it can show.
///
/// The current screen is transient: it lives in the [`Booth`] value and
/// resets to [`Screen::Home`] whenever a booth opens, no matter what the
/// store holds. Credential entry and candidate selection are
/// distinct states even if a UI renders them inside a single page:
/// entering [`Screen::Authenticate`] always means a fresh credential
/// check, never a resumed one.
///
/// [`Booth`]: crate::Booth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The landing screen offering registration, voting, and results.
    Home,
    /// The registration form.
    Register,
    /// Confirmation after a successful registration.
    RegistrationSuccess,
    /// Credential entry, the only gate into candidate selection.
    Authenticate,
    /// Candidate selection for the voter who just authenticated.
    SelectCandidate,
    /// Confirmation after a successfully cast vote.
    VoteSuccess,
    /// The read-only tally table, reachable from anywhere.
    Results,
}
