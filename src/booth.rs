use log::debug;

use crate::error::Result;
use crate::model::ballot::{BallotBox, Vote};
use crate::model::candidate::Catalog;
use crate::model::session::Session;
use crate::model::store::KeyValueStore;
use crate::model::voter::Directory;
use crate::screen::Screen;
use crate::workflow::{self, CredentialsForm, RegistrationForm, ResultsRow};

/// The single entry point a UI drives: the store, the candidate catalog,
/// and the screen currently shown.
///
/// Submit methods run one workflow to completion. On success the screen
/// advances; on failure it stays put and the returned error's `Display` is
/// the modal text to show. Navigation methods mirror the booth's buttons
/// and links and never touch stored data.
pub struct Booth<S> {
    store: S,
    catalog: Catalog,
    screen: Screen,
}

impl<S> Booth<S>
where
    S: KeyValueStore,
{
    /// Open a booth over the given store, starting on the home screen.
    ///
    /// The store may already hold voters and votes from an earlier run;
    /// they are picked up as-is.
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self {
            store,
            catalog,
            screen: Screen::Home,
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The fixed candidate catalog, in ballot order.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Back to the landing screen.
    pub fn go_home(&mut self) {
        self.transition(Screen::Home);
    }

    /// Open the registration form.
    pub fn open_registration(&mut self) {
        self.transition(Screen::Register);
    }

    /// Open the voting flow. This always re-enters credential entry; any
    /// session or selection a UI still holds is stale from here on.
    pub fn open_voting(&mut self) {
        self.transition(Screen::Authenticate);
    }

    /// Open the results table. Allowed from every screen.
    pub fn open_results(&mut self) {
        self.transition(Screen::Results);
    }

    /// Submit the registration form.
    pub fn submit_registration(&mut self, form: &RegistrationForm) -> Result<()> {
        workflow::register(&Directory::from_store(&self.store), form)?;
        self.transition(Screen::RegistrationSuccess);
        Ok(())
    }

    /// Submit credentials; the minted session comes back on success and is
    /// what [`Booth::submit_vote`] will demand.
    pub fn submit_credentials(&mut self, form: &CredentialsForm) -> Result<Session> {
        let session = workflow::authenticate(&Directory::from_store(&self.store), form)?;
        self.transition(Screen::SelectCandidate);
        Ok(session)
    }

    /// Submit the vote for the selected candidate key.
    pub fn submit_vote(&mut self, session: &Session, selection: Option<&str>) -> Result<Vote> {
        let vote = workflow::cast_vote(
            &Directory::from_store(&self.store),
            &BallotBox::from_store(&self.store),
            session,
            selection,
        )?;
        self.transition(Screen::VoteSuccess);
        Ok(vote)
    }

    /// Recompute the results table from the stored votes.
    pub fn results(&self) -> Vec<ResultsRow> {
        workflow::results(&BallotBox::from_store(&self.store), &self.catalog)
    }

    fn transition(&mut self, next: Screen) {
        let current = self.screen;
        debug!("Screen {current:?} -> {next:?}");
        self.screen = next;
    }
}
