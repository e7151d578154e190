//! Registration, authentication, voting and tally core for a
//! self-contained voting booth.
//!
//! The crate is the logic layer only. A UI collaborator feeds it form
//! values and click events, renders the [`Screen`] it reports, and shows
//! the `Display` text of any [`Error`] as a modal. Registered voters and
//! cast votes persist as two JSON collections inside an opaque
//! [`KeyValueStore`]; everything else, the current screen and any
//! [`Session`], is transient and dies with the process.
//!
//! ```
//! use votebooth::workflow::{CredentialsForm, RegistrationForm};
//! use votebooth::{Booth, Candidate, Catalog, MemoryStore, Screen};
//!
//! let catalog = Catalog::new(vec![
//!     Candidate::new("1", "First Party"),
//!     Candidate::new("2", "N.O.T.A"),
//! ]);
//! let mut booth = Booth::new(MemoryStore::new(), catalog);
//!
//! booth.open_registration();
//! booth
//!     .submit_registration(&RegistrationForm {
//!         name: "Asha Kumar".into(),
//!         date_of_birth: "1990-05-14".into(),
//!         voter_id: "TN-1024".into(),
//!         phone_number: "9876543210".into(),
//!         password: "Abcdefg1!".into(),
//!         confirm_password: "Abcdefg1!".into(),
//!     })
//!     .unwrap();
//!
//! booth.open_voting();
//! let session = booth
//!     .submit_credentials(&CredentialsForm {
//!         voter_id: "TN-1024".into(),
//!         password: "Abcdefg1!".into(),
//!     })
//!     .unwrap();
//! booth.submit_vote(&session, Some("1")).unwrap();
//!
//! assert_eq!(Screen::VoteSuccess, booth.screen());
//! assert_eq!(1, booth.results()[0].count);
//! ```

pub mod booth;
pub mod error;
pub mod model;
pub mod screen;
pub mod workflow;

pub use booth::Booth;
pub use error::{AuthError, Error, Result, StateError, ValidationError};
pub use model::ballot::{BallotBox, Vote};
pub use model::candidate::{Candidate, CandidateKey, Catalog};
pub use model::session::Session;
pub use model::store::{Coll, FileStore, KeyValueStore, MemoryStore, StoreCollection};
pub use model::voter::{Directory, Voter, VoterId};
pub use screen::Screen;
