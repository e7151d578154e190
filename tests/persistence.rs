//! End-to-end persistence: booth data must survive a restart, which a
//! fresh `Booth` over the same store directory simulates.

use tempfile::tempdir;
use votebooth::workflow::{CredentialsForm, RegistrationForm};
use votebooth::{
    AuthError, Booth, Candidate, Catalog, Error, FileStore, Screen, ValidationError,
};

fn catalog() -> Catalog {
    Catalog::new(vec![
        Candidate::new("1", "First Party"),
        Candidate::new("2", "Second Party"),
        Candidate::new("3", "N.O.T.A"),
    ])
}

fn registration() -> RegistrationForm {
    RegistrationForm {
        name: "Asha Kumar".to_owned(),
        date_of_birth: "1990-05-14".to_owned(),
        voter_id: "TN-1024".to_owned(),
        phone_number: "9876543210".to_owned(),
        password: "Abcdefg1!".to_owned(),
        confirm_password: "Abcdefg1!".to_owned(),
    }
}

fn credentials() -> CredentialsForm {
    CredentialsForm {
        voter_id: "TN-1024".to_owned(),
        password: "Abcdefg1!".to_owned(),
    }
}

#[test]
fn registrations_and_votes_survive_a_restart() {
    let dir = tempdir().unwrap();

    {
        let mut booth = Booth::new(FileStore::open(dir.path()).unwrap(), catalog());
        booth.open_registration();
        booth.submit_registration(&registration()).unwrap();

        booth.open_voting();
        let session = booth.submit_credentials(&credentials()).unwrap();
        booth.submit_vote(&session, Some("2")).unwrap();
    }

    let mut booth = Booth::new(FileStore::open(dir.path()).unwrap(), catalog());
    assert_eq!(Screen::Home, booth.screen());

    let counts = booth.results().iter().map(|row| row.count).collect::<Vec<_>>();
    assert_eq!(vec![0, 1, 0], counts);

    booth.open_voting();
    assert_eq!(
        Err(Error::Auth(AuthError::AlreadyVoted)),
        booth.submit_credentials(&credentials())
    );
}

#[test]
fn a_duplicate_registration_is_rejected_after_a_restart() {
    let dir = tempdir().unwrap();

    {
        let mut booth = Booth::new(FileStore::open(dir.path()).unwrap(), catalog());
        booth.open_registration();
        booth.submit_registration(&registration()).unwrap();
    }

    let mut booth = Booth::new(FileStore::open(dir.path()).unwrap(), catalog());
    booth.open_registration();

    assert_eq!(
        Err(Error::Validation(ValidationError::DuplicateVoter)),
        booth.submit_registration(&registration())
    );
}

#[test]
fn the_stored_layout_is_stable_json() {
    let dir = tempdir().unwrap();

    {
        let mut booth = Booth::new(FileStore::open(dir.path()).unwrap(), catalog());
        booth.open_registration();
        booth.submit_registration(&registration()).unwrap();
        booth.open_voting();
        let session = booth.submit_credentials(&credentials()).unwrap();
        booth.submit_vote(&session, Some("2")).unwrap();
    }

    let users: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("voter_users")).unwrap())
            .unwrap();
    let user = &users[0];
    for field in [
        "name",
        "dateOfBirth",
        "voterId",
        "phoneNumber",
        "password",
        "hasVoted",
    ] {
        assert!(user.get(field).is_some(), "user is missing '{field}'");
    }
    assert_eq!("TN-1024", user["voterId"]);
    assert_eq!(true, user["hasVoted"]);

    let votes: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("voter_votes")).unwrap())
            .unwrap();
    let vote = &votes[0];
    assert_eq!("TN-1024", vote["voterId"]);
    assert_eq!("2", vote["option"]);
    chrono::DateTime::parse_from_rfc3339(vote["timestamp"].as_str().unwrap()).unwrap();
}
