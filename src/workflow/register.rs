use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::model::voter::{Directory, Voter};

/// The symbols that satisfy the password symbol requirement.
const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// The registration form, field for field as the UI collects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub date_of_birth: String,
    pub voter_id: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate a registration form and insert the new voter.
///
/// The checks run in order and the first failure wins: every field present,
/// the two passwords equal, the password strong enough, the voter ID
/// unused. Nothing is persisted unless all four pass.
pub fn register(directory: &Directory<'_>, form: &RegistrationForm) -> Result<()> {
    if form.name.is_empty()
        || form.date_of_birth.is_empty()
        || form.voter_id.is_empty()
        || form.phone_number.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(ValidationError::MissingFields.into());
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch.into());
    }

    if !is_strong(&form.password) {
        return Err(ValidationError::WeakPassword.into());
    }

    if directory.exists(&form.voter_id) {
        return Err(ValidationError::DuplicateVoter.into());
    }

    directory.register(Voter::new(
        form.name.clone(),
        form.date_of_birth.clone(),
        form.voter_id.clone(),
        form.phone_number.clone(),
        form.password.clone(),
    ));
    Ok(())
}

/// At least 8 characters, with an ASCII uppercase letter, a lowercase
/// letter, a digit, and a symbol from [`PASSWORD_SYMBOLS`].
fn is_strong(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
