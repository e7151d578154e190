//! The user-initiated operations, one per module: each takes the form
//! values or session the UI holds, runs its checks in a fixed order, and
//! either persists the outcome or reports the first failure.

mod authenticate;
mod register;
mod results;
mod vote;

pub use authenticate::{authenticate, CredentialsForm};
pub use register::{register, RegistrationForm};
pub use results::{results, ResultsRow};
pub use vote::cast_vote;
