//! Registered voters and the directory that holds them.

mod directory;
mod voter_core;

pub use directory::Directory;
pub use voter_core::{Voter, VoterId};
