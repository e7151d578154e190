//! Cast votes and the ballot box that stores them.

mod ballot_box;
mod ballot_core;

pub use ballot_box::BallotBox;
pub use ballot_core::Vote;
