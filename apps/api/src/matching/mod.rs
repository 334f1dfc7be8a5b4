//! Candidate ↔ posting matching: the weighted scorer, ranking with reasons,
//! career-goal keywords and the static suggestion tables.

pub mod goals;
pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod suggestions;
