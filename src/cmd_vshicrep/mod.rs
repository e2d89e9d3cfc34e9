//! Subcommand modules for the `vshicrep` binary.

pub mod common;
pub mod compare;
pub mod compose;
pub mod scc_mean;
pub mod scc_scores;
