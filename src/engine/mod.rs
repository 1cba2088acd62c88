//! Caller-facing boundary of the Severance Engine.
//!
//! A form adapter calls [`SeveranceEngine::submit`] with the raw field values
//! and renders the returned [`Submission`]. On startup it restores state with
//! [`SeveranceEngine::load_last`] and the history list.

mod severance_engine;
mod submission;

pub use severance_engine::SeveranceEngine;
pub use submission::Submission;
