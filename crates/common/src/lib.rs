//! Pieces shared by every crate in the workspace: tracing setup and the
//! small wire types that are not tied to a single entity.

pub mod types;
pub mod utils;
