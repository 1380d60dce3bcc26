//! Personality quiz engine.
//!
//! The [`quiz::scoring`] module holds the pure scoring core; everything around it
//! (intake, repository port, service, HTTP router) wires that core into a quiz-taking flow.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
