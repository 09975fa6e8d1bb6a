//! Symptom-to-disease triage pipeline: reference tables, feature encoding,
//! a decision-tree classifier, top-N ranking, and the HTTP layer serving it.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod logging;
