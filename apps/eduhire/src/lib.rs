//! Profile and resume-building core: client-side persistence of user records,
//! the profile document and its edits, completion scoring and resume
//! projection.

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod profile;
pub mod resume;
pub mod session;
pub mod state;
pub mod storage;
pub mod studio;
