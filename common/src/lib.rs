//! Platform-independent core of the course form client.
//!
//! Everything in here runs without a browser: the JSON highlighter, the form
//! state model, the synchronizer and the submission controller. The browser
//! binding lives in the `frontend` crate and plugs into the traits in [`ui`].

pub mod config;
pub mod highlight;
pub mod model;
pub mod requests;
pub mod submission;
pub mod sync;
pub mod ui;
