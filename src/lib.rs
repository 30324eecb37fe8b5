//! Mindhaven
//!
//! A mobile wellness app for healthcare workers: a carousel of topic
//! cards (music, breathing, coping with loss, affirmations) that open
//! into static detail content.
//!
//! The crates re-exported here split the app the usual way:
//! [`app_core`] holds the card model, the carousel controller, and the
//! detail content; [`app_ui`] holds component props, screens, and
//! navigation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core;
pub use app_ui;
