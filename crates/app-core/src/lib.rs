//! Core application logic for Mindhaven
//!
//! This crate contains the card model and deck decoding, the carousel
//! controller that drives browsing, and the detail content lookup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod cards;
pub mod carousel;
pub mod content;

pub use cards::{Card, DeckError};
pub use carousel::{
    CarouselConfig, CarouselController, CarouselEvent, IndicatorState, MoveOutcome, MoveRejection,
};
pub use content::{DetailContent, DetailTopic};
