//! User interface for Mindhaven
//!
//! This crate provides the UI layer: headless component props, screen
//! glue, and the navigation framework.
//!
//! # Modules
//!
//! - [`components`] - Serializable view props for the carousel widgets
//! - [`navigation`] - Routes, URL router, and navigation stack
//! - [`screens`] - Home and detail screen glue

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;

// Re-export commonly used types
pub use components::{ArrowSide, CardProps, NavArrowProps, PageIndicatorProps};
pub use navigation::{NavigationState, Route, Router};
pub use screens::{CarouselCommand, DetailScreen, HomeScreen, SwipeDirection};
