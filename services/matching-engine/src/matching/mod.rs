//! Matching logic module
//!
//! Crossing detection for the price-time priority matching loop.

pub mod crossing;

pub use crossing::crosses;
