//! Order entry library surface
//!
//! Exposes the line parser and renderers so the session loop in the
//! binary and the integration tests share one implementation.

pub mod error;
pub mod parser;
pub mod render;
