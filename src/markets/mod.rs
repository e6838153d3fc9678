//! Synthetic market data
//!
//! Markets are never stored: every view recomputes them from
//! `(index, category)` through [`generator::generate`], a pure function.

pub mod categories;
pub mod generator;

pub use categories::Category;
pub use generator::{generate, Market};
