//! Terminal user interface
//!
//! Presentation layer for the session: an [`App`] owning the state machines
//! and pages, a crossterm event pump, and a draw dispatch that applies the
//! rendering precedence (wallet provisioning screens, then an open order
//! draft, then the active view).

pub mod app;
pub mod events;
pub mod pages;
pub mod runner;
pub mod ui;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::run;
