//! Terminal UI layer for wekan-burndown.
//!
//! Provides themes, the burndown chart view, and the application event loop
//! built on top of [`ratatui`] for rendering the cumulative-progress series
//! in the terminal.

pub mod app;
pub mod chart_view;
pub mod themes;

pub use burndown_core as core;
