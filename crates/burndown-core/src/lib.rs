//! Core domain logic for wekan-burndown.
//!
//! Holds the board/card data model, the parenthesized-estimate parser, the
//! day-bucketed timeline aggregation, plus the shared error type, CLI
//! settings, number formatting and timestamp utilities used by the data and
//! UI layers.

pub mod error;
pub mod estimate;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
pub mod timeline;
