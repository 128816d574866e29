//! Data ingestion layer for wekan-burndown.
//!
//! Responsible for discovering and parsing wekan board export files,
//! resolving board and list titles to their documents, and handing the
//! selected cards to the timeline aggregator in sorted order.

pub mod reader;
pub mod resolver;

pub use burndown_core as core;
