//! # imsg-export
//!
//! Environment-configured message export: reads NDJSON [`imsg_core::Message`] records, applies a
//! [`imsg_core::MessageFilter`], and writes admitted messages with resolved attachments.

pub mod config;
pub mod export;

pub use config::ExportConfig;
pub use export::{export_messages, ExportStats, ExportedMessage};
