//! # imsg-core
//!
//! Filtering core for message exports: ISO-8601 time codec, attachment path resolution,
//! and [`MessageFilter`] (participant allow-list plus half-open date range).
//!
//! ## Modules
//!
//! - [`iso8601`] – parse/format internet date-times
//! - [`attachment`] – resolve attachment paths, pick display names
//! - [`filter`] – MessageFilter
//! - [`types`] – Message, AttachmentRecord
//! - [`error`] – ImsgError
//! - [`logger`] – tracing initialisation

pub mod attachment;
pub mod error;
pub mod filter;
pub mod iso8601;
pub mod logger;
pub mod types;

pub use attachment::{display_name, resolve, AttachmentMeta, AttachmentResolution};
pub use error::{ImsgError, Result};
pub use filter::MessageFilter;
pub use logger::init_tracing;
pub use types::{AttachmentRecord, Message};
