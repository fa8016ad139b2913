//! Export config loaded from environment variables (optionally via `.env`).

use anyhow::{Context, Result};
use imsg_core::MessageFilter;
use std::env;

/// Default log file when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/imsg-export.log";

/// Filter settings and log destination for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// IMSG_PARTICIPANTS, comma-separated
    pub participants: Vec<String>,
    /// IMSG_START, raw ISO-8601 (inclusive)
    pub start: Option<String>,
    /// IMSG_END, raw ISO-8601 (exclusive)
    pub end: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl ExportConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Load through an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let participants = non_blank("IMSG_PARTICIPANTS")
            .map(|raw| parse_participants(&raw))
            .unwrap_or_default();
        let start = non_blank("IMSG_START").map(|s| s.trim().to_string());
        let end = non_blank("IMSG_END").map(|s| s.trim().to_string());
        let log_file = non_blank("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Self {
            participants,
            start,
            end,
            log_file,
        }
    }

    /// Build the message filter. Fails when IMSG_START or IMSG_END is not valid ISO-8601.
    pub fn filter(&self) -> Result<MessageFilter> {
        MessageFilter::from_iso(
            self.participants.clone(),
            self.start.as_deref(),
            self.end.as_deref(),
        )
        .context("IMSG_START / IMSG_END must be ISO-8601 date-times")
    }
}

/// Splits on commas, trims each entry, drops empty ones. Order and case are kept.
fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
