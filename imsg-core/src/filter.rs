//! Message filter: participant allow-list plus a half-open date range `[start, end)`.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{ImsgError, Result};
use crate::iso8601;
use crate::types::Message;

/// Immutable predicate deciding which messages pass into an export.
///
/// An empty `participants` list and unset bounds mean "no restriction" on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub participants: Vec<String>,
    /// Inclusive lower bound.
    pub start_date: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub end_date: Option<DateTime<Utc>>,
}

impl MessageFilter {
    pub fn new(
        participants: Vec<String>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            participants,
            start_date,
            end_date,
        }
    }

    /// Builds a filter from raw ISO-8601 bounds. An absent bound leaves that side open;
    /// a present bound that does not parse fails with [`ImsgError::InvalidIsoDate`].
    /// The start bound is checked first.
    pub fn from_iso(
        participants: Vec<String>,
        start_iso: Option<&str>,
        end_iso: Option<&str>,
    ) -> Result<Self> {
        let start_date = parse_bound(start_iso)?;
        let end_date = parse_bound(end_iso)?;
        Ok(Self::new(participants, start_date, end_date))
    }

    /// True when `message` falls inside `[start_date, end_date)` and, if participants are set,
    /// its sender case-insensitively equals one of them.
    pub fn allows(&self, message: &Message) -> bool {
        if let Some(start) = self.start_date {
            if message.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if message.date >= end {
                return false;
            }
        }
        if !self.participants.is_empty()
            && !self
                .participants
                .iter()
                .any(|p| caseless_eq(p, &message.sender))
        {
            return false;
        }
        true
    }

    /// Yields the admitted messages, preserving input order.
    pub fn apply<'a, I>(&'a self, messages: I) -> impl Iterator<Item = &'a Message> + 'a
    where
        I: IntoIterator<Item = &'a Message>,
        I::IntoIter: 'a,
    {
        messages.into_iter().filter(move |m| self.allows(m))
    }

    /// True when the filter admits every message.
    pub fn is_unrestricted(&self) -> bool {
        self.participants.is_empty() && self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Per-character case folding: uppercase then lowercase each char. Avoids the context rules of
/// `str::to_lowercase` (Greek final sigma) and folds `ß` to `ss`.
fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

fn caseless_eq(a: &str, b: &str) -> bool {
    fold_case(a).eq(fold_case(b))
}

fn parse_bound(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match iso8601::parse(raw) {
        Some(date) => Ok(Some(date)),
        None => {
            warn!(value = %raw, "rejecting unparsable date bound");
            Err(ImsgError::InvalidIsoDate(raw.to_string()))
        }
    }
}
