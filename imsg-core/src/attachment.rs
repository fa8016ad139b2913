//! Attachment path resolution and display naming.
//!
//! Attachment rows reference files by path, often with home-directory shorthand (`~/Library/...`).
//! [`resolve`] expands that shorthand and probes the filesystem once; anything other than an
//! existing non-directory entry is reported as missing. Probe errors are never propagated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::AttachmentRecord;

/// Placeholder returned by [`display_name`] when neither name is available.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// Result of [`resolve`]: the expanded path and whether a usable file is absent there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentResolution {
    pub resolved: String,
    pub missing: bool,
}

impl From<AttachmentResolution> for (String, bool) {
    fn from(resolution: AttachmentResolution) -> Self {
        (resolution.resolved, resolution.missing)
    }
}

/// Expands a leading `~` and reports whether the target is missing.
///
/// Empty input resolves to `("", missing)`. A directory at the resolved path counts as missing.
pub fn resolve(path: &str) -> AttachmentResolution {
    if path.is_empty() {
        return AttachmentResolution {
            resolved: String::new(),
            missing: true,
        };
    }

    let expanded = expand_home(path);
    let missing = !is_present_file(&expanded);
    AttachmentResolution {
        resolved: expanded.to_string_lossy().into_owned(),
        missing,
    }
}

/// Name to show for an attachment: transfer name, then filename, then [`UNKNOWN_NAME`].
pub fn display_name(filename: &str, transfer_name: &str) -> String {
    if !transfer_name.is_empty() {
        return transfer_name.to_string();
    }
    if !filename.is_empty() {
        return filename.to_string();
    }
    UNKNOWN_NAME.to_string()
}

/// `~` and `~/rest` map into the home directory. `~user` forms and paths without a leading
/// tilde are returned unchanged, as is everything when the home directory is unknown.
fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

fn is_present_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => !meta.is_dir(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "attachment probe failed");
            false
        }
    }
}

/// Resolved, display-ready view of an [`AttachmentRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    pub display_name: String,
    pub original_path: String,
    pub mime_type: String,
    pub total_bytes: i64,
    pub missing: bool,
}

impl AttachmentMeta {
    /// Resolves the record's path and picks its display name.
    pub fn from_record(record: &AttachmentRecord) -> Self {
        let resolution = resolve(&record.path);
        Self {
            display_name: display_name(&record.filename, &record.transfer_name),
            original_path: resolution.resolved,
            mime_type: record.mime_type.clone(),
            total_bytes: record.total_bytes,
            missing: resolution.missing,
        }
    }
}
