//! # File I/O Module
//!
//! Roster persistence with safety features:
//! - **Atomic saves**: write to .tmp, fsync, rename to prevent corruption
//! - **Version validation**: ensure schema compatibility on load
//! - **Contract validation**: reject files whose records violate the
//!   field contracts, even when the JSON itself is well-formed
//!
//! Roster files are human-readable JSON. The round trip preserves
//! insertion order, every field, and each record's concrete kind, so a
//! graduate record loaded back still applies its honor-roll override.
//!
//! ## Example
//!
//! ```rust,no_run
//! use roster_core::file_io::{save_roster, load_roster};
//! use roster_core::roster::Roster;
//! use std::path::Path;
//!
//! let roster = Roster::new();
//! let path = Path::new("students.roster");
//!
//! save_roster(&roster, path)?;
//! let restored = load_roster(path)?;
//! # Ok::<(), roster_core::errors::RosterError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{RosterError, RosterResult};
use crate::roster::{Roster, SCHEMA_VERSION};

/// Save a roster to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize the roster to pretty JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to the target (atomic on most filesystems)
///
/// This prevents a half-written file if the process is interrupted.
///
/// # Errors
///
/// * [`RosterError::SerializationError`] - roster failed to serialize
/// * [`RosterError::FileError`] - any I/O failure along the way
pub fn save_roster(roster: &Roster, path: &Path) -> RosterResult<()> {
    let json = serde_json::to_string_pretty(roster).map_err(|e| {
        RosterError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        RosterError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        RosterError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        RosterError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up the temp file if the rename fails
        let _ = fs::remove_file(&tmp_path);
        RosterError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a roster from a file.
///
/// # Errors
///
/// * [`RosterError::FileNotFound`] - the path does not exist
/// * [`RosterError::FileError`] - I/O failure while reading
/// * [`RosterError::SerializationError`] - invalid JSON, or a record
///   violating its field contracts
/// * [`RosterError::VersionMismatch`] - incompatible schema version
pub fn load_roster(path: &Path) -> RosterResult<Roster> {
    if !path.exists() {
        return Err(RosterError::file_not_found(path.display().to_string()));
    }

    let mut file = File::open(path).map_err(|e| {
        RosterError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        RosterError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let roster: Roster =
        serde_json::from_str(&contents).map_err(|e| RosterError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&roster.meta.version)?;

    // Well-formed JSON may still carry out-of-contract field values;
    // such files do not conform to the persistence contract.
    roster.validate().map_err(|e| RosterError::SerializationError {
        reason: format!("Contract violation in {}: {}", path.display(), e),
    })?;

    Ok(roster)
}

/// Temp file path used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> RosterResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(RosterError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(RosterError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions, a newer minor than ours is unreadable
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(RosterError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(())
}
