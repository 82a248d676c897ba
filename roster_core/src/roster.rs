//! # Roster Store
//!
//! The `Roster` is the root container that gets persisted to disk. Records
//! live in a `Vec` whose insertion order is the canonical order; duplicates
//! by value are permitted and names are not unique.
//!
//! Every query that returns a collection hands back an independent copy,
//! so a caller mutating a result can never corrupt the internal sequence.
//!
//! ## Structure
//!
//! ```text
//! Roster
//! ├── meta: RosterMetadata (schema version, timestamps)
//! └── records: Vec<Record> (insertion order, private)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roster_core::roster::Roster;
//! use roster_core::records::StudentRecord;
//!
//! let mut roster = Roster::new();
//! roster.insert(StudentRecord::new("Alice", 20, 3.8).unwrap().into());
//!
//! assert_eq!(roster.count(), 1);
//! let json = serde_json::to_string_pretty(&roster).unwrap();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RosterResult;
use crate::grading::Gradeable;
use crate::records::Record;

/// Current schema version for roster files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root roster container.
///
/// This is the top-level struct that gets serialized to roster files.
/// The record sequence is private so the insertion-order invariant and
/// the copy-on-return guarantee cannot be bypassed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Roster metadata (schema version, timestamps)
    pub meta: RosterMetadata,

    /// All records, in insertion order
    records: Vec<Record>,
}

impl Roster {
    /// Create a new empty roster stamped with the current schema version.
    pub fn new() -> Self {
        let now = Utc::now();
        Roster {
            meta: RosterMetadata {
                version: SCHEMA_VERSION.to_string(),
                created: now,
                modified: now,
            },
            records: Vec::new(),
        }
    }

    /// Append a record at the end of the roster.
    ///
    /// No uniqueness check: the record model already enforced field
    /// validity at construction, and duplicate names/values are allowed.
    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
        self.touch();
    }

    /// First record whose name matches case-insensitively (exact match,
    /// not substring). `None` when nothing matches.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name_matches(name))
    }

    /// Remove ALL records whose name matches case-insensitively.
    ///
    /// Returns whether any removal occurred; the modified timestamp is
    /// only updated when something was actually removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| !r.name_matches(name));
        let removed = self.records.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Records on the honor roll, in roster order.
    ///
    /// Uses each record's own honor-roll rule, so graduate records apply
    /// their higher threshold.
    pub fn honor_roll_members(&self) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.is_honor_roll())
            .cloned()
            .collect()
    }

    /// Split the roster into (honor roll, everyone else), both in roster
    /// order.
    pub fn partition_by_honor_roll(&self) -> (Vec<Record>, Vec<Record>) {
        self.records
            .iter()
            .cloned()
            .partition(|r| r.is_honor_roll())
    }

    /// Mean GPA across all records; 0.0 for an empty roster.
    pub fn average_gpa(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().map(|r| r.gpa()).sum::<f64>() / self.records.len() as f64
    }

    /// A fresh copy sorted by natural order: GPA descending, then name
    /// ascending (case-insensitive). The internal order is untouched.
    pub fn ranked_by_gpa(&self) -> Vec<Record> {
        let mut ranked = self.records.clone();
        ranked.sort_by(|a, b| a.rank_cmp(b));
        ranked
    }

    /// Number of records currently in the roster
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot copy of the current contents in insertion order.
    pub fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Re-check every record's field contracts.
    ///
    /// Rosters built through `insert` always pass; the persistence layer
    /// calls this to reject files whose contents violate the contracts.
    pub fn validate(&self) -> RosterResult<()> {
        for record in &self.records {
            record.validate()?;
        }
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

/// Roster metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the roster was created
    pub created: DateTime<Utc>,

    /// When the roster was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{GraduateRecord, StudentRecord};

    fn student(name: &str, gpa: f64) -> Record {
        StudentRecord::new(name, 20, gpa).unwrap().into()
    }

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster.insert(student("Alice", 3.8));
        roster.insert(student("Bob", 3.2));
        roster.insert(student("Charlie", 3.9));
        roster
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.count(), 0);
        assert_eq!(roster.meta.version, SCHEMA_VERSION);
        assert_eq!(roster.average_gpa(), 0.0);
    }

    #[test]
    fn test_insert_preserves_order_and_duplicates() {
        let mut roster = sample_roster();
        roster.insert(student("Alice", 3.8)); // duplicate by value is fine

        assert_eq!(roster.count(), 4);
        let names: Vec<_> = roster.all().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie", "Alice"]);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let roster = sample_roster();
        let found = roster.find_by_name("ALICE").unwrap();
        assert_eq!(found.name(), "Alice");
        assert!(roster.find_by_name("Ali").is_none()); // exact, not substring
        assert!(roster.find_by_name("Eve").is_none());
    }

    #[test]
    fn test_remove_all_matches() {
        let mut roster = sample_roster();
        roster.insert(student("alice", 2.0)); // same name, different case

        assert!(roster.remove("Alice"));
        assert_eq!(roster.count(), 2); // both Alices gone
        assert!(roster.find_by_name("Alice").is_none());

        assert!(!roster.remove("Eve")); // nothing to remove
    }

    #[test]
    fn test_honor_roll_respects_variant_override() {
        let mut roster = Roster::new();
        roster.insert(student("Alice", 3.6));
        roster.insert(
            GraduateRecord::new("Diana", 26, 3.6, "Thesis", "Advisor", true)
                .unwrap()
                .into(),
        );

        let honors = roster.honor_roll_members();
        assert_eq!(honors.len(), 1);
        assert_eq!(honors[0].name(), "Alice"); // 3.6 < 3.7 graduate bar
    }

    #[test]
    fn test_partition_by_honor_roll() {
        let roster = sample_roster();
        let (honors, rest) = roster.partition_by_honor_roll();
        assert_eq!(honors.len(), 2); // Alice 3.8, Charlie 3.9
        assert_eq!(rest.len(), 1); // Bob 3.2
        assert_eq!(rest[0].name(), "Bob");
    }

    #[test]
    fn test_average_gpa() {
        let roster = sample_roster();
        // (3.8 + 3.2 + 3.9) / 3 = 3.6333
        assert!((roster.average_gpa() - 3.6333).abs() < 0.001);
    }

    #[test]
    fn test_ranked_by_gpa() {
        let roster = sample_roster();
        let ranked = roster.ranked_by_gpa();
        let names: Vec<_> = ranked.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, ["Charlie", "Alice", "Bob"]);

        // Internal insertion order is untouched
        let all: Vec<_> = roster.all().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(all, ["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_ranked_tie_break_by_name() {
        let mut roster = Roster::new();
        roster.insert(student("Dave", 3.8));
        roster.insert(student("Alice", 3.8));

        let ranked = roster.ranked_by_gpa();
        assert_eq!(ranked[0].name(), "Alice");
        assert_eq!(ranked[1].name(), "Dave");
    }

    #[test]
    fn test_snapshots_are_independent() {
        let roster = sample_roster();
        let mut snapshot = roster.all();
        snapshot.clear();
        snapshot.push(student("Mallory", 0.0));

        assert_eq!(roster.count(), 3);
        assert!(roster.find_by_name("Mallory").is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut roster = sample_roster();
        roster.insert(
            GraduateRecord::new("Diana", 26, 3.85, "Thesis", "Dr. Johnson", true)
                .unwrap()
                .into(),
        );

        let json = serde_json::to_string_pretty(&roster).unwrap();
        let loaded: Roster = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.count(), 4);
        assert_eq!(loaded.all(), roster.all());
        // The graduate entry still resolves to the graduate kind
        assert_eq!(loaded.find_by_name("Diana").unwrap().kind(), "Graduate");
    }

    #[test]
    fn test_validate_rejects_contract_violations() {
        // Hand-craft JSON with an out-of-range GPA: parses, but fails validate()
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "created": "2025-01-01T00:00:00Z",
                "modified": "2025-01-01T00:00:00Z"
            },
            "records": [
                { "kind": "Student", "name": "Alice", "age": 20, "gpa": 9.9 }
            ]
        }"#;
        let roster: Roster = serde_json::from_str(json).unwrap();
        assert!(roster.validate().is_err());
    }
}
