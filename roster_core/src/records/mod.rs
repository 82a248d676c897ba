//! # Student Records
//!
//! Record definitions for the roster. The two concrete kinds (plain and
//! graduate) form a closed set behind the [`Record`] enum, which gives the
//! roster and persistence layers a single type to store while keeping
//! per-kind behavior (the graduate honor-roll override) intact.
//!
//! ## JSON Serialization
//!
//! Records serialize with a "kind" discriminator so the concrete variant
//! survives a save/load round trip:
//!
//! ```json
//! // Plain student
//! { "kind": "Student", "name": "Alice", "age": 20, "gpa": 3.8 }
//!
//! // Graduate student
//! {
//!   "kind": "Graduate",
//!   "name": "Diana", "age": 26, "gpa": 3.85,
//!   "thesis_title": "Machine Learning in Healthcare",
//!   "advisor": "Dr. Johnson",
//!   "doctoral": true
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roster_core::records::{Record, StudentRecord, GraduateRecord};
//! use roster_core::grading::Gradeable;
//!
//! let plain: Record = StudentRecord::new("Alice", 20, 3.6).unwrap().into();
//! let grad: Record = GraduateRecord::new("Diana", 26, 3.6, "Thesis", "Dr. J", true)
//!     .unwrap()
//!     .into();
//!
//! // Same GPA, different honor-roll outcome: dispatch follows the variant
//! assert!(plain.is_honor_roll());
//! assert!(!grad.is_honor_roll());
//! ```

pub mod graduate;
pub mod student;

pub use graduate::GraduateRecord;
pub use student::{StudentRecord, MAX_AGE, MAX_GPA, MIN_AGE, MIN_GPA};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::RosterResult;
use crate::grading::Gradeable;

/// A student record of either concrete kind.
///
/// Records of different kinds are never equal, even with identical base
/// fields (the derived `PartialEq` compares the discriminant first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Record {
    /// Plain (undergraduate) student
    Student(StudentRecord),
    /// Graduate student with thesis, advisor, and doctoral flag
    Graduate(GraduateRecord),
}

impl Record {
    /// The student's name
    pub fn name(&self) -> &str {
        match self {
            Record::Student(s) => s.name(),
            Record::Graduate(g) => g.name(),
        }
    }

    /// The student's age
    pub fn age(&self) -> u32 {
        match self {
            Record::Student(s) => s.age(),
            Record::Graduate(g) => g.age(),
        }
    }

    /// Replace the name (validating; see [`StudentRecord::set_name`])
    pub fn set_name(&mut self, name: impl Into<String>) -> RosterResult<()> {
        match self {
            Record::Student(s) => s.set_name(name),
            Record::Graduate(g) => g.set_name(name),
        }
    }

    /// Replace the age (validating)
    pub fn set_age(&mut self, age: u32) -> RosterResult<()> {
        match self {
            Record::Student(s) => s.set_age(age),
            Record::Graduate(g) => g.set_age(age),
        }
    }

    /// Replace the GPA (validating)
    pub fn set_gpa(&mut self, gpa: f64) -> RosterResult<()> {
        match self {
            Record::Student(s) => s.set_gpa(gpa),
            Record::Graduate(g) => g.set_gpa(gpa),
        }
    }

    /// Get the graduate view of this record, if it is one
    pub fn as_graduate(&self) -> Option<&GraduateRecord> {
        match self {
            Record::Student(_) => None,
            Record::Graduate(g) => Some(g),
        }
    }

    /// Record kind as a display string
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Student(_) => "Student",
            Record::Graduate(_) => "Graduate",
        }
    }

    /// Natural ranking order: GPA descending, then name ascending
    /// (case-insensitive) to break ties.
    pub fn rank_cmp(&self, other: &Record) -> Ordering {
        other
            .gpa()
            .total_cmp(&self.gpa())
            .then_with(|| self.name().to_lowercase().cmp(&other.name().to_lowercase()))
    }

    /// Case-insensitive exact name match (used by roster lookups)
    pub fn name_matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }

    /// Re-check all field contracts (used by the persistence layer)
    pub fn validate(&self) -> RosterResult<()> {
        match self {
            Record::Student(s) => s.validate(),
            Record::Graduate(g) => g.validate(),
        }
    }
}

impl Gradeable for Record {
    fn gpa(&self) -> f64 {
        match self {
            Record::Student(s) => s.gpa(),
            Record::Graduate(g) => g.gpa(),
        }
    }

    // Dispatch by variant so a caller holding a `Record` observes the
    // graduate override
    fn is_honor_roll(&self) -> bool {
        match self {
            Record::Student(s) => s.is_honor_roll(),
            Record::Graduate(g) => g.is_honor_roll(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Student(s) => s.fmt(f),
            Record::Graduate(g) => g.fmt(f),
        }
    }
}

impl From<StudentRecord> for Record {
    fn from(record: StudentRecord) -> Self {
        Record::Student(record)
    }
}

impl From<GraduateRecord> for Record {
    fn from(record: GraduateRecord) -> Self {
        Record::Graduate(record)
    }
}
