//! # roster_core - Student Roster & Grade Engine
//!
//! `roster_core` models a small roster of students with grade and GPA
//! bookkeeping: validated records, derived academic classifications,
//! ranking and search over the roster, aggregate statistics, and durable
//! save/restore of the roster to disk.
//!
//! ## Design Philosophy
//!
//! - **Validated at the boundary**: records are constructed through
//!   validating factories and mutated through validating setters, so the
//!   field invariants always hold
//! - **JSON-First**: every domain type implements Serialize/Deserialize;
//!   the on-disk format is human-readable JSON with a kind discriminator
//! - **Copy-on-return**: queries hand back independent snapshots, never
//!   aliases of internal state
//! - **Rich Errors**: structured error types, not just strings; lookup
//!   misses are `Option`s, never errors
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_core::records::{StudentRecord, GraduateRecord};
//! use roster_core::roster::Roster;
//!
//! let mut roster = Roster::new();
//! roster.insert(StudentRecord::new("Alice", 20, 3.8).unwrap().into());
//! roster.insert(
//!     GraduateRecord::new("Diana", 26, 3.6, "ML in Healthcare", "Dr. Johnson", true)
//!         .unwrap()
//!         .into(),
//! );
//!
//! // Diana's 3.6 misses the graduate 3.7 bar; Alice's 3.8 clears 3.5
//! assert_eq!(roster.honor_roll_members().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`records`] - Student record kinds and unified accessors
//! - [`grading`] - Classification rules (letter grade, standing, honor roll)
//! - [`calculator`] - Stateless grade arithmetic and statistics
//! - [`roster`] - The ordered record store
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic save and validating load

pub mod calculator;
pub mod errors;
pub mod file_io;
pub mod grading;
pub mod records;
pub mod roster;

// Re-export commonly used types at crate root for convenience
pub use errors::{RosterError, RosterResult};
pub use file_io::{load_roster, save_roster};
pub use grading::{AcademicStanding, Gradeable};
pub use records::{GraduateRecord, Record, StudentRecord};
pub use roster::{Roster, RosterMetadata, SCHEMA_VERSION};
