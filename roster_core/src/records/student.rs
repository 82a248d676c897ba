//! Plain (undergraduate) student records.
//!
//! A `StudentRecord` is constructed through a validating factory and mutated
//! only through validating setters, so the field invariants (non-empty
//! trimmed name, age 1-150, GPA 0.0-4.0) hold for the record's entire
//! lifetime. A rejected update leaves the prior value intact.
//!
//! ## JSON Example
//!
//! ```json
//! { "name": "Alice", "age": 20, "gpa": 3.8 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{RosterError, RosterResult};
use crate::grading::{Gradeable, HONOR_ROLL_GPA};

/// Minimum valid age (inclusive)
pub const MIN_AGE: u32 = 1;
/// Maximum valid age (inclusive)
pub const MAX_AGE: u32 = 150;
/// Minimum valid GPA (inclusive)
pub const MIN_GPA: f64 = 0.0;
/// Maximum valid GPA (inclusive)
pub const MAX_GPA: f64 = 4.0;

/// A validated student record.
///
/// Fields are private so the range invariants cannot be bypassed; use
/// [`StudentRecord::new`] and the `set_*` methods.
///
/// Equality is exact value equality on all three fields (no floating-point
/// tolerance on GPA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    name: String,
    age: u32,
    gpa: f64,
}

impl StudentRecord {
    /// Create a new student record.
    ///
    /// The name is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] if the name is empty or
    /// whitespace-only, the age is outside 1..=150, or the GPA is outside
    /// 0.0..=4.0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster_core::records::StudentRecord;
    ///
    /// let student = StudentRecord::new("  Alice  ", 20, 3.8).unwrap();
    /// assert_eq!(student.name(), "Alice");
    ///
    /// assert!(StudentRecord::new("Bob", 0, 3.0).is_err());
    /// assert!(StudentRecord::new("Bob", 21, 4.5).is_err());
    /// ```
    pub fn new(name: impl Into<String>, age: u32, gpa: f64) -> RosterResult<Self> {
        let name = validate_name(name.into())?;
        validate_age(age)?;
        validate_gpa(gpa)?;
        Ok(StudentRecord { name, age, gpa })
    }

    /// The student's name (trimmed, never empty)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's age (1..=150)
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The student's cumulative GPA (0.0..=4.0)
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Replace the name, trimming first. Rejects empty/whitespace-only
    /// input without modifying the record.
    pub fn set_name(&mut self, name: impl Into<String>) -> RosterResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Replace the age. Rejects values outside 1..=150 without modifying
    /// the record.
    pub fn set_age(&mut self, age: u32) -> RosterResult<()> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Replace the GPA. Rejects values outside 0.0..=4.0 without modifying
    /// the record.
    pub fn set_gpa(&mut self, gpa: f64) -> RosterResult<()> {
        validate_gpa(gpa)?;
        self.gpa = gpa;
        Ok(())
    }

    /// Re-check all field contracts.
    ///
    /// Records built through `new` always pass; this exists so the
    /// persistence layer can reject deserialized records that violate the
    /// contracts.
    pub fn validate(&self) -> RosterResult<()> {
        if self.name.trim().is_empty() || self.name != self.name.trim() {
            return Err(RosterError::invalid_input(
                "name",
                self.name.clone(),
                "Name must be non-empty and trimmed",
            ));
        }
        validate_age(self.age)?;
        validate_gpa(self.gpa)
    }
}

impl Gradeable for StudentRecord {
    fn gpa(&self) -> f64 {
        self.gpa
    }

    fn is_honor_roll(&self) -> bool {
        self.gpa >= HONOR_ROLL_GPA
    }
}

impl std::fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Student{{name='{}', age={}, gpa={}}}",
            self.name, self.age, self.gpa
        )
    }
}

/// Trim and validate a name
fn validate_name(name: String) -> RosterResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::invalid_input(
            "name",
            name.clone(),
            "Name cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_age(age: u32) -> RosterResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(RosterError::invalid_input(
            "age",
            age.to_string(),
            "Age must be between 1 and 150",
        ));
    }
    Ok(())
}

fn validate_gpa(gpa: f64) -> RosterResult<()> {
    if !(MIN_GPA..=MAX_GPA).contains(&gpa) {
        return Err(RosterError::invalid_input(
            "gpa",
            gpa.to_string(),
            "GPA must be between 0.0 and 4.0",
        ));
    }
    Ok(())
}
