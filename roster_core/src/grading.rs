//! # Classification Rules
//!
//! The [`Gradeable`] capability: anything exposing a GPA gets derived
//! letter-grade, passing, and academic-standing classifications for free.
//! Honor-roll membership has a default threshold that record kinds may
//! override (graduate records raise it to 3.7).
//!
//! The GPA-based letter scale here is deliberately coarser than the
//! percentage scale in [`crate::calculator`]; the two scales coexist.
//!
//! ## Example
//!
//! ```rust
//! use roster_core::grading::{Gradeable, AcademicStanding};
//! use roster_core::records::StudentRecord;
//!
//! let student = StudentRecord::new("Alice", 20, 3.8).unwrap();
//! assert_eq!(student.letter_grade(), "A");
//! assert!(student.is_passing());
//! assert_eq!(student.academic_standing(), AcademicStanding::Honors);
//! ```

use serde::{Deserialize, Serialize};

/// Default honor-roll GPA threshold (plain students)
pub const HONOR_ROLL_GPA: f64 = 3.5;
/// Honor-roll GPA threshold for graduate students
pub const GRADUATE_HONOR_ROLL_GPA: f64 = 3.7;
/// Minimum passing GPA
pub const PASSING_GPA: f64 = 2.0;
/// Below passing but at or above this, standing is probation (not warning)
pub const PROBATION_FLOOR_GPA: f64 = 1.5;

/// Academic standing classification, derived from GPA and honor-roll status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicStanding {
    /// On the honor roll
    Honors,
    /// Passing but below the honor-roll bar
    GoodStanding,
    /// Below passing, GPA >= 1.5
    Probation,
    /// GPA < 1.5
    Warning,
}

impl AcademicStanding {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            AcademicStanding::Honors => "Honors",
            AcademicStanding::GoodStanding => "Good Standing",
            AcademicStanding::Probation => "Academic Probation",
            AcademicStanding::Warning => "Academic Warning",
        }
    }
}

impl std::fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Capability for anything with a GPA.
///
/// Implementors supply `gpa()` and `is_honor_roll()`; the derived
/// classifications come from default methods. `is_honor_roll` is part of
/// the required surface (rather than defaulted on the trait) so that enum
/// wrappers must dispatch it per variant instead of silently inheriting
/// the plain-student threshold.
pub trait Gradeable {
    /// Current cumulative GPA
    fn gpa(&self) -> f64;

    /// Honor-roll membership; threshold depends on the record kind
    fn is_honor_roll(&self) -> bool;

    /// Letter grade from GPA breakpoints (coarser than the percentage scale)
    fn letter_grade(&self) -> &'static str {
        let gpa = self.gpa();
        if gpa >= 3.7 {
            "A"
        } else if gpa >= 3.3 {
            "A-"
        } else if gpa >= 3.0 {
            "B+"
        } else if gpa >= 2.7 {
            "B"
        } else if gpa >= 2.3 {
            "B-"
        } else if gpa >= 2.0 {
            "C+"
        } else if gpa >= 1.7 {
            "C"
        } else if gpa >= 1.3 {
            "C-"
        } else if gpa >= 1.0 {
            "D"
        } else {
            "F"
        }
    }

    /// Passing check (GPA >= 2.0); never overridden
    fn is_passing(&self) -> bool {
        self.gpa() >= PASSING_GPA
    }

    /// Academic standing derived from honor roll, passing, and GPA floor
    fn academic_standing(&self) -> AcademicStanding {
        if self.is_honor_roll() {
            AcademicStanding::Honors
        } else if self.is_passing() {
            AcademicStanding::GoodStanding
        } else if self.gpa() >= PROBATION_FLOOR_GPA {
            AcademicStanding::Probation
        } else {
            AcademicStanding::Warning
        }
    }
}
