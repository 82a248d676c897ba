//! Graduate student records.
//!
//! A `GraduateRecord` carries all the base student fields plus a thesis
//! title, an advisor, and a doctoral flag. It behaves like a plain record
//! wherever one is expected, except that its honor-roll bar is raised to
//! GPA >= 3.7.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "Diana",
//!   "age": 26,
//!   "gpa": 3.85,
//!   "thesis_title": "Machine Learning in Healthcare",
//!   "advisor": "Dr. Johnson",
//!   "doctoral": true
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{RosterError, RosterResult};
use crate::grading::{Gradeable, GRADUATE_HONOR_ROLL_GPA};
use crate::records::student::StudentRecord;

/// A validated graduate student record.
///
/// The base fields live in an embedded [`StudentRecord`] (flattened in
/// JSON), so base validation rules apply unchanged. Thesis title and
/// advisor are always non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduateRecord {
    #[serde(flatten)]
    base: StudentRecord,
    thesis_title: String,
    advisor: String,
    doctoral: bool,
}

impl GraduateRecord {
    /// Create a new graduate record.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] for any base-field violation,
    /// or if the thesis title or advisor is empty/whitespace-only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster_core::records::GraduateRecord;
    ///
    /// let grad = GraduateRecord::new(
    ///     "Diana", 26, 3.85,
    ///     "Machine Learning in Healthcare", "Dr. Johnson", true,
    /// ).unwrap();
    /// assert_eq!(grad.degree_type(), "PhD");
    /// ```
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gpa: f64,
        thesis_title: impl Into<String>,
        advisor: impl Into<String>,
        doctoral: bool,
    ) -> RosterResult<Self> {
        let base = StudentRecord::new(name, age, gpa)?;
        let thesis_title = validate_thesis_title(thesis_title.into())?;
        let advisor = validate_advisor(advisor.into())?;
        Ok(GraduateRecord {
            base,
            thesis_title,
            advisor,
            doctoral,
        })
    }

    /// The student's name (trimmed, never empty)
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// The student's age (1..=150)
    pub fn age(&self) -> u32 {
        self.base.age()
    }

    /// The student's cumulative GPA (0.0..=4.0)
    pub fn gpa(&self) -> f64 {
        self.base.gpa()
    }

    /// The thesis title (trimmed, never empty)
    pub fn thesis_title(&self) -> &str {
        &self.thesis_title
    }

    /// The advisor's name (trimmed, never empty)
    pub fn advisor(&self) -> &str {
        &self.advisor
    }

    /// Whether this is a doctoral (as opposed to master's) student
    pub fn is_doctoral(&self) -> bool {
        self.doctoral
    }

    /// "PhD" for doctoral students, "Master's" otherwise
    pub fn degree_type(&self) -> &'static str {
        if self.doctoral {
            "PhD"
        } else {
            "Master's"
        }
    }

    /// Replace the name (see [`StudentRecord::set_name`])
    pub fn set_name(&mut self, name: impl Into<String>) -> RosterResult<()> {
        self.base.set_name(name)
    }

    /// Replace the age (see [`StudentRecord::set_age`])
    pub fn set_age(&mut self, age: u32) -> RosterResult<()> {
        self.base.set_age(age)
    }

    /// Replace the GPA (see [`StudentRecord::set_gpa`])
    pub fn set_gpa(&mut self, gpa: f64) -> RosterResult<()> {
        self.base.set_gpa(gpa)
    }

    /// Replace the thesis title, trimming first. Rejects empty input
    /// without modifying the record.
    pub fn set_thesis_title(&mut self, thesis_title: impl Into<String>) -> RosterResult<()> {
        self.thesis_title = validate_thesis_title(thesis_title.into())?;
        Ok(())
    }

    /// Replace the advisor, trimming first. Rejects empty input without
    /// modifying the record.
    pub fn set_advisor(&mut self, advisor: impl Into<String>) -> RosterResult<()> {
        self.advisor = validate_advisor(advisor.into())?;
        Ok(())
    }

    /// Set the doctoral flag (no validation needed)
    pub fn set_doctoral(&mut self, doctoral: bool) {
        self.doctoral = doctoral;
    }

    /// Re-check all field contracts (base fields included).
    pub fn validate(&self) -> RosterResult<()> {
        self.base.validate()?;
        if self.thesis_title.trim().is_empty() {
            return Err(RosterError::invalid_input(
                "thesis_title",
                self.thesis_title.clone(),
                "Thesis title cannot be empty",
            ));
        }
        if self.advisor.trim().is_empty() {
            return Err(RosterError::invalid_input(
                "advisor",
                self.advisor.clone(),
                "Advisor cannot be empty",
            ));
        }
        Ok(())
    }
}

impl Gradeable for GraduateRecord {
    fn gpa(&self) -> f64 {
        self.base.gpa()
    }

    // Graduate students face a higher honor-roll bar
    fn is_honor_roll(&self) -> bool {
        self.gpa() >= GRADUATE_HONOR_ROLL_GPA
    }
}

impl std::fmt::Display for GraduateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraduateStudent{{name='{}', age={}, gpa={}, degree='{}', thesis='{}', advisor='{}'}}",
            self.name(),
            self.age(),
            self.gpa(),
            self.degree_type(),
            self.thesis_title,
            self.advisor
        )
    }
}

fn validate_thesis_title(thesis_title: String) -> RosterResult<String> {
    let trimmed = thesis_title.trim();
    if trimmed.is_empty() {
        return Err(RosterError::invalid_input(
            "thesis_title",
            thesis_title.clone(),
            "Thesis title cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_advisor(advisor: String) -> RosterResult<String> {
    let trimmed = advisor.trim();
    if trimmed.is_empty() {
        return Err(RosterError::invalid_input(
            "advisor",
            advisor.clone(),
            "Advisor cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diana() -> GraduateRecord {
        GraduateRecord::new(
            "Diana",
            26,
            3.85,
            "Machine Learning in Healthcare",
            "Dr. Johnson",
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_construction() {
        let grad = diana();
        assert_eq!(grad.name(), "Diana");
        assert_eq!(grad.thesis_title(), "Machine Learning in Healthcare");
        assert_eq!(grad.advisor(), "Dr. Johnson");
        assert!(grad.is_doctoral());
    }

    #[test]
    fn test_base_validation_applies() {
        assert!(GraduateRecord::new("", 26, 3.85, "Thesis", "Advisor", true).is_err());
        assert!(GraduateRecord::new("Diana", 26, 4.5, "Thesis", "Advisor", true).is_err());
    }

    #[test]
    fn test_graduate_field_validation() {
        assert!(GraduateRecord::new("Diana", 26, 3.85, "  ", "Advisor", true).is_err());
        assert!(GraduateRecord::new("Diana", 26, 3.85, "Thesis", "", true).is_err());
    }

    #[test]
    fn test_graduate_fields_trimmed() {
        let grad =
            GraduateRecord::new("Diana", 26, 3.85, "  Thesis  ", "  Dr. Johnson  ", false).unwrap();
        assert_eq!(grad.thesis_title(), "Thesis");
        assert_eq!(grad.advisor(), "Dr. Johnson");
    }

    #[test]
    fn test_degree_type() {
        let phd = diana();
        assert_eq!(phd.degree_type(), "PhD");

        let mut masters = diana();
        masters.set_doctoral(false);
        assert_eq!(masters.degree_type(), "Master's");
    }

    #[test]
    fn test_setters_validate() {
        let mut grad = diana();

        assert!(grad.set_thesis_title("   ").is_err());
        assert_eq!(grad.thesis_title(), "Machine Learning in Healthcare");

        assert!(grad.set_advisor("").is_err());
        assert_eq!(grad.advisor(), "Dr. Johnson");

        grad.set_thesis_title("Distributed Systems").unwrap();
        assert_eq!(grad.thesis_title(), "Distributed Systems");
    }

    #[test]
    fn test_honor_roll_override() {
        // 3.6 is honor roll for undergrads but not for graduates
        let grad = GraduateRecord::new("Eve", 25, 3.6, "Thesis", "Advisor", false).unwrap();
        assert!(!grad.is_honor_roll());

        let grad_37 = GraduateRecord::new("Eve", 25, 3.7, "Thesis", "Advisor", false).unwrap();
        assert!(grad_37.is_honor_roll());
    }

    #[test]
    fn test_equality_includes_graduate_fields() {
        let a = diana();
        let b = diana();
        assert_eq!(a, b);

        let mut c = diana();
        c.set_advisor("Dr. Lee").unwrap();
        assert_ne!(a, c);

        let mut d = diana();
        d.set_doctoral(false);
        assert_ne!(a, d);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let grad = diana();
        let json = serde_json::to_string_pretty(&grad).unwrap();
        // Base fields are flattened into the same object
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"thesis_title\""));

        let roundtrip: GraduateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(grad, roundtrip);
    }
}
