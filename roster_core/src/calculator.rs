//! # Grade Calculator
//!
//! Stateless grade arithmetic: percentage/letter/GPA-point conversions,
//! weighted and required-future GPA, semester averages, and aggregate
//! statistics. These are pure functions, independent of any stored record.
//!
//! Note that the percentage scale here (93 => A, 90 => A-, ...) is finer
//! than the GPA-based letter scale in [`crate::grading`]; both are part of
//! the contract.
//!
//! ## Example
//!
//! ```rust
//! use roster_core::calculator;
//!
//! assert_eq!(calculator::percentage_to_letter(93.0).unwrap(), "A");
//! assert_eq!(calculator::letter_to_gpa_points("b+").unwrap(), 3.3);
//!
//! // GPA needed over 30 remaining credits to lift a 3.0 (30 credits) to 3.5
//! let required = calculator::required_future_gpa(3.0, 30, 3.5, 30).unwrap();
//! assert!((required - 4.0).abs() < 0.01);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{RosterError, RosterResult};
use crate::records::{MAX_GPA, MIN_GPA};

/// Weighted GPA over courses: sum(grade x credits) / sum(credits).
///
/// Only courses present in BOTH maps contribute; a course with a grade but
/// no credit entry (or vice versa) is silently skipped. Returns 0.0 when
/// either map is empty or no course keys overlap.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use roster_core::calculator::weighted_gpa;
///
/// let grades = HashMap::from([
///     ("Math".to_string(), 4.0),
///     ("English".to_string(), 3.5),
///     ("Science".to_string(), 3.8),
/// ]);
/// let credits = HashMap::from([
///     ("Math".to_string(), 4),
///     ("English".to_string(), 3),
///     ("Science".to_string(), 4),
/// ]);
///
/// let gpa = weighted_gpa(&grades, &credits);
/// assert!((gpa - 3.8).abs() < 0.01);
/// ```
pub fn weighted_gpa(
    course_grades: &HashMap<String, f64>,
    course_credits: &HashMap<String, u32>,
) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for (course, grade) in course_grades {
        if let Some(&credits) = course_credits.get(course) {
            total_points += grade * f64::from(credits);
            total_credits += credits;
        }
    }

    if total_credits > 0 {
        total_points / f64::from(total_credits)
    } else {
        0.0
    }
}

/// Convert a percentage (0-100) to a letter grade.
///
/// All breakpoints are inclusive: exactly 93.0 is "A", 92.99 is "A-".
///
/// # Errors
///
/// Returns [`RosterError::InvalidInput`] if the percentage is outside
/// 0..=100.
pub fn percentage_to_letter(percentage: f64) -> RosterResult<&'static str> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(RosterError::invalid_input(
            "percentage",
            percentage.to_string(),
            "Percentage must be between 0 and 100",
        ));
    }

    let letter = if percentage >= 93.0 {
        "A"
    } else if percentage >= 90.0 {
        "A-"
    } else if percentage >= 87.0 {
        "B+"
    } else if percentage >= 83.0 {
        "B"
    } else if percentage >= 80.0 {
        "B-"
    } else if percentage >= 77.0 {
        "C+"
    } else if percentage >= 73.0 {
        "C"
    } else if percentage >= 70.0 {
        "C-"
    } else if percentage >= 67.0 {
        "D+"
    } else if percentage >= 63.0 {
        "D"
    } else if percentage >= 60.0 {
        "D-"
    } else {
        "F"
    };

    Ok(letter)
}

/// Convert a letter grade to GPA points.
///
/// The lookup is case-insensitive but exact otherwise (whitespace is NOT
/// trimmed: `" A"` does not match).
///
/// # Errors
///
/// Returns [`RosterError::UnknownLetterGrade`] for anything outside the
/// twelve-letter A..F scale.
pub fn letter_to_gpa_points(letter: &str) -> RosterResult<f64> {
    match letter.to_uppercase().as_str() {
        "A" => Ok(4.0),
        "A-" => Ok(3.7),
        "B+" => Ok(3.3),
        "B" => Ok(3.0),
        "B-" => Ok(2.7),
        "C+" => Ok(2.3),
        "C" => Ok(2.0),
        "C-" => Ok(1.7),
        "D+" => Ok(1.3),
        "D" => Ok(1.0),
        "D-" => Ok(0.7),
        "F" => Ok(0.0),
        _ => Err(RosterError::unknown_letter_grade(letter)),
    }
}

/// GPA needed across `remaining_credits` to lift `current_gpa` (earned over
/// `current_credits`) to `target_gpa`.
///
/// This is pure arithmetic: the result may exceed 4.0 (the target is
/// unreachable) or be negative (the target is already exceeded). Callers
/// interpret feasibility; see [`can_reach_target`].
///
/// # Errors
///
/// Returns [`RosterError::InvalidInput`] if `remaining_credits` is zero or
/// either GPA is outside 0.0..=4.0.
pub fn required_future_gpa(
    current_gpa: f64,
    current_credits: u32,
    target_gpa: f64,
    remaining_credits: u32,
) -> RosterResult<f64> {
    if remaining_credits == 0 {
        return Err(RosterError::invalid_input(
            "remaining_credits",
            "0",
            "Remaining credits must be positive",
        ));
    }
    validate_gpa_range("current_gpa", current_gpa)?;
    validate_gpa_range("target_gpa", target_gpa)?;

    let current_points = current_gpa * f64::from(current_credits);
    let target_points = target_gpa * f64::from(current_credits + remaining_credits);

    Ok((target_points - current_points) / f64::from(remaining_credits))
}

/// Whether `target_minimum` is reachable given the remaining credits.
///
/// With no credits remaining, the answer depends only on the current GPA;
/// otherwise the required future GPA must be achievable (at most 4.0).
///
/// # Errors
///
/// Propagates [`required_future_gpa`] validation when credits remain.
pub fn can_reach_target(
    current_gpa: f64,
    current_credits: u32,
    remaining_credits: u32,
    target_minimum: f64,
) -> RosterResult<bool> {
    if remaining_credits == 0 {
        return Ok(current_gpa >= target_minimum);
    }

    let required =
        required_future_gpa(current_gpa, current_credits, target_minimum, remaining_credits)?;
    Ok(required <= MAX_GPA)
}

/// Arithmetic mean of a sequence of grades; 0.0 for an empty slice.
pub fn semester_average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().sum::<f64>() / grades.len() as f64
}

/// Aggregate statistics over a sequence of GPA values.
///
/// ## JSON Example
///
/// ```json
/// { "mean": 3.575, "median": 3.65, "min": 3.0, "max": 4.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Median of the sorted values (mean of the middle two for even counts)
    pub median: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl GradeStatistics {
    /// All-zero statistics, reported for empty input
    pub fn zero() -> Self {
        GradeStatistics {
            mean: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }
}

/// Compute mean, median, min, and max over a sequence of values.
///
/// Empty input yields all zeros rather than an error. The input is not
/// mutated; the median works on a sorted copy.
pub fn grade_statistics(values: &[f64]) -> GradeStatistics {
    if values.is_empty() {
        return GradeStatistics::zero();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    GradeStatistics {
        mean,
        median,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

fn validate_gpa_range(field: &str, gpa: f64) -> RosterResult<()> {
    if !(MIN_GPA..=MAX_GPA).contains(&gpa) {
        return Err(RosterError::invalid_input(
            field,
            gpa.to_string(),
            "GPA must be between 0.0 and 4.0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_f64(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn map_u32(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_weighted_gpa() {
        let grades = map_f64(&[("Math", 4.0), ("English", 3.5), ("Science", 3.8)]);
        let credits = map_u32(&[("Math", 4), ("English", 3), ("Science", 4)]);

        // (4.0*4 + 3.5*3 + 3.8*4) / 11 = 41.7 / 11 = 3.79
        let gpa = weighted_gpa(&grades, &credits);
        assert!((gpa - 3.79).abs() < 0.01);
    }

    #[test]
    fn test_weighted_gpa_skips_non_overlapping_courses() {
        let grades = map_f64(&[("Math", 4.0), ("History", 2.0)]);
        let credits = map_u32(&[("Math", 3), ("Art", 3)]);

        // History has no credits, Art has no grade: only Math counts
        assert_eq!(weighted_gpa(&grades, &credits), 4.0);
    }

    #[test]
    fn test_weighted_gpa_empty_or_disjoint() {
        assert_eq!(weighted_gpa(&HashMap::new(), &HashMap::new()), 0.0);

        let grades = map_f64(&[("Math", 4.0)]);
        let credits = map_u32(&[("Art", 3)]);
        assert_eq!(weighted_gpa(&grades, &credits), 0.0);
    }

    #[test]
    fn test_percentage_to_letter_boundaries() {
        assert_eq!(percentage_to_letter(100.0).unwrap(), "A");
        assert_eq!(percentage_to_letter(93.0).unwrap(), "A");
        assert_eq!(percentage_to_letter(92.99).unwrap(), "A-");
        assert_eq!(percentage_to_letter(90.0).unwrap(), "A-");
        assert_eq!(percentage_to_letter(87.0).unwrap(), "B+");
        assert_eq!(percentage_to_letter(83.0).unwrap(), "B");
        assert_eq!(percentage_to_letter(80.0).unwrap(), "B-");
        assert_eq!(percentage_to_letter(77.0).unwrap(), "C+");
        assert_eq!(percentage_to_letter(73.0).unwrap(), "C");
        assert_eq!(percentage_to_letter(70.0).unwrap(), "C-");
        assert_eq!(percentage_to_letter(67.0).unwrap(), "D+");
        assert_eq!(percentage_to_letter(63.0).unwrap(), "D");
        assert_eq!(percentage_to_letter(60.0).unwrap(), "D-");
        assert_eq!(percentage_to_letter(59.99).unwrap(), "F");
        assert_eq!(percentage_to_letter(0.0).unwrap(), "F");
    }

    #[test]
    fn test_percentage_to_letter_rejects_out_of_range() {
        assert!(percentage_to_letter(-0.01).is_err());
        assert!(percentage_to_letter(100.01).is_err());
    }

    #[test]
    fn test_letter_to_gpa_points() {
        assert_eq!(letter_to_gpa_points("A").unwrap(), 4.0);
        assert_eq!(letter_to_gpa_points("a").unwrap(), 4.0); // case-insensitive
        assert_eq!(letter_to_gpa_points("b-").unwrap(), 2.7);
        assert_eq!(letter_to_gpa_points("D-").unwrap(), 0.7);
        assert_eq!(letter_to_gpa_points("F").unwrap(), 0.0);
    }

    #[test]
    fn test_letter_to_gpa_points_rejects_unknown() {
        assert!(letter_to_gpa_points("Z").is_err());
        assert!(letter_to_gpa_points("").is_err());
        assert!(letter_to_gpa_points(" A").is_err()); // whitespace not trimmed
        assert_eq!(
            letter_to_gpa_points("E").unwrap_err().error_code(),
            "UNKNOWN_LETTER_GRADE"
        );
    }

    #[test]
    fn test_required_future_gpa() {
        // 3.0 over 30 credits, want 3.5 after 30 more: need exactly 4.0
        // (3.5*60 - 3.0*30) / 30 = (210 - 90) / 30 = 4.0
        let required = required_future_gpa(3.0, 30, 3.5, 30).unwrap();
        assert!((required - 4.0).abs() < 0.01);

        // With twice the earned credits the same target needs 4.5
        // (3.5*90 - 3.0*60) / 30 = (315 - 180) / 30 = 4.5
        let required = required_future_gpa(3.0, 60, 3.5, 30).unwrap();
        assert!((required - 4.5).abs() < 0.01);

        // Already above target: requirement drops below the current GPA
        // (3.5*90 - 3.8*60) / 30 = (315 - 228) / 30 = 2.9
        let required = required_future_gpa(3.8, 60, 3.5, 30).unwrap();
        assert!((required - 2.9).abs() < 0.01);
    }

    #[test]
    fn test_required_future_gpa_unclamped() {
        // Unreachable target: result exceeds 4.0 and is returned as-is
        let required = required_future_gpa(2.0, 90, 3.9, 10).unwrap();
        assert!(required > 4.0);

        // Target already exceeded by a wide margin: result goes negative
        // (3.5*110 - 4.0*100) / 10 = (385 - 400) / 10 = -1.5
        let required = required_future_gpa(4.0, 100, 3.5, 10).unwrap();
        assert!(required < 0.0);
    }

    #[test]
    fn test_required_future_gpa_validation() {
        assert!(required_future_gpa(3.0, 60, 3.5, 0).is_err());
        assert!(required_future_gpa(4.5, 60, 3.5, 30).is_err());
        assert!(required_future_gpa(3.0, 60, -0.5, 30).is_err());
        // Zero current credits is fine (a brand-new student)
        assert!(required_future_gpa(0.0, 0, 3.5, 30).is_ok());
    }

    #[test]
    fn test_can_reach_target() {
        // 3.0 over 30 credits needs exactly 4.0 over 30 more for a 3.5
        assert!(can_reach_target(3.0, 30, 30, 3.5).unwrap());
        // With 60 credits already earned the same target needs 4.5: unreachable
        assert!(!can_reach_target(3.0, 60, 30, 3.5).unwrap());
        // 3.6 is out of reach either way
        assert!(!can_reach_target(3.0, 30, 30, 3.6).unwrap());
    }

    #[test]
    fn test_can_reach_target_no_remaining_credits() {
        assert!(can_reach_target(3.6, 60, 0, 3.5).unwrap());
        assert!(!can_reach_target(3.4, 60, 0, 3.5).unwrap());
    }

    #[test]
    fn test_semester_average() {
        assert!((semester_average(&[3.0, 3.5, 4.0]) - 3.5).abs() < 1e-9);
        assert_eq!(semester_average(&[]), 0.0);
    }

    #[test]
    fn test_grade_statistics() {
        let stats = grade_statistics(&[3.0, 3.5, 3.8, 4.0]);
        assert!((stats.mean - 3.575).abs() < 0.01);
        assert!((stats.median - 3.65).abs() < 0.01); // mean of 3.5 and 3.8
        assert_eq!(stats.min, 3.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_grade_statistics_odd_count() {
        let stats = grade_statistics(&[4.0, 2.0, 3.0]);
        assert_eq!(stats.median, 3.0); // middle of the sorted copy
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_grade_statistics_empty() {
        assert_eq!(grade_statistics(&[]), GradeStatistics::zero());
    }

    #[test]
    fn test_statistics_serialization() {
        let stats = grade_statistics(&[3.0, 4.0]);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"median\""));
        let roundtrip: GradeStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, roundtrip);
    }
}
