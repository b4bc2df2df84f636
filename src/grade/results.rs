#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Failure reasons kept per requirement before the rest are summarised.
const MAX_REASONS: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A struct representing a grade
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }

    /// Grade proportional to `passed` out of `total` checks. No checks at
    /// all earns full marks.
    pub fn proportional(passed: usize, total: usize, out_of: f64) -> Self {
        if total == 0 {
            return Grade::new(out_of, out_of);
        }
        Grade::new(out_of * passed as f64 / total as f64, out_of)
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/{:.2}", self.grade, self.out_of)
    }
}

#[derive(Tabled, Clone, Debug, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// A struct to store grading results and display them
pub struct GradeResult {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: refers to Requirement ID
    pub(crate) requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: grade received for above Requirement
    #[builder(default)]
    pub(crate) grade:       Grade,
    #[tabled(rename = "Reason")]
    /// * `reason`: the reason for penalties applied, if any
    #[builder(default)]
    pub(crate) reason:      String,
}

impl GradeResult {
    /// Returns the requirement name.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Returns the numeric grade value.
    pub fn grade_value(&self) -> f64 {
        self.grade.grade
    }

    /// Returns the numeric out-of value.
    pub fn out_of_value(&self) -> f64 {
        self.grade.out_of
    }

    /// Returns the reason text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Whether no marks were lost.
    pub fn is_full_marks(&self) -> bool {
        self.grade.grade >= self.grade.out_of
    }
}

/// Running count of checks for one requirement.
#[derive(Debug, Default)]
pub struct Tally {
    /// Checks that held.
    passed:  usize,
    /// Checks attempted.
    total:   usize,
    /// Descriptions of the first failed checks.
    reasons: Vec<String>,
    /// Failures beyond [`MAX_REASONS`].
    hidden:  usize,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one check. `reason` is only built when the check fails.
    pub fn check(&mut self, ok: bool, reason: impl FnOnce() -> String) -> bool {
        self.total += 1;
        if ok {
            self.passed += 1;
        } else if self.reasons.len() < MAX_REASONS {
            let reason = reason();
            tracing::warn!("check failed: {reason}");
            self.reasons.push(reason);
        } else {
            self.hidden += 1;
        }
        ok
    }

    /// Records `count` checks that all failed for the same reason.
    pub fn fail_many(&mut self, count: usize, reason: String) {
        self.total += count;
        if self.reasons.len() < MAX_REASONS {
            self.reasons.push(reason);
            self.hidden += count.saturating_sub(1);
        } else {
            self.hidden += count;
        }
    }

    /// Checks attempted so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Turns the tally into a result for `requirement`.
    pub fn into_result(self, requirement: &str, out_of: f64) -> GradeResult {
        let mut reason = self.reasons.join("\n");
        if self.hidden > 0 {
            reason.push_str(&format!("\n- ...and {} more failed checks.", self.hidden));
        }
        if reason.is_empty() {
            reason = format!("All {} checks passed.", self.total);
        }
        tracing::info!(
            "{requirement}: {}/{} checks passed",
            self.passed,
            self.total
        );
        GradeResult::builder()
            .requirement(requirement)
            .grade(Grade::proportional(self.passed, self.total, out_of))
            .reason(reason)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_displays_two_decimals() {
        assert_eq!(Grade::new(7.0, 10.0).to_string(), "7.00/10.00");
        assert_eq!(Grade::new(2.0 / 3.0, 1.0).to_string(), "0.67/1.00");
    }

    #[test]
    fn proportional_grade() {
        assert_eq!(Grade::proportional(3, 4, 20.0), Grade::new(15.0, 20.0));
        assert_eq!(Grade::proportional(0, 0, 5.0), Grade::new(5.0, 5.0));
    }

    #[test]
    fn tally_caps_reasons() {
        let mut tally = Tally::new();
        for i in 0..15 {
            tally.check(false, || format!("- failure {i}"));
        }
        tally.check(true, || unreachable!());
        let result = tally.into_result("caps", 16.0);
        assert_eq!(result.grade_value(), 1.0);
        assert!(result.reason().contains("- failure 9"));
        assert!(!result.reason().contains("- failure 10"));
        assert!(result.reason().ends_with("...and 5 more failed checks."));
    }
}
