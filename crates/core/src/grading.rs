//! Grading table, range validation, and percentage / SGPA scoring.
//!
//! The table is an immutable value built once at startup and shared with
//! every request handler.

use serde::Serialize;

use crate::error::ValidationError;
use crate::marks::SubmittedMarks;
use crate::subject::{Component, SubjectCode};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Percentage is divided by this to obtain the SGPA.
pub const SGPA_DIVISOR: f64 = 9.5;

/// Decimal places kept in reported percentage and SGPA.
pub const RESULT_DECIMALS: usize = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Maximum obtainable marks for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxMarks {
    pub theory: u32,
    pub practical: u32,
}

impl MaxMarks {
    pub const fn new(theory: u32, practical: u32) -> Self {
        Self { theory, practical }
    }

    pub fn component(&self, component: Component) -> u32 {
        match component {
            Component::Theory => self.theory,
            Component::Practical => self.practical,
        }
    }

    pub fn total(&self) -> u32 {
        self.theory + self.practical
    }
}

/// Computed outcome of a valid submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkResult {
    pub percentage: f64,
    pub sgpa: f64,
}

/// Maximum marks for every subject.
///
/// The table is total: it holds exactly one [`MaxMarks`] per [`SubjectCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingConfig {
    maxima: [MaxMarks; SubjectCode::COUNT],
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GradingConfig {
    /// Build a table from maxima listed in [`SubjectCode::ALL`] order.
    pub const fn new(maxima: [MaxMarks; SubjectCode::COUNT]) -> Self {
        Self { maxima }
    }

    /// The curriculum's standard table: 75/25 for the 20x subjects and
    /// 50/50 for the 25x subjects.
    pub const fn standard() -> Self {
        Self::new([
            MaxMarks::new(75, 25),
            MaxMarks::new(75, 25),
            MaxMarks::new(75, 25),
            MaxMarks::new(75, 25),
            MaxMarks::new(50, 50),
            MaxMarks::new(50, 50),
        ])
    }

    pub fn max_marks(&self, code: SubjectCode) -> MaxMarks {
        self.maxima[code.index()]
    }

    /// Subjects paired with their maxima, in validation order.
    pub fn subjects(&self) -> impl Iterator<Item = (SubjectCode, MaxMarks)> + '_ {
        SubjectCode::ALL
            .into_iter()
            .map(|code| (code, self.max_marks(code)))
    }

    /// Sum of both component maxima across every subject.
    pub fn total_max(&self) -> u32 {
        self.maxima.iter().map(MaxMarks::total).sum()
    }

    /// Check every mark lies within `[0, max]`.
    ///
    /// Subjects are checked in [`SubjectCode::ALL`] order, theory before
    /// practical; the first violation is returned.
    pub fn validate(&self, marks: &SubmittedMarks) -> Result<(), ValidationError> {
        for (code, max) in self.subjects() {
            let submitted = marks.get(code);
            for component in [Component::Theory, Component::Practical] {
                let limit = max.component(component);
                if !within_max(submitted.component(component), limit) {
                    return Err(ValidationError::OutOfRange {
                        subject: code,
                        component,
                        max: limit,
                    });
                }
            }
        }
        Ok(())
    }

    /// Percentage of the total obtainable marks, and SGPA derived from it.
    ///
    /// Does not validate; callers should use [`GradingConfig::evaluate`]
    /// unless the marks are already known to be in range.
    pub fn score(&self, marks: &SubmittedMarks) -> MarkResult {
        let total_max = f64::from(self.total_max());
        let percentage = if total_max > 0.0 {
            marks.total() / total_max * 100.0
        } else {
            0.0
        };
        let sgpa = percentage / SGPA_DIVISOR;

        MarkResult {
            percentage: round_to(percentage, RESULT_DECIMALS),
            sgpa: round_to(sgpa, RESULT_DECIMALS),
        }
    }

    /// Validate, then score. No result is produced for invalid marks.
    pub fn evaluate(&self, marks: &SubmittedMarks) -> Result<MarkResult, ValidationError> {
        self.validate(marks)?;
        Ok(self.score(marks))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether `value` falls within `[0, max]`. NaN never does.
fn within_max(value: f64, max: u32) -> bool {
    (0.0..=f64::from(max)).contains(&value)
}

/// Round the exact binary value to `decimals` places, ties to even.
///
/// Float formatting is correctly rounded, so going through the decimal string
/// avoids the error introduced by scaling by a power of ten first.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
