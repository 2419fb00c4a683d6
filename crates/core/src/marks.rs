//! Submitted marks and form-value parsing.
//!
//! A [`SubmittedMarks`] is built fresh for every request and dropped once the
//! response is rendered. Subjects missing from it count as zero in both
//! components.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::subject::{Component, SubjectCode};

/// Marks entered for a single subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectMarks {
    pub theory: f64,
    pub practical: f64,
}

impl SubjectMarks {
    pub fn new(theory: f64, practical: f64) -> Self {
        Self { theory, practical }
    }

    pub fn component(&self, component: Component) -> f64 {
        match component {
            Component::Theory => self.theory,
            Component::Practical => self.practical,
        }
    }

    pub fn total(&self) -> f64 {
        self.theory + self.practical
    }
}

/// Marks for one submission, keyed by subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedMarks(BTreeMap<SubjectCode, SubjectMarks>);

impl SubmittedMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build marks from raw form fields named `theory_<code>` and
    /// `practical_<code>`.
    ///
    /// Every subject gets an entry; absent or unparsable fields become `0.0`.
    /// Fields for unknown subjects are ignored.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let marks = SubjectCode::ALL
            .into_iter()
            .map(|code| {
                let field = |component: Component| {
                    parse_mark(form.get(&component.field_name(code)).map(String::as_str))
                };
                (
                    code,
                    SubjectMarks::new(field(Component::Theory), field(Component::Practical)),
                )
            })
            .collect();
        Self(marks)
    }

    pub fn insert(&mut self, code: SubjectCode, marks: SubjectMarks) {
        self.0.insert(code, marks);
    }

    /// Marks for `code`, or zero in both components if none were submitted.
    pub fn get(&self, code: SubjectCode) -> SubjectMarks {
        self.0.get(&code).copied().unwrap_or_default()
    }

    /// Sum of every submitted value across all subjects and components.
    pub fn total(&self) -> f64 {
        self.0.values().map(SubjectMarks::total).sum()
    }
}

impl FromIterator<(SubjectCode, SubjectMarks)> for SubmittedMarks {
    fn from_iter<I: IntoIterator<Item = (SubjectCode, SubjectMarks)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse one raw form value as a mark.
///
/// Surrounding whitespace is ignored. A missing, empty, or unparsable value
/// yields `0.0`.
pub fn parse_mark(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
