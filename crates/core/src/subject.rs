//! Subject codes and the two scored components of each subject.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subject codes
// ---------------------------------------------------------------------------

/// One of the fixed curriculum subjects, identified by its numeric code.
///
/// Variants are declared in display order, so the derived `Ord` matches the
/// order in which subjects are validated and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SubjectCode {
    S201,
    S202,
    S203,
    S204,
    S251,
    S252,
}

impl SubjectCode {
    /// Number of subjects in the curriculum.
    pub const COUNT: usize = 6;

    /// Every subject, in validation order.
    pub const ALL: [SubjectCode; Self::COUNT] = [
        Self::S201,
        Self::S202,
        Self::S203,
        Self::S204,
        Self::S251,
        Self::S252,
    ];

    /// The numeric code as it appears in form field names and on screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S201 => "201",
            Self::S202 => "202",
            Self::S203 => "203",
            Self::S204 => "204",
            Self::S251 => "251",
            Self::S252 => "252",
        }
    }

    /// Position of this subject within [`SubjectCode::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SubjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("Unknown subject code: {s}"))
    }
}

impl TryFrom<String> for SubjectCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubjectCode> for String {
    fn from(code: SubjectCode) -> Self {
        code.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// The two independently scored parts of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Theory,
    Practical,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Practical => "practical",
        }
    }

    /// Form field name carrying this component's mark, e.g. `theory_201`.
    pub fn field_name(self, code: SubjectCode) -> String {
        format!("{}_{code}", self.as_str())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
