//! Instructor domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque instructor identifier.
///
/// Seeded instructors use short numeric strings; instructors added later get
/// time-ordered UUIDs. Nothing may rely on the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructorId(String);

impl InstructorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InstructorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for InstructorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A yoga teacher who can be rated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
}

impl Instructor {
    /// Initials shown on instructor cards, e.g. `"SJ"` for "Sarah Johnson".
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Data for creating a new instructor. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructor {
    pub name: String,
}

impl NewInstructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_name_parts() {
        let instructor = Instructor {
            id: "1".into(),
            name: "Sarah  Johnson".to_string(),
        };
        assert_eq!(instructor.initials(), "SJ");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let instructor = Instructor {
            id: "42".into(),
            name: "Priya Patel".to_string(),
        };
        let json = serde_json::to_string(&instructor).unwrap();
        assert_eq!(json, r#"{"id":"42","name":"Priya Patel"}"#);
    }
}
