use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry-assigned student identifier. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the registry needs from anything person-shaped.
pub trait Identity {
    fn id(&self) -> StudentId;
    fn name(&self) -> &str;
}

/// Active membership of a student in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub course: String,
    pub enrolled_on: NaiveDate,
}

/// Outcome of `Course::add_student`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Added,
    AlreadyEnrolled,
}

/// Outcome of a name search over the registry. Only `Unique` is actionable.
#[derive(Debug)]
pub enum NameLookup<'a, T> {
    Unique(&'a T),
    NotFound,
    Ambiguous(Vec<&'a T>),
}

impl<'a, T> NameLookup<'a, T> {
    pub fn unique(self) -> Option<&'a T> {
        match self {
            NameLookup::Unique(found) => Some(found),
            NameLookup::NotFound | NameLookup::Ambiguous(_) => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, NameLookup::Ambiguous(_))
    }
}
