//! canonical subject references for privilege grants.
//!
//! a privilege is granted to users or groups. subjects are carried as
//! `(kind, canonical id)` pairs, where the id is the realm-scoped
//! identifier assigned by the identity directory, never the
//! human-entered name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// the kind of subject a privilege is granted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    /// an individual user.
    User,
    /// a group of users.
    Group,
}

impl SubjectKind {
    /// the display token for this kind (`"User"` or `"Group"`).
    pub fn token(self) -> &'static str {
        match self {
            SubjectKind::User => "User",
            SubjectKind::Group => "Group",
        }
    }

    /// look up a kind by token, case-insensitively.
    ///
    /// `"user"`, `"USER"`, and `"User"` all match; anything else
    /// returns `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("user") {
            Some(SubjectKind::User)
        } else if token.eq_ignore_ascii_case("group") {
            Some(SubjectKind::Group)
        } else {
            None
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// a canonical reference to a user or group.
///
/// two references with equal kind and id are interchangeable, which is
/// what makes set deduplication work. references are constructed from
/// directory-resolved canonical ids only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectReference {
    /// whether this refers to a user or a group.
    pub kind: SubjectKind,
    /// directory-assigned, realm-scoped canonical identifier.
    pub canonical_id: String,
}

impl SubjectReference {
    /// create a reference from a directory-resolved canonical id.
    pub fn new(kind: SubjectKind, canonical_id: impl Into<String>) -> Self {
        Self {
            kind,
            canonical_id: canonical_id.into(),
        }
    }

    /// create a user reference.
    pub fn user(canonical_id: impl Into<String>) -> Self {
        Self::new(SubjectKind::User, canonical_id)
    }

    /// create a group reference.
    pub fn group(canonical_id: impl Into<String>) -> Self {
        Self::new(SubjectKind::Group, canonical_id)
    }
}

impl fmt::Display for SubjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.canonical_id)
    }
}
