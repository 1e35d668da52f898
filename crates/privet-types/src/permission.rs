//! ordered permission levels for delegated application privileges.
//!
//! a permission level describes how broad a delegation is. every level
//! includes read; wider levels add modify and/or delegate on top.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// how broad a delegated privilege is.
///
/// levels are ordered by breadth, narrowest first, and the declaration
/// order carries the ordering:
/// `Read < ReadModify < ReadDelegate < ReadModifyDelegate`.
///
/// each level corresponds to exactly one symbolic action token and vice
/// versa; [`PermissionLevel::token`] and [`PermissionLevel::from_token`]
/// are mutual inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PermissionLevel {
    /// view privilege definitions only.
    Read,
    /// read plus modify.
    ReadModify,
    /// read plus delegate to further subjects.
    ReadDelegate,
    /// read, modify, and delegate.
    ReadModifyDelegate,
}

impl PermissionLevel {
    /// all levels, narrowest first.
    pub const ALL: [PermissionLevel; 4] = [
        PermissionLevel::Read,
        PermissionLevel::ReadModify,
        PermissionLevel::ReadDelegate,
        PermissionLevel::ReadModifyDelegate,
    ];

    /// the symbolic action token for this level.
    ///
    /// total; never fails for any level.
    pub fn token(self) -> &'static str {
        match self {
            PermissionLevel::Read => "READ",
            PermissionLevel::ReadModify => "MODIFY",
            PermissionLevel::ReadDelegate => "DELEGATE",
            PermissionLevel::ReadModifyDelegate => "ALL",
        }
    }

    /// look up a level by its symbolic action token.
    ///
    /// tokens are case-sensitive; returns `None` for anything outside
    /// the four-entry table.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "READ" => Some(PermissionLevel::Read),
            "MODIFY" => Some(PermissionLevel::ReadModify),
            "DELEGATE" => Some(PermissionLevel::ReadDelegate),
            "ALL" => Some(PermissionLevel::ReadModifyDelegate),
            _ => None,
        }
    }

    /// whether this level permits modifying the delegated resources.
    pub fn can_modify(self) -> bool {
        matches!(
            self,
            PermissionLevel::ReadModify | PermissionLevel::ReadModifyDelegate
        )
    }

    /// whether this level permits delegating further.
    pub fn can_delegate(self) -> bool {
        matches!(
            self,
            PermissionLevel::ReadDelegate | PermissionLevel::ReadModifyDelegate
        )
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for PermissionLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

// serde: deserialize with validation against the token table
impl<'de> Deserialize<'de> for PermissionLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PermissionLevel::from_token(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown action token: {}", s)))
    }
}
