//! subject resolution against the identity directory.

use std::collections::HashSet;

use tracing::debug;

use privet_types::{SubjectKind, SubjectReference};

use crate::error::{Error, Result};
use crate::lookup::IdentityDirectory;

/// resolves raw subject identifiers into canonical references.
///
/// owns the injected identity directory. Each call is independent and
/// builds a fresh set; the resolver holds no per-request state.
pub struct SubjectResolver<D> {
    directory: D,
}

impl<D: IdentityDirectory> SubjectResolver<D> {
    /// create a resolver backed by the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// resolve raw identifiers of one subject kind into canonical
    /// references.
    ///
    /// the kind token is matched case-insensitively against `User` and
    /// `Group` before any directory call; an unrecognized token fails
    /// with [`Error::InvalidSubjectType`] without touching the
    /// directory. identifiers that resolve to the same canonical id
    /// collapse to one reference, and input order is not significant.
    /// an empty input yields an empty set, not an error.
    ///
    /// a directory failure on any identifier aborts the whole call;
    /// unresolved identifiers are never silently dropped.
    pub async fn resolve(
        &self,
        kind_token: &str,
        realm: &str,
        names: &[String],
    ) -> Result<HashSet<SubjectReference>> {
        let kind = SubjectKind::from_token(kind_token)
            .ok_or_else(|| Error::InvalidSubjectType(kind_token.to_string()))?;

        let mut subjects = HashSet::new();
        for name in names {
            let canonical_id = self.directory.canonical_id(kind, realm, name).await?;
            subjects.insert(SubjectReference::new(kind, canonical_id));
        }

        debug!(kind = %kind, realm, count = subjects.len(), "resolved subjects");
        Ok(subjects)
    }
}
