//! the delegated application privilege value object.
//!
//! a privilege binds a set of subjects to a permission level over a set
//! of resources scoped per application. privet resolves the inputs that
//! build or update one; storing it is the caller's concern.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PermissionLevel, SubjectKind, SubjectReference};

/// per-application resource scope: application name to the set of
/// resource patterns delegated for it.
///
/// a key is present iff its pattern set is non-empty.
pub type ResourceScope = HashMap<String, HashSet<String>>;

/// per-kind subject scope: subject kind to the set of canonical ids.
///
/// same non-empty-key invariant as [`ResourceScope`].
pub type SubjectScope = HashMap<SubjectKind, HashSet<String>>;

/// a delegated application privilege.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPrivilege {
    /// privilege name, unique within a realm.
    pub name: String,

    /// optional human-readable description.
    pub description: Option<String>,

    /// how broad the delegation is.
    pub level: PermissionLevel,

    /// the subjects the privilege is granted to.
    pub subjects: HashSet<SubjectReference>,

    /// the resources the privilege covers, per application.
    pub resources: ResourceScope,

    /// when the privilege was created.
    pub created_at: DateTime<Utc>,

    /// when the privilege was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ApplicationPrivilege {
    /// create a new privilege from resolved inputs.
    pub fn new(
        name: impl Into<String>,
        level: PermissionLevel,
        subjects: HashSet<SubjectReference>,
        resources: ResourceScope,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            description: None,
            level,
            subjects,
            resources,
            created_at: now,
            updated_at: now,
        }
    }

    /// the symbolic action token for this privilege's level.
    pub fn action_token(&self) -> &'static str {
        self.level.token()
    }

    /// names of the applications this privilege touches.
    pub fn application_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// the resource patterns delegated for one application, if any.
    pub fn resource_names(&self, application: &str) -> Option<&HashSet<String>> {
        self.resources.get(application)
    }

    /// group the privilege's subjects by kind.
    ///
    /// only kinds with at least one subject appear in the result, so
    /// the non-empty-key invariant holds by construction.
    pub fn subjects_by_kind(&self) -> SubjectScope {
        let mut scope = SubjectScope::new();
        for subject in &self.subjects {
            scope
                .entry(subject.kind)
                .or_default()
                .insert(subject.canonical_id.clone());
        }
        scope
    }

    /// the per-application resource scope as a fresh map.
    pub fn resources_by_application(&self) -> ResourceScope {
        self.resources.clone()
    }

    /// replace the permission level, bumping `updated_at`.
    pub fn set_level(&mut self, level: PermissionLevel) {
        self.level = level;
        self.touch();
    }

    /// replace the subject set, bumping `updated_at`.
    pub fn set_subjects(&mut self, subjects: HashSet<SubjectReference>) {
        self.subjects = subjects;
        self.touch();
    }

    /// replace the resource scope, bumping `updated_at`.
    pub fn set_resources(&mut self, resources: ResourceScope) {
        self.resources = resources;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
