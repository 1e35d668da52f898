//! test utilities for creating privilege fixtures.
//!
//! this module provides a builder for creating test instances of
//! [`ApplicationPrivilege`] without spelling out every field.

use std::collections::HashSet;

use crate::{ApplicationPrivilege, PermissionLevel, ResourceScope, SubjectReference};

/// builder for creating test [`ApplicationPrivilege`] instances.
///
/// # example
/// ```
/// use privet_types::test_utils::TestPrivilegeBuilder;
///
/// let privilege = TestPrivilegeBuilder::new("delegate-calendar")
///     .with_user("id=alice,ou=user,dc=example")
///     .with_resource("calendar", "https://calendar.example.com/*")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TestPrivilegeBuilder {
    name: String,
    description: Option<String>,
    level: PermissionLevel,
    subjects: HashSet<SubjectReference>,
    resources: ResourceScope,
}

impl TestPrivilegeBuilder {
    /// create a new builder with the given privilege name.
    ///
    /// defaults to [`PermissionLevel::Read`], no subjects, no resources.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            level: PermissionLevel::Read,
            subjects: HashSet::new(),
            resources: ResourceScope::new(),
        }
    }

    /// set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// set the permission level.
    pub fn with_level(mut self, level: PermissionLevel) -> Self {
        self.level = level;
        self
    }

    /// add a user subject by canonical id.
    pub fn with_user(mut self, canonical_id: impl Into<String>) -> Self {
        self.subjects.insert(SubjectReference::user(canonical_id));
        self
    }

    /// add a group subject by canonical id.
    pub fn with_group(mut self, canonical_id: impl Into<String>) -> Self {
        self.subjects.insert(SubjectReference::group(canonical_id));
        self
    }

    /// add one resource pattern under an application.
    pub fn with_resource(
        mut self,
        application: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.resources
            .entry(application.into())
            .or_default()
            .insert(pattern.into());
        self
    }

    /// build the [`ApplicationPrivilege`].
    pub fn build(self) -> ApplicationPrivilege {
        let mut privilege =
            ApplicationPrivilege::new(self.name, self.level, self.subjects, self.resources);
        privilege.description = self.description;
        privilege
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let privilege = TestPrivilegeBuilder::new("p1").build();
        assert_eq!(privilege.name, "p1");
        assert_eq!(privilege.level, PermissionLevel::Read);
        assert!(privilege.subjects.is_empty());
        assert!(privilege.resources.is_empty());
        assert!(privilege.description.is_none());
    }

    #[test]
    fn test_builder_full() {
        let privilege = TestPrivilegeBuilder::new("p2")
            .with_description("test privilege")
            .with_level(PermissionLevel::ReadDelegate)
            .with_user("id=alice")
            .with_group("id=staff")
            .with_resource("calendar", "https://calendar.example.com/*")
            .build();

        assert_eq!(privilege.description.as_deref(), Some("test privilege"));
        assert_eq!(privilege.level, PermissionLevel::ReadDelegate);
        assert_eq!(privilege.subjects.len(), 2);
        assert_eq!(privilege.resources.len(), 1);
    }
}
