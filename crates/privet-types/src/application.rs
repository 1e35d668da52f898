//! catalog descriptors for protected applications and their resource
//! types.
//!
//! these are read-only views supplied by the application and
//! resource-type catalogs; privet never creates or persists them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// a protected application as described by the application catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// application name, unique within a realm.
    pub name: String,

    /// ids of the resource types bound to this application.
    #[serde(default)]
    pub resource_type_ids: HashSet<String>,
}

impl Application {
    /// create a descriptor with the given name and resource type ids.
    pub fn new<I, S>(name: impl Into<String>, resource_type_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            resource_type_ids: resource_type_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// a named bundle of base resource patterns.
///
/// applications reference resource types by id; the patterns are the
/// base resources reachable through the type (e.g. `"https://*.example.com/*"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceType {
    /// resource type identifier.
    pub id: String,

    /// base resource patterns.
    #[serde(default)]
    pub patterns: HashSet<String>,
}

impl ResourceType {
    /// create a descriptor with the given id and patterns.
    pub fn new<I, S>(id: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}
