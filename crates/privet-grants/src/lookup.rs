//! collaborator lookup interfaces.
//!
//! the resolution engine does not own an identity directory or the
//! application/resource-type catalogs; callers inject implementations
//! of these traits. lookups are potentially remote, so every method is
//! asynchronous. The engine imposes no timeout or retry policy of its
//! own - whatever latency or failure a collaborator exhibits is passed
//! through.

use std::future::Future;

use privet_types::{Application, ResourceType, SubjectKind, SubjectReference};

use crate::error::LookupError;

/// identity directory that canonicalizes human-entered subject names.
pub trait IdentityDirectory: Send + Sync {
    /// resolve a raw identifier to its realm-scoped canonical id.
    ///
    /// an unresolvable identifier is a directory-specific error, not an
    /// absent row; the resolver propagates whatever the directory
    /// reports.
    fn canonical_id(
        &self,
        kind: SubjectKind,
        realm: &str,
        name: &str,
    ) -> impl Future<Output = std::result::Result<String, LookupError>> + Send;
}

/// catalog of protected applications, per realm.
pub trait ApplicationCatalog: Send + Sync {
    /// look up an application by name. Returns `None` if absent.
    ///
    /// `caller` is the administrative identity the catalog is queried
    /// on behalf of.
    fn application(
        &self,
        caller: &SubjectReference,
        realm: &str,
        name: &str,
    ) -> impl Future<Output = std::result::Result<Option<Application>, LookupError>> + Send;
}

/// catalog of resource types, per realm.
pub trait ResourceTypeCatalog: Send + Sync {
    /// look up a resource type by id. Returns `None` if absent.
    fn resource_type(
        &self,
        caller: &SubjectReference,
        realm: &str,
        id: &str,
    ) -> impl Future<Output = std::result::Result<Option<ResourceType>, LookupError>> + Send;
}
