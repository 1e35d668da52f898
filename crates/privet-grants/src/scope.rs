//! resource scope resolution for an application.

use std::collections::HashSet;

use tracing::debug;

use privet_types::{Application, ResourceScope, SubjectReference};

use crate::error::{Error, Result};
use crate::lookup::{ApplicationCatalog, ResourceTypeCatalog};

/// resolves the resource scope a privilege covers for one application.
///
/// owns the injected application and resource-type catalogs. each call
/// produces a fresh single-entry scope map (or an empty one, see
/// [`ScopeResolver::resolve`]).
pub struct ScopeResolver<A, C> {
    applications: A,
    resource_types: C,
}

impl<A: ApplicationCatalog, C: ResourceTypeCatalog> ScopeResolver<A, C> {
    /// create a resolver backed by the given catalogs.
    pub fn new(applications: A, resource_types: C) -> Self {
        Self {
            applications,
            resource_types,
        }
    }

    /// resolve the per-application resource scope.
    ///
    /// with an explicit, non-empty resource list the scope is exactly
    /// that list deduplicated into a set; membership in the
    /// application's resource types is not checked. Without one, the
    /// scope defaults to the union of the base patterns of every
    /// resource type bound to the application.
    ///
    /// the result map is keyed by `app_name`. An application with no
    /// resource types (and no explicit resources) resolves to an empty
    /// map: a scope key is present iff its pattern set is non-empty.
    pub async fn resolve(
        &self,
        caller: &SubjectReference,
        realm: &str,
        app_name: &str,
        explicit_resources: Option<&[String]>,
    ) -> Result<ResourceScope> {
        let application = self
            .applications
            .application(caller, realm, app_name)
            .await?
            .ok_or_else(|| Error::UnknownApplication(app_name.to_string()))?;

        let resources = match explicit_resources {
            Some(explicit) if !explicit.is_empty() => {
                explicit.iter().cloned().collect::<HashSet<_>>()
            }
            _ => self.base_resources(caller, realm, &application).await?,
        };

        debug!(
            application = app_name,
            realm,
            patterns = resources.len(),
            "resolved resource scope"
        );

        let mut scope = ResourceScope::new();
        if !resources.is_empty() {
            scope.insert(app_name.to_string(), resources);
        }
        Ok(scope)
    }

    /// union the base patterns of every resource type bound to the
    /// application.
    ///
    /// fails on the first resource type the catalog does not know; a
    /// partial union never escapes.
    async fn base_resources(
        &self,
        caller: &SubjectReference,
        realm: &str,
        application: &Application,
    ) -> Result<HashSet<String>> {
        let mut patterns = HashSet::new();
        for resource_type_id in &application.resource_type_ids {
            let resource_type = self
                .resource_types
                .resource_type(caller, realm, resource_type_id)
                .await?
                .ok_or_else(|| Error::UnknownResourceType {
                    resource_type: resource_type_id.clone(),
                    realm: realm.to_string(),
                })?;
            patterns.extend(resource_type.patterns);
        }
        Ok(patterns)
    }
}
