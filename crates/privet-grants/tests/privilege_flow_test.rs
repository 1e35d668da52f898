//! integration tests for the full privilege resolution flow
//!
//! models what a request handler does: decode the action token, resolve
//! subjects and resource scope, build a privilege, then update it with
//! merge/remove semantics before handing it back to persistence.

use std::collections::{HashMap, HashSet};

use privet_grants::{
    algebra, decode_action, ApplicationCatalog, IdentityDirectory, LookupError,
    ResourceTypeCatalog, ScopeResolver, SubjectResolver,
};
use privet_types::{
    Application, ApplicationPrivilege, PermissionLevel, ResourceScope, ResourceType, SubjectKind,
    SubjectReference,
};

/// directory that derives canonical ids from the raw name, kind, and
/// realm, the way a real directory keeps them unique per realm.
struct Directory;

impl IdentityDirectory for Directory {
    async fn canonical_id(
        &self,
        kind: SubjectKind,
        realm: &str,
        name: &str,
    ) -> Result<String, LookupError> {
        Ok(format!(
            "id={},ou={},o={}",
            name,
            kind.token().to_lowercase(),
            realm
        ))
    }
}

/// one in-memory catalog backing both lookup traits.
struct Catalog {
    applications: HashMap<String, Application>,
    resource_types: HashMap<String, ResourceType>,
}

impl Catalog {
    fn seeded() -> Self {
        let applications = [
            Application::new("calendar", ["url-type"]),
            Application::new("mail", ["url-type", "imap-type"]),
        ]
        .into_iter()
        .map(|a| (a.name.clone(), a))
        .collect();

        let resource_types = [
            ResourceType::new("url-type", ["https://*.example.com/*"]),
            ResourceType::new("imap-type", ["imap://mail.example.com/*"]),
        ]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect();

        Self {
            applications,
            resource_types,
        }
    }
}

impl ApplicationCatalog for &Catalog {
    async fn application(
        &self,
        _caller: &SubjectReference,
        _realm: &str,
        name: &str,
    ) -> Result<Option<Application>, LookupError> {
        Ok(self.applications.get(name).cloned())
    }
}

impl ResourceTypeCatalog for &Catalog {
    async fn resource_type(
        &self,
        _caller: &SubjectReference,
        _realm: &str,
        id: &str,
    ) -> Result<Option<ResourceType>, LookupError> {
        Ok(self.resource_types.get(id).cloned())
    }
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_create_show_modify_flow() {
    let caller = SubjectReference::user("id=amadmin,ou=user,o=/");
    let catalog = Catalog::seeded();
    let subjects = SubjectResolver::new(Directory);
    let scopes = ScopeResolver::new(&catalog, &catalog);

    // create: resolve every input for a new privilege
    let level = decode_action("MODIFY").expect("MODIFY is a valid action token");
    let granted = subjects
        .resolve("user", "/", &strings(&["alice", "bob"]))
        .await
        .expect("subjects should resolve");
    let scope = scopes
        .resolve(&caller, "/", "calendar", None)
        .await
        .expect("default scope should resolve");

    let mut privilege =
        ApplicationPrivilege::new("delegate-calendar", level, granted, scope);

    // show: decompose back into displayable maps
    assert_eq!(privilege.action_token(), "MODIFY");
    let by_kind = privilege.subjects_by_kind();
    assert_eq!(
        by_kind[&SubjectKind::User].len(),
        2,
        "both users should appear under the User kind"
    );
    assert!(privilege
        .resource_names("calendar")
        .expect("calendar scope should exist")
        .contains("https://*.example.com/*"));

    // modify --add: widen the privilege to the mail application with an
    // explicit resource list and one more group
    let added_subjects = subjects
        .resolve("Group", "/", &strings(&["staff"]))
        .await
        .expect("group should resolve");
    let added_scope = scopes
        .resolve(
            &caller,
            "/",
            "mail",
            Some(&strings(&["imap://mail.example.com/inbox/*"])),
        )
        .await
        .expect("explicit scope should resolve");

    let mut widened: HashSet<SubjectReference> = privilege.subjects.clone();
    widened.extend(added_subjects);
    privilege.set_subjects(widened);

    let merged = algebra::merge(&privilege.resources_by_application(), &added_scope);
    privilege.set_resources(merged);

    assert_eq!(privilege.subjects.len(), 3);
    assert_eq!(privilege.resources.len(), 2);
    assert!(privilege
        .resource_names("mail")
        .expect("mail scope should exist")
        .contains("imap://mail.example.com/inbox/*"));

    // modify --remove: drop the mail scope again; the drained key must
    // vanish rather than linger with an empty set
    let narrowed = algebra::remove(&privilege.resources_by_application(), &added_scope);
    privilege.set_resources(narrowed);

    assert!(privilege.resource_names("mail").is_none());
    assert_eq!(
        privilege.application_names().collect::<Vec<_>>(),
        vec!["calendar"]
    );
}

#[tokio::test]
async fn test_widening_level_on_update() {
    let level = decode_action("READ").expect("READ is a valid action token");
    let mut privilege =
        ApplicationPrivilege::new("delegate-calendar", level, HashSet::new(), ResourceScope::new());

    let widened = decode_action("ALL").expect("ALL is a valid action token");
    assert!(widened > privilege.level, "ALL subsumes READ");
    privilege.set_level(widened);

    assert_eq!(privilege.action_token(), "ALL");
    assert_eq!(privilege.level, PermissionLevel::ReadModifyDelegate);
}
