//! input resolution for delegated application privileges.
//!
//! this crate turns the raw inputs of a privilege operation - a
//! symbolic action token, human-entered subject names, an application
//! name with an optional explicit resource list - into the canonical
//! values a privilege object is built from. Scope maps combine with
//! union/subtract semantics across privilege updates.
//!
//! the identity directory and the application/resource-type catalogs
//! are injected through the traits in [`lookup`]; this crate performs
//! no authorization decisions and persists nothing.

#![warn(missing_docs)]

pub mod action;
pub mod algebra;
pub mod error;
pub mod lookup;
pub mod scope;
pub mod subject;

pub use action::{decode_action, encode_action};
pub use error::{Error, LookupError, Result};
pub use lookup::{ApplicationCatalog, IdentityDirectory, ResourceTypeCatalog};
pub use scope::ScopeResolver;
pub use subject::SubjectResolver;
