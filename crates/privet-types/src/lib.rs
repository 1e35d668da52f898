//! core types for privet - a delegated application-privilege
//! administration core.
//!
//! this crate provides the fundamental data structures used throughout
//! privet:
//! - [`PermissionLevel`]: ordered breadth of a delegation
//! - [`SubjectReference`]: canonical user/group references
//! - [`Application`] / [`ResourceType`]: catalog descriptors
//! - [`ApplicationPrivilege`]: the privilege object itself

mod application;
mod permission;
mod privilege;
mod subject;
pub mod test_utils;

pub use application::{Application, ResourceType};
pub use permission::PermissionLevel;
pub use privilege::{ApplicationPrivilege, ResourceScope, SubjectScope};
pub use subject::{SubjectKind, SubjectReference};
