pub mod entity_ref;
pub mod permissions;
pub mod types;

pub use entity_ref::{EntityRef, EntityRefError, DEFAULT_NAMESPACE};
pub use permissions::{
    AuthorizeDecision, AuthorizeRequest, AuthorizeResponse, AuthorizeResult, Permission,
    PermissionResult,
};
pub use types::*;
