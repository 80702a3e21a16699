use serde::{Deserialize, Serialize};

/// Permissions that gate announcement actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    Create,
    Update,
    Delete,
}

impl Permission {
    pub fn id(&self) -> &'static str {
        match self {
            Permission::Create => "announcement.entity.create",
            Permission::Update => "announcement.entity.update",
            Permission::Delete => "announcement.entity.delete",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Permission::Create => "create",
            Permission::Update => "update",
            Permission::Delete => "delete",
        }
    }
}

/// Resolution state of a single permission lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionResult {
    pub loading: bool,
    pub allowed: bool,
}

impl PermissionResult {
    pub const LOADING: Self = Self {
        loading: true,
        allowed: false,
    };

    pub const fn resolved(allowed: bool) -> Self {
        Self {
            loading: false,
            allowed,
        }
    }

    /// True only once the lookup has finished with an allow decision.
    pub fn granted(&self) -> bool {
        !self.loading && self.allowed
    }
}

// ============================================================================
// Permission API Wire Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionAttributes {
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicPermission {
    #[serde(rename = "type")]
    pub permission_type: String,
    pub name: String,
    pub attributes: PermissionAttributes,
}

impl From<Permission> for BasicPermission {
    fn from(permission: Permission) -> Self {
        Self {
            permission_type: "basic".to_string(),
            name: permission.id().to_string(),
            attributes: PermissionAttributes {
                action: permission.action().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeQuery {
    pub id: String,
    pub permission: BasicPermission,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    pub items: Vec<AuthorizeQuery>,
}

impl AuthorizeRequest {
    pub fn single(permission: Permission) -> Self {
        Self {
            items: vec![AuthorizeQuery {
                id: permission.id().to_string(),
                permission: permission.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthorizeResult {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeDecision {
    pub id: String,
    pub result: AuthorizeResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    pub items: Vec<AuthorizeDecision>,
}

impl AuthorizeResponse {
    /// Whether the decision for `permission` is an allow. A missing
    /// decision counts as a deny.
    pub fn is_allowed(&self, permission: Permission) -> bool {
        self.items
            .iter()
            .any(|d| d.id == permission.id() && d.result == AuthorizeResult::Allow)
    }
}
