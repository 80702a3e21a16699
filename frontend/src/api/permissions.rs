//! Client side of the permission oracle.
//!
//! Each [`Permission`] is looked up at most once per application and the
//! result is shared by every call site through a reactive signal.

use std::collections::HashMap;
use std::future::Future;

use leptos::logging::warn;
use leptos::*;
use shared::{AuthorizeRequest, AuthorizeResponse, Permission, PermissionResult};

use super::{use_api_client, ApiClient, RequestError};

pub trait PermissionApi {
    fn authorize(&self, permission: Permission) -> impl Future<Output = Result<bool, RequestError>>;
}

impl PermissionApi for ApiClient {
    async fn authorize(&self, permission: Permission) -> Result<bool, RequestError> {
        let response = self
            .send(
                "POST",
                "/permission/authorize",
                Some(AuthorizeRequest::single(permission)),
            )
            .await?;
        let decision: AuthorizeResponse = response.json().await?;
        Ok(decision.is_allowed(permission))
    }
}

/// App-wide cache of permission lookups.
#[derive(Clone, Copy)]
pub struct PermissionCache {
    owner: Option<Owner>,
    entries: StoredValue<HashMap<Permission, RwSignal<PermissionResult>>>,
}

impl PermissionCache {
    pub fn new() -> Self {
        Self {
            owner: Owner::current(),
            entries: store_value(HashMap::new()),
        }
    }

    /// Returns the signal for `permission` and whether it was just created,
    /// in which case the caller must start the lookup.
    fn entry(&self, permission: Permission) -> (RwSignal<PermissionResult>, bool) {
        if let Some(signal) = self
            .entries
            .with_value(|entries| entries.get(&permission).copied())
        {
            return (signal, false);
        }

        let create = || create_rw_signal(PermissionResult::LOADING);
        let signal = match self.owner {
            Some(owner) => with_owner(owner, create),
            None => create(),
        };
        self.entries.update_value(|entries| {
            entries.insert(permission, signal);
        });
        (signal, true)
    }

    /// Seed the result for `permission`. No lookup is started for a seeded
    /// permission.
    pub fn preset(&self, permission: Permission, result: PermissionResult) {
        let (signal, _) = self.entry(permission);
        signal.set(result);
    }
}

impl Default for PermissionCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_permissions() {
    provide_context(PermissionCache::new());
}

/// Resolve whether the current user holds `permission`.
///
/// The result stays `loading` if the lookup fails, which keeps gated
/// controls hidden or disabled.
pub fn use_permission(permission: Permission) -> Signal<PermissionResult> {
    let cache = use_context::<PermissionCache>().unwrap_or_default();
    let (signal, needs_lookup) = cache.entry(permission);

    if needs_lookup {
        let client = use_api_client();
        wasm_bindgen_futures::spawn_local(async move {
            match client.authorize(permission).await {
                Ok(allowed) => {
                    signal.try_set(PermissionResult::resolved(allowed));
                }
                Err(e) => {
                    warn!("Permission check for {} failed: {}", permission.id(), e);
                }
            }
        });
    }

    signal.into()
}
