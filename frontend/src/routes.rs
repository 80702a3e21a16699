use shared::EntityRef;

use crate::config::AnnouncementsConfig;
use crate::utils::url::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    View { id: String },
    Edit { id: String },
    Create,
    CatalogEntity(EntityRef),
}

/// Turns [`Route`]s into navigable paths relative to the configured mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResolver {
    mount_path: String,
    catalog_path: String,
}

impl RouteResolver {
    pub fn new(mount_path: &str, catalog_path: &str) -> Self {
        Self {
            mount_path: mount_path.trim_end_matches('/').to_string(),
            catalog_path: catalog_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AnnouncementsConfig) -> Self {
        Self::new(&config.mount_path, &config.catalog_path)
    }

    pub fn path(&self, route: &Route) -> String {
        match route {
            Route::List if self.mount_path.is_empty() => "/".to_string(),
            Route::List => self.mount_path.clone(),
            Route::View { id } => format!("{}/view/{}", self.mount_path, encode_segment(id)),
            Route::Edit { id } => format!("{}/edit/{}", self.mount_path, encode_segment(id)),
            Route::Create => format!("{}/create", self.mount_path),
            Route::CatalogEntity(entity) => format!(
                "{}/{}/{}/{}",
                self.catalog_path,
                encode_segment(&entity.namespace.to_lowercase()),
                encode_segment(&entity.kind.to_lowercase()),
                encode_segment(&entity.name)
            ),
        }
    }

    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }
}

pub fn use_routes() -> RouteResolver {
    let config = crate::config::use_config();
    RouteResolver::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> RouteResolver {
        RouteResolver::new("/announcements/", "/catalog")
    }

    #[test]
    fn test_announcement_routes() {
        let routes = resolver();
        assert_eq!(routes.path(&Route::List), "/announcements");
        assert_eq!(routes.path(&Route::Create), "/announcements/create");
        assert_eq!(
            routes.path(&Route::View { id: "42".to_string() }),
            "/announcements/view/42"
        );
        assert_eq!(
            routes.path(&Route::Edit { id: "42".to_string() }),
            "/announcements/edit/42"
        );
    }

    #[test]
    fn test_ids_are_encoded() {
        assert_eq!(
            resolver().path(&Route::View { id: "a b/c".to_string() }),
            "/announcements/view/a%20b%2Fc"
        );
    }

    #[test]
    fn test_entity_route_lowercases_kind_and_namespace() {
        let entity = EntityRef::parse("Group:Platform/Team-A").unwrap();
        assert_eq!(
            resolver().path(&Route::CatalogEntity(entity)),
            "/catalog/platform/group/Team-A"
        );
    }

    #[test]
    fn test_root_mount() {
        let routes = RouteResolver::new("/", "/catalog");
        assert_eq!(routes.path(&Route::List), "/");
        assert_eq!(routes.path(&Route::Create), "/create");
    }
}
