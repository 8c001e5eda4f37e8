//! Feature/permission gate for view subtrees

use crate::auth::rbac::{PermissionSet, PermissionType, has_permission};

/// Renders its children only when the user holds `permission` on the feature.
///
/// Without a feature the guard is transparent: some views, such as the
/// dashboard landing page, are permission-agnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalRenderGuard {
    feature_id: Option<String>,
    permission: PermissionType,
}

impl ConditionalRenderGuard {
    pub fn new(feature_id: Option<impl Into<String>>) -> Self {
        Self {
            feature_id: feature_id.map(Into::into),
            permission: PermissionType::Read,
        }
    }

    /// Guard on `feature_id`
    pub fn for_feature(feature_id: impl Into<String>) -> Self {
        Self::new(Some(feature_id))
    }

    /// Guard that always renders
    pub fn open() -> Self {
        Self::default()
    }

    pub fn permission(mut self, permission: PermissionType) -> Self {
        self.permission = permission;
        self
    }

    pub fn feature_id(&self) -> Option<&str> {
        self.feature_id.as_deref()
    }

    pub fn allows(&self, permission_set: Option<&PermissionSet>) -> bool {
        match &self.feature_id {
            None => true,
            Some(feature_id) => has_permission(permission_set, feature_id, self.permission),
        }
    }

    /// Children when allowed, nothing otherwise
    pub fn render<T>(
        &self,
        permission_set: Option<&PermissionSet>,
        children: impl FnOnce() -> T,
    ) -> Option<T> {
        self.allows(permission_set).then(children)
    }

    /// Children when allowed, `fallback` otherwise
    pub fn render_or<T>(
        &self,
        permission_set: Option<&PermissionSet>,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.allows(permission_set) {
            children()
        } else {
            fallback()
        }
    }
}
