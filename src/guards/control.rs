//! Permission-aware action controls (buttons, menu actions)

use super::render::ConditionalRenderGuard;
use crate::auth::rbac::{PermissionSet, PermissionType};

/// An action gated on a feature permission.
///
/// Without permission the control is either left out entirely
/// (`hide_if_no_permission`) or shown disabled with an inert click.
#[derive(Debug, Clone)]
pub struct PermissionAwareControl<A> {
    label: String,
    feature_id: Option<String>,
    permission: PermissionType,
    hide_if_no_permission: bool,
    action: A,
}

impl<A> PermissionAwareControl<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            feature_id: None,
            permission: PermissionType::Read,
            hide_if_no_permission: false,
            action,
        }
    }

    pub fn feature(mut self, feature_id: impl Into<String>) -> Self {
        self.feature_id = Some(feature_id.into());
        self
    }

    pub fn permission(mut self, permission: PermissionType) -> Self {
        self.permission = permission;
        self
    }

    pub fn hide_if_no_permission(mut self, hide: bool) -> Self {
        self.hide_if_no_permission = hide;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn guard(&self) -> ConditionalRenderGuard {
        ConditionalRenderGuard::new(self.feature_id.as_deref()).permission(self.permission)
    }

    /// `None` when the control is hidden
    pub fn render(&self, permission_set: Option<&PermissionSet>) -> Option<RenderedControl<'_, A>> {
        if self.guard().allows(permission_set) {
            return Some(RenderedControl {
                label: &self.label,
                action: Some(&self.action),
            });
        }

        if self.hide_if_no_permission {
            None
        } else {
            Some(RenderedControl {
                label: &self.label,
                action: None,
            })
        }
    }
}

/// A control as it appears in the output
#[derive(Debug)]
pub struct RenderedControl<'a, A> {
    label: &'a str,
    action: Option<&'a A>,
}

impl<A> RenderedControl<'_, A> {
    pub fn label(&self) -> &str {
        self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.action.is_none()
    }
}

impl<A: Fn()> RenderedControl<'_, A> {
    /// Run the action; a disabled control does nothing
    pub fn click(&self) {
        if let Some(action) = self.action {
            action();
        }
    }
}
