//! RBAC type definitions

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Kind of access requested on a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionType {
    #[default]
    Read,
    Write,
    Update,
    Delete,
}

impl PermissionType {
    /// All recognized permission types
    pub const ALL: [PermissionType; 4] = [
        PermissionType::Read,
        PermissionType::Write,
        PermissionType::Update,
        PermissionType::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionType::Read => "read",
            PermissionType::Write => "write",
            PermissionType::Update => "update",
            PermissionType::Delete => "delete",
        }
    }
}

impl fmt::Display for PermissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionType {
    type Err = AccessError;

    /// Exact, case-sensitive match on the four flag names
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "read" => Ok(PermissionType::Read),
            "write" => Ok(PermissionType::Write),
            "update" => Ok(PermissionType::Update),
            "delete" => Ok(PermissionType::Delete),
            other => Err(AccessError::validation(format!(
                "Unknown permission type: {}",
                other
            ))),
        }
    }
}

/// The four independent CRUD flags of a feature grant.
///
/// No flag implies another: `write` does not grant `read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturePermissions {
    pub read: bool,
    pub write: bool,
    pub update: bool,
    pub delete: bool,
}

impl FeaturePermissions {
    /// Every flag set
    pub fn all() -> Self {
        Self {
            read: true,
            write: true,
            update: true,
            delete: true,
        }
    }

    /// Only `read` set
    pub fn read_only() -> Self {
        Self {
            read: true,
            ..Self::default()
        }
    }

    pub fn allows(&self, permission: PermissionType) -> bool {
        match permission {
            PermissionType::Read => self.read,
            PermissionType::Write => self.write,
            PermissionType::Update => self.update,
            PermissionType::Delete => self.delete,
        }
    }

    /// Flag-wise OR
    pub fn union(self, other: Self) -> Self {
        Self {
            read: self.read || other.read,
            write: self.write || other.write,
            update: self.update || other.update,
            delete: self.delete || other.delete,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.read || self.write || self.update || self.delete)
    }

    /// Granted permission types, in canonical order
    pub fn granted(&self) -> Vec<PermissionType> {
        PermissionType::ALL
            .into_iter()
            .filter(|p| self.allows(*p))
            .collect()
    }
}

/// Permissions a role holds on one feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGrant {
    /// Feature identifier, matched exactly against catalog ids
    pub feature_id: String,
    #[serde(default)]
    pub permissions: FeaturePermissions,
}

impl FeatureGrant {
    pub fn new(feature_id: impl Into<String>, permissions: FeaturePermissions) -> Self {
        Self {
            feature_id: feature_id.into(),
            permissions,
        }
    }
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Opaque role identifier
    pub role_id: String,
    /// Display label
    #[serde(default)]
    pub role_name: String,
    /// Feature grants, unique by feature id
    #[serde(default)]
    pub features: Vec<FeatureGrant>,
}

impl Role {
    pub fn new(role_id: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            role_name: role_name.into(),
            features: Vec::new(),
        }
    }

    /// Builder-style grant
    pub fn with_grant(mut self, feature_id: impl Into<String>, permissions: FeaturePermissions) -> Self {
        self.features.push(FeatureGrant::new(feature_id, permissions));
        self
    }

    /// Grant for `feature_id`, if this role has one
    pub fn grant_for(&self, feature_id: &str) -> Option<&FeatureGrant> {
        self.features.iter().find(|g| g.feature_id == feature_id)
    }
}

/// All roles held by one authenticated user.
///
/// Read-only for the lifetime of a session; changes arrive as a whole new set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl PermissionSet {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Parse and normalize a JSON payload from the auth collaborator
    pub fn from_json(raw: &str) -> Result<Self> {
        let set: PermissionSet = serde_json::from_str(raw)?;
        Ok(set.normalized())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Enforce the in-core invariants at the boundary.
    ///
    /// Grants with an empty feature id are dropped. Repeated grants for the
    /// same feature inside one role are folded into one by flag-wise OR,
    /// which is what the evaluator would have answered anyway.
    pub fn normalized(mut self) -> Self {
        for role in &mut self.roles {
            let mut merged: Vec<FeatureGrant> = Vec::with_capacity(role.features.len());
            let mut seen: HashSet<String> = HashSet::new();

            for grant in role.features.drain(..) {
                if grant.feature_id.is_empty() {
                    warn!(role = %role.role_id, "Dropping feature grant with empty feature id");
                    continue;
                }
                if seen.insert(grant.feature_id.clone()) {
                    merged.push(grant);
                } else if let Some(existing) =
                    merged.iter_mut().find(|g| g.feature_id == grant.feature_id)
                {
                    warn!(
                        role = %role.role_id,
                        feature = %grant.feature_id,
                        "Merging duplicate feature grant"
                    );
                    existing.permissions = existing.permissions.union(grant.permissions);
                }
            }

            role.features = merged;
        }
        self
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Roles that granted the permission
    pub granted_by_roles: Vec<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
