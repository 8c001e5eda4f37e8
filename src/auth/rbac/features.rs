//! Feature catalog
//!
//! Known feature identifiers shared with the view layer. The evaluator does
//! not consult this table: an id missing from it simply has no grants.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Department scope
// =============================================================================

pub const TENDER_MANAGEMENT: &str = "TENDER_MANAGEMENT";
pub const CLASH_MANAGEMENT: &str = "CLASH_MANAGEMENT";
pub const INVENTORY_MANAGEMENT: &str = "INVENTORY_MANAGEMENT";
pub const ROLE_MANAGEMENT: &str = "ROLE_MANAGEMENT";
pub const USER_MANAGEMENT: &str = "USER_MANAGEMENT";
pub const DEPARTMENT_MANAGEMENT: &str = "DEPARTMENT_MANAGEMENT";

// =============================================================================
// Developer scope
// =============================================================================

pub const DEV_TENDER_MANAGEMENT: &str = "DEV_TENDER_MANAGEMENT";
pub const DEV_CLASH_MANAGEMENT: &str = "DEV_CLASH_MANAGEMENT";
pub const DEV_INVENTORY_MANAGEMENT: &str = "DEV_INVENTORY_MANAGEMENT";
pub const DEV_ROLE_MANAGEMENT: &str = "DEV_ROLE_MANAGEMENT";
pub const DEV_USER_MANAGEMENT: &str = "DEV_USER_MANAGEMENT";
pub const DEV_DEPARTMENT_MANAGEMENT: &str = "DEV_DEPARTMENT_MANAGEMENT";
pub const DEV_FEATURE_MANAGEMENT: &str = "DEV_FEATURE_MANAGEMENT";

/// Which view tree a feature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureScope {
    Department,
    Developer,
}

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub scope: FeatureScope,
}

const fn entry(id: &'static str, label: &'static str, scope: FeatureScope) -> FeatureInfo {
    FeatureInfo { id, label, scope }
}

/// Every known feature, department scope first
pub static FEATURE_CATALOG: &[FeatureInfo] = &[
    entry(TENDER_MANAGEMENT, "Tender Management", FeatureScope::Department),
    entry(CLASH_MANAGEMENT, "Clash Management", FeatureScope::Department),
    entry(INVENTORY_MANAGEMENT, "Inventory", FeatureScope::Department),
    entry(ROLE_MANAGEMENT, "Role Management", FeatureScope::Department),
    entry(USER_MANAGEMENT, "User Management", FeatureScope::Department),
    entry(DEPARTMENT_MANAGEMENT, "Department Management", FeatureScope::Department),
    entry(DEV_TENDER_MANAGEMENT, "Tender Management", FeatureScope::Developer),
    entry(DEV_CLASH_MANAGEMENT, "Clash Management", FeatureScope::Developer),
    entry(DEV_INVENTORY_MANAGEMENT, "Inventory", FeatureScope::Developer),
    entry(DEV_ROLE_MANAGEMENT, "Role Management", FeatureScope::Developer),
    entry(DEV_USER_MANAGEMENT, "User Management", FeatureScope::Developer),
    entry(DEV_DEPARTMENT_MANAGEMENT, "Department Management", FeatureScope::Developer),
    entry(DEV_FEATURE_MANAGEMENT, "Feature Management", FeatureScope::Developer),
];

static CATALOG_INDEX: Lazy<HashMap<&'static str, &'static FeatureInfo>> =
    Lazy::new(|| FEATURE_CATALOG.iter().map(|f| (f.id, f)).collect());

/// Look up a feature by exact id
pub fn lookup(feature_id: &str) -> Option<&'static FeatureInfo> {
    CATALOG_INDEX.get(feature_id).copied()
}

pub fn is_known(feature_id: &str) -> bool {
    CATALOG_INDEX.contains_key(feature_id)
}

/// Catalog entries belonging to `scope`
pub fn in_scope(scope: FeatureScope) -> impl Iterator<Item = &'static FeatureInfo> {
    FEATURE_CATALOG.iter().filter(move |f| f.scope == scope)
}
