//! Role hierarchy and access policy.
//!
//! The platform's user hierarchy is a fixed, totally ordered chain of nine
//! roles (OWNER down to USER). This crate answers every hierarchy question
//! the panels and API handlers ask: which roles an actor may view or manage,
//! whether a role may use a gated feature, and which navigation entries a
//! role's panel should render.
//!
//! All queries are pure functions over tables that are immutable after
//! startup. A [`Policy`] may be shared freely across request handlers; there
//! is no interior mutability anywhere in this crate.
//!
//! ## Unknown-role policy
//! Session claims arrive as strings and are parsed exactly once, at
//! [`Role::from_claim`]. The `*_for` convenience functions accept raw claims
//! and uniformly resolve unknown ones to "no access" (empty set / `false`)
//! with a warning, never a panic or an error on a request path. Deployment
//! configuration is the opposite: an unknown role string in a
//! [`PolicyConfig`] is a hard error at startup.

mod config;
mod features;
mod hierarchy;
mod navigation;
mod role;

pub use config::{EntryConfig, PolicyConfig, SectionConfig};
pub use features::FeatureGates;
pub use hierarchy::{
    accessible_roles, accessible_roles_for, can_access_role, can_access_role_for,
    hierarchy_index_for, STRICT_SUBORDINATE_ONLY,
};
pub use navigation::{NavEntry, NavSection, NavigationMap};
pub use role::{display_name_for, AccessError, Role};

use serde::Serialize;

/// Immutable policy aggregate: feature gates plus navigation tables.
///
/// Built once at process start (from [`PolicyConfig`] or [`Policy::default`])
/// and passed by reference into request handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Policy {
    gates: FeatureGates,
    navigation: NavigationMap,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            gates: FeatureGates::builtin(),
            navigation: NavigationMap::builtin(),
        }
    }
}

impl Policy {
    pub fn new(gates: FeatureGates, navigation: NavigationMap) -> Self {
        Self { gates, navigation }
    }

    pub fn gates(&self) -> &FeatureGates {
        &self.gates
    }

    pub fn navigation(&self) -> &NavigationMap {
        &self.navigation
    }

    /// Whether `role` may use the feature behind `key`.
    ///
    /// Unknown keys deny, never error.
    pub fn can_access_feature(&self, role: Role, key: &str) -> bool {
        self.gates.can_access(role, key)
    }

    /// Claim-string variant of [`Policy::can_access_feature`]; unknown
    /// claims deny.
    pub fn can_access_feature_for(&self, claim: &str, key: &str) -> bool {
        match Role::from_claim(claim) {
            Ok(role) => self.gates.can_access(role, key),
            Err(_) => {
                tracing::warn!(claim, "unknown role claim; denying feature access");
                false
            }
        }
    }

    /// Navigation sections visible to `role`, empty sections dropped.
    pub fn navigation_for(&self, role: Role) -> Vec<NavSection> {
        self.navigation.for_role(role)
    }
}
