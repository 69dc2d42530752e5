use crate::role::{AccessError, Role};
use serde::Serialize;
use std::collections::BTreeMap;

/// Feature-gate table: feature key to gate role.
///
/// The gate names the tier a feature manages, and only strictly more senior
/// roles may use it: `admin_management` gated at `ADMIN` is usable by
/// `SUP_ADM` and above, not by `ADMIN` itself. Immutable after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureGates {
    gates: BTreeMap<String, Role>,
}

impl FeatureGates {
    /// The platform's built-in gate table.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("admin_management", Role::Admin),
            ("sub_admin_management", Role::SubAdmin),
            ("master_agent_management", Role::MasterAgent),
            ("super_agent_management", Role::SuperAgent),
            ("agent_management", Role::Agent),
            ("user_management", Role::User),
            ("login_reports", Role::Agent),
            ("bet_settlement", Role::SuperAgent),
            ("market_control", Role::Admin),
            ("casino_control", Role::SubAdmin),
        ])
    }

    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Role)>) -> Self {
        Self {
            gates: entries
                .into_iter()
                .map(|(key, role)| (key.into(), role))
                .collect(),
        }
    }

    /// Gate role for `key`, if the feature is known.
    pub fn gate(&self, key: &str) -> Option<Role> {
        self.gates.get(key).copied()
    }

    /// Gate role for `key`, or a hard [`AccessError::UnknownFeature`] for
    /// callers that must fail loudly on a bad key (diagnostics, startup
    /// checks). Request paths use [`FeatureGates::can_access`], which
    /// denies quietly.
    pub fn require(&self, key: &str) -> Result<Role, AccessError> {
        self.gate(key).ok_or_else(|| AccessError::UnknownFeature {
            key: key.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Role)> {
        self.gates.iter().map(|(key, role)| (key.as_str(), *role))
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Whether `role` may use the feature behind `key`. The gate must sit
    /// strictly below `role` in authority. Unknown keys deny, never error.
    pub fn can_access(&self, role: Role, key: &str) -> bool {
        match self.gates.get(key) {
            Some(gate) => gate.index() > role.index(),
            None => {
                tracing::warn!(key, "unknown feature key; denying access");
                false
            }
        }
    }
}
