//! Deployment configuration for the policy tables.
//!
//! Role strings in config are operator input, not session input: an unknown
//! role here is a hard [`AccessError::UnknownRole`] at build time so a bad
//! deployment fails at startup instead of silently denying in production.

use crate::features::FeatureGates;
use crate::navigation::{NavEntry, NavigationMap};
use crate::role::{AccessError, Role};
use crate::Policy;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One configured navigation link; `min_role` is a claim string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EntryConfig {
    pub label: String,
    pub link: String,
    pub min_role: String,
}

/// One configured navigation section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    pub entries: Vec<EntryConfig>,
}

/// Serialized form of the policy tables, loaded from YAML at startup.
/// [`PolicyConfig::default`] mirrors the built-in tables.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub features: BTreeMap<String, String>,
    pub navigation: Vec<SectionConfig>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let policy = Policy::default();
        Self {
            features: policy
                .gates()
                .iter()
                .map(|(key, role)| (key.to_string(), role.as_str().to_string()))
                .collect(),
            navigation: policy
                .navigation()
                .sections()
                .iter()
                .map(|section| SectionConfig {
                    name: section.name.clone(),
                    entries: section
                        .entries
                        .iter()
                        .map(|entry| EntryConfig {
                            label: entry.label.clone(),
                            link: entry.link.clone(),
                            min_role: entry.min_role.as_str().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl PolicyConfig {
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    /// Validate every role string and build the immutable [`Policy`].
    pub fn build(&self) -> Result<Policy, AccessError> {
        let mut gates = Vec::with_capacity(self.features.len());
        for (key, claim) in &self.features {
            gates.push((key.clone(), Role::from_claim(claim)?));
        }

        let mut sections = Vec::with_capacity(self.navigation.len());
        for section in &self.navigation {
            let mut entries = Vec::with_capacity(section.entries.len());
            for entry in &section.entries {
                entries.push(NavEntry::new(
                    entry.label.clone(),
                    entry.link.clone(),
                    Role::from_claim(&entry.min_role)?,
                ));
            }
            sections.push((section.name.clone(), entries));
        }

        Ok(Policy::new(
            FeatureGates::from_entries(gates),
            NavigationMap::from_sections(sections),
        ))
    }
}
