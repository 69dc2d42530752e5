use crate::role::Role;
use serde::Serialize;

/// One panel navigation link. `min_role` is the most junior role that sees
/// the entry; every role senior to it sees it too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub link: String,
    pub min_role: Role,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, link: impl Into<String>, min_role: Role) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            min_role,
        }
    }
}

/// Named group of navigation links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub name: String,
    pub entries: Vec<NavEntry>,
}

/// The full navigation table, filtered per request by role.
///
/// The serialized form of the filtered output is exactly the JSON shape the
/// panels render. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationMap {
    sections: Vec<NavSection>,
}

impl NavigationMap {
    /// The platform's built-in navigation table.
    pub fn builtin() -> Self {
        Self::from_sections([
            (
                "dashboard",
                vec![NavEntry::new("Dashboard", "/dashboard", Role::User)],
            ),
            (
                "markets",
                vec![
                    NavEntry::new("In-Play Markets", "/markets/in-play", Role::User),
                    NavEntry::new("Session Odds", "/markets/session", Role::SuperAgent),
                    NavEntry::new("Market Control", "/markets/control", Role::Admin),
                ],
            ),
            (
                "reports",
                vec![
                    NavEntry::new("Account Statement", "/reports/statement", Role::User),
                    NavEntry::new("Login Reports", "/reports/logins", Role::Agent),
                    NavEntry::new("Settlement Report", "/reports/settlement", Role::SuperAgent),
                    NavEntry::new("Platform P&L", "/reports/pnl", Role::SuperAdmin),
                ],
            ),
            (
                "management",
                vec![
                    NavEntry::new("Users", "/manage/users", Role::Agent),
                    NavEntry::new("Agents", "/manage/agents", Role::SuperAgent),
                    NavEntry::new("Master Agents", "/manage/masters", Role::SubAdmin),
                    NavEntry::new("Admins", "/manage/admins", Role::SuperAdmin),
                    NavEntry::new("Domains", "/manage/domains", Role::SubOwner),
                ],
            ),
            (
                "casino",
                vec![
                    NavEntry::new("Live Casino", "/casino/live", Role::User),
                    NavEntry::new("Casino Control", "/casino/control", Role::SubAdmin),
                ],
            ),
        ])
    }

    pub fn from_sections<N: Into<String>>(
        sections: impl IntoIterator<Item = (N, Vec<NavEntry>)>,
    ) -> Self {
        Self {
            sections: sections
                .into_iter()
                .map(|(name, entries)| NavSection {
                    name: name.into(),
                    entries,
                })
                .collect(),
        }
    }

    /// The complete, unfiltered table.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Sections visible to `role`: entries at the role's level or below,
    /// empty sections dropped. `SubOwner` is an explicit override and
    /// always receives the complete table.
    pub fn for_role(&self, role: Role) -> Vec<NavSection> {
        if role == Role::SubOwner {
            return self.sections.clone();
        }
        self.sections
            .iter()
            .filter_map(|section| {
                let entries: Vec<NavEntry> = section
                    .entries
                    .iter()
                    .filter(|entry| entry.min_role.index() >= role.index())
                    .cloned()
                    .collect();
                if entries.is_empty() {
                    tracing::debug!(section = %section.name, role = %role, "section filtered empty");
                    return None;
                }
                Some(NavSection {
                    name: section.name.clone(),
                    entries,
                })
            })
            .collect()
    }
}
