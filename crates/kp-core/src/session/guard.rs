//! Page reachability rules

use super::{Page, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a page requires of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

impl Access {
    pub fn permits(&self, role: Option<Role>) -> bool {
        match self {
            Access::Public => true,
            Access::Authenticated => role.is_some(),
            Access::Role(required) => role == Some(*required),
        }
    }
}

/// Page → requirement table consulted by every navigation.
/// Pages without an entry are public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardTable {
    rules: HashMap<Page, Access>,
}

impl GuardTable {
    /// Every page public. Role-bearing views still fall back to Landing
    /// when no one is signed in.
    pub fn permissive() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn with_rule(mut self, page: Page, access: Access) -> Self {
        self.rules.insert(page, access);
        self
    }

    pub fn requirement(&self, page: Page) -> Access {
        self.rules.get(&page).copied().unwrap_or(Access::Public)
    }

    pub fn permits(&self, page: Page, role: Option<Role>) -> bool {
        self.requirement(page).permits(role)
    }

    /// Pages reachable with `role`, in navigation order
    pub fn reachable(&self, role: Option<Role>) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|page| self.permits(*page, role))
            .collect()
    }
}

impl Default for GuardTable {
    fn default() -> Self {
        Self::permissive()
            .with_rule(Page::Dashboard, Access::Authenticated)
            .with_rule(Page::Upload, Access::Authenticated)
            .with_rule(Page::Analytics, Access::Role(Role::Institution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requirements() {
        let table = GuardTable::default();
        assert_eq!(table.requirement(Page::Landing), Access::Public);
        assert_eq!(table.requirement(Page::Login), Access::Public);
        assert_eq!(table.requirement(Page::Dashboard), Access::Authenticated);
        assert_eq!(table.requirement(Page::Upload), Access::Authenticated);
        assert_eq!(
            table.requirement(Page::Analytics),
            Access::Role(Role::Institution)
        );
    }

    #[test]
    fn test_reachable_by_role() {
        let table = GuardTable::default();
        assert_eq!(table.reachable(None), vec![Page::Landing, Page::Login]);
        assert_eq!(
            table.reachable(Some(Role::User)),
            vec![Page::Landing, Page::Login, Page::Dashboard, Page::Upload]
        );
        assert_eq!(table.reachable(Some(Role::Institution)), Page::ALL.to_vec());
    }

    #[test]
    fn test_permissive_reaches_everything() {
        let table = GuardTable::permissive();
        assert_eq!(table.reachable(None), Page::ALL.to_vec());
    }
}
