//! Page navigation and session state
//!
//! A [`Session`] owns the current [`Page`] and the signed-in [`Role`].
//! Views never touch either directly; they ask for named transitions and
//! render whatever [`Session::view`] resolves to.

pub mod guard;

pub use guard::{Access, GuardTable};

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// The category of a signed-in party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Institution,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Institution];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Institution => "institution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Institution => "Institution",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "institution" => Ok(Role::Institution),
            other => Err(CoreError::Parse(format!("unknown role '{}'", other))),
        }
    }
}

/// Top-level page identifier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Landing,
    Login,
    Dashboard,
    Upload,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Landing,
        Page::Login,
        Page::Dashboard,
        Page::Upload,
        Page::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::Upload => "upload",
            Page::Analytics => "analytics",
        }
    }

    /// Page that `back` leads to; `None` where there is nothing behind
    pub fn parent(&self) -> Option<Page> {
        match self {
            Page::Login => Some(Page::Landing),
            Page::Upload | Page::Analytics => Some(Page::Dashboard),
            Page::Landing | Page::Dashboard => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Parse(format!("unknown page '{}'", s)))
    }
}

/// The one view a session renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Login,
    Dashboard(Role),
    Upload(Role),
    Analytics,
}

impl View {
    pub fn page(&self) -> Page {
        match self {
            View::Landing => Page::Landing,
            View::Login => Page::Login,
            View::Dashboard(_) => Page::Dashboard,
            View::Upload(_) => Page::Upload,
            View::Analytics => Page::Analytics,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            View::Dashboard(role) | View::Upload(role) => Some(*role),
            _ => None,
        }
    }
}

/// Navigation/session controller
#[derive(Debug, Clone)]
pub struct Session {
    page: Page,
    role: Option<Role>,
    guards: GuardTable,
}

impl Session {
    /// Create a signed-out session on the landing page
    pub fn new() -> Self {
        Self::with_guards(GuardTable::default())
    }

    pub fn with_guards(guards: GuardTable) -> Self {
        Self {
            page: Page::Landing,
            role: None,
            guards,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn navigate_to_login(&mut self) {
        self.set_page(Page::Login);
    }

    pub fn login(&mut self, role: Role) {
        debug!(%role, "login");
        self.role = Some(role);
        self.set_page(Page::Dashboard);
    }

    pub fn logout(&mut self) {
        debug!(role = ?self.role, "logout");
        self.role = None;
        self.set_page(Page::Landing);
    }

    /// Move to `target` if the guard table allows it.
    ///
    /// A signed-out visitor who is refused is sent to the login page. A
    /// signed-in party who lacks the required role stays where they are.
    pub fn navigate(&mut self, target: Page) -> CoreResult<()> {
        if self.guards.permits(target, self.role) {
            self.set_page(target);
            return Ok(());
        }

        warn!(page = %target, role = ?self.role, "navigation refused");
        if self.role.is_none() {
            self.set_page(Page::Login);
        }
        Err(CoreError::AccessDenied {
            page: target,
            role: self.role,
        })
    }

    /// Return to the page that precedes the current one. No history is kept.
    pub fn back(&mut self) {
        if let Some(parent) = self.page.parent() {
            self.set_page(parent);
        }
    }

    /// Resolve the view for the current page and role. Total: anything the
    /// guard table refuses, or that lacks the role it needs, renders Landing.
    pub fn view(&self) -> View {
        if !self.guards.permits(self.page, self.role) {
            return View::Landing;
        }

        match (self.page, self.role) {
            (Page::Login, _) => View::Login,
            (Page::Dashboard, Some(role)) => View::Dashboard(role),
            (Page::Upload, Some(role)) => View::Upload(role),
            (Page::Analytics, _) => View::Analytics,
            _ => View::Landing,
        }
    }

    fn set_page(&mut self, page: Page) {
        if self.page != page {
            debug!(from = %self.page, to = %page, "page transition");
        }
        self.page = page;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_session_renders_landing() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Landing);
        assert_eq!(session.role(), None);
        assert_eq!(session.view(), View::Landing);
    }

    #[test]
    fn test_login_renders_dashboard_with_role() {
        for role in Role::ALL {
            let mut session = Session::new();
            session.navigate_to_login();
            assert_eq!(session.view(), View::Login);

            session.login(role);
            assert_eq!(session.view(), View::Dashboard(role));
            assert_eq!(session.view().role(), Some(role));
        }
    }

    #[test]
    fn test_logout_clears_role() {
        let mut session = Session::new();
        session.login(Role::Institution);
        session.navigate(Page::Analytics).unwrap();

        session.logout();
        assert_eq!(session.page(), Page::Landing);
        assert_eq!(session.role(), None);
        assert_eq!(session.view(), View::Landing);
    }

    #[test]
    fn test_back_targets() {
        let mut session = Session::new();
        session.navigate_to_login();
        session.back();
        assert_eq!(session.page(), Page::Landing);

        session.login(Role::Institution);
        session.navigate(Page::Upload).unwrap();
        session.back();
        assert_eq!(session.page(), Page::Dashboard);

        session.navigate(Page::Analytics).unwrap();
        session.back();
        assert_eq!(session.page(), Page::Dashboard);

        // Nothing sits behind the dashboard
        session.back();
        assert_eq!(session.page(), Page::Dashboard);
    }

    #[test]
    fn test_back_ignores_history() {
        let mut session = Session::new();
        session.login(Role::Institution);
        session.navigate(Page::Analytics).unwrap();
        session.navigate(Page::Upload).unwrap();
        session.back();
        assert_eq!(session.page(), Page::Dashboard);
    }

    #[test]
    fn test_anonymous_navigation_redirects_to_login() {
        let mut session = Session::new();
        let err = session.navigate(Page::Dashboard).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AccessDenied { page: Page::Dashboard, role: None }
        ));
        assert_eq!(session.page(), Page::Login);
        assert_eq!(session.view(), View::Login);
    }

    #[test]
    fn test_user_cannot_open_analytics() {
        let mut session = Session::new();
        session.login(Role::User);
        session.navigate(Page::Upload).unwrap();

        assert!(session.navigate(Page::Analytics).is_err());
        assert_eq!(session.page(), Page::Upload);
        assert_eq!(session.view(), View::Upload(Role::User));
    }

    #[test]
    fn test_permissive_table_still_needs_role_for_dashboard() {
        let mut session = Session::with_guards(GuardTable::permissive());
        session.navigate(Page::Dashboard).unwrap();
        assert_eq!(session.page(), Page::Dashboard);
        assert_eq!(session.view(), View::Landing);

        session.navigate(Page::Analytics).unwrap();
        assert_eq!(session.view(), View::Analytics);
    }

    #[test]
    fn test_page_parse() {
        assert_eq!("upload".parse::<Page>().unwrap(), Page::Upload);
        assert_eq!(" Analytics ".parse::<Page>().unwrap(), Page::Analytics);
        assert!("settings".parse::<Page>().is_err());
        assert_eq!("Institution".parse::<Role>().unwrap(), Role::Institution);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_page_serde_identifiers() {
        let json = serde_json::to_string(&Page::Dashboard).unwrap();
        assert_eq!(json, "\"dashboard\"");
        let role: Role = serde_json::from_str("\"institution\"").unwrap();
        assert_eq!(role, Role::Institution);
    }

    #[derive(Debug, Clone)]
    enum Action {
        ToLogin,
        Login(Role),
        Logout,
        Navigate(Page),
        Back,
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        let page = prop::sample::select(Page::ALL.to_vec());
        let role = prop::sample::select(Role::ALL.to_vec());
        prop_oneof![
            Just(Action::ToLogin),
            role.prop_map(Action::Login),
            Just(Action::Logout),
            page.prop_map(Action::Navigate),
            Just(Action::Back),
        ]
    }

    fn apply(session: &mut Session, action: &Action) {
        match action {
            Action::ToLogin => session.navigate_to_login(),
            Action::Login(role) => session.login(*role),
            Action::Logout => session.logout(),
            Action::Navigate(page) => {
                let _ = session.navigate(*page);
            }
            Action::Back => session.back(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_view_is_total_and_guarded(actions in prop::collection::vec(arb_action(), 0..40)) {
            let mut session = Session::new();
            for action in &actions {
                apply(&mut session, action);
                let view = session.view();

                // Exactly one view, and it matches the page unless the fallback kicked in
                prop_assert!(view.page() == session.page() || view == View::Landing);
                if session.role().is_none() {
                    prop_assert!(!matches!(view, View::Dashboard(_) | View::Upload(_)));
                }
                if let Some(role) = view.role() {
                    prop_assert_eq!(Some(role), session.role());
                }
            }
        }

        #[test]
        fn prop_logout_always_lands(actions in prop::collection::vec(arb_action(), 0..20)) {
            let mut session = Session::new();
            for action in &actions {
                apply(&mut session, action);
            }
            session.logout();
            prop_assert_eq!(session.view(), View::Landing);
            prop_assert_eq!(session.role(), None);
        }
    }
}
