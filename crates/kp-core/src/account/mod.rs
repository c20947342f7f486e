//! Sign-in / registration form model
//!
//! There is no account backend. Submitting a valid form only yields the
//! role to sign in with.

use crate::session::Role;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Demo credentials shown under the form, as (label, email, password)
pub const DEMO_CREDENTIALS: [(&str, &str, &str); 2] = [
    ("User Demo", "user@demo.com", "demo123"),
    ("Institution Demo", "admin@uni.edu", "admin123"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub mode: AuthMode,
    pub role: Role,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub institution_name: String,
    pub show_password: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::SignIn,
            role: Role::User,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            institution_name: String::new(),
            show_password: false,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the registration-only institution name field is shown
    pub fn needs_institution_name(&self) -> bool {
        self.mode == AuthMode::Register && self.role == Role::Institution
    }

    pub fn needs_confirmation(&self) -> bool {
        self.mode == AuthMode::Register
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Fill the form with the demo account for `role`
    pub fn fill_demo(&mut self, role: Role) {
        let (_, email, password) = match role {
            Role::User => DEMO_CREDENTIALS[0],
            Role::Institution => DEMO_CREDENTIALS[1],
        };
        self.mode = AuthMode::SignIn;
        self.role = role;
        self.email = email.to_string();
        self.password = password.to_string();
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::Form("email address is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(CoreError::Form(format!("'{}' is not an email address", self.email.trim())));
        }
        if self.password.is_empty() {
            return Err(CoreError::Form("password is required".to_string()));
        }
        if self.needs_confirmation() && self.confirm_password != self.password {
            return Err(CoreError::Form("passwords do not match".to_string()));
        }
        if self.needs_institution_name() && self.institution_name.trim().is_empty() {
            return Err(CoreError::Form("institution name is required".to_string()));
        }
        Ok(())
    }

    /// Validate and hand back the role to sign in with
    pub fn submit(&self) -> CoreResult<Role> {
        self.validate()?;
        debug!(mode = ?self.mode, role = %self.role, "login form accepted");
        Ok(self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_returns_selected_role() {
        let mut form = LoginForm::new();
        form.fill_demo(Role::Institution);
        assert_eq!(form.submit().unwrap(), Role::Institution);
    }

    #[test]
    fn test_required_fields() {
        let form = LoginForm::new();
        assert!(matches!(form.submit(), Err(CoreError::Form(_))));

        let form = LoginForm {
            email: "user@demo.com".to_string(),
            ..LoginForm::new()
        };
        assert!(form.submit().is_err());

        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "x".to_string(),
            ..LoginForm::new()
        };
        assert!(form.submit().is_err());
    }

    #[test]
    fn test_email_needs_at_sign() {
        let form = LoginForm {
            email: " registrar ".to_string(),
            password: "secret".to_string(),
            ..LoginForm::new()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Form error: 'registrar' is not an email address");
    }

    #[test]
    fn test_register_requires_matching_confirmation() {
        let mut form = LoginForm::new();
        form.fill_demo(Role::User);
        form.toggle_mode();
        assert!(form.needs_confirmation());
        assert!(!form.needs_institution_name());

        form.confirm_password = "other".to_string();
        assert!(form.submit().is_err());

        form.confirm_password = form.password.clone();
        assert_eq!(form.submit().unwrap(), Role::User);
    }

    #[test]
    fn test_institution_registration_needs_name() {
        let mut form = LoginForm::new();
        form.fill_demo(Role::Institution);
        form.mode = AuthMode::Register;
        form.confirm_password = form.password.clone();
        assert!(form.needs_institution_name());
        assert!(form.submit().is_err());

        form.institution_name = "Rungta University".to_string();
        assert_eq!(form.submit().unwrap(), Role::Institution);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.title(), "Create Account");
        assert_eq!(AuthMode::SignIn.submit_label(), "Sign In");
    }
}
