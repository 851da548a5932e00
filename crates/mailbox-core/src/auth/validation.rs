//! Form validation for login and signup.

/// Validation error for an authentication form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Username is empty.
    EmptyUsername,
    /// Email address is empty.
    EmptyEmail,
    /// Email address format is invalid.
    InvalidEmail,
    /// Password is empty.
    EmptyPassword,
    /// Password confirmation does not match.
    PasswordMismatch,
    /// Terms and conditions were not accepted.
    TermsNotAccepted,
}

impl FormError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "Username is required",
            Self::EmptyEmail => "Email is required",
            Self::InvalidEmail => "Invalid email address",
            Self::EmptyPassword => "Password is required",
            Self::PasswordMismatch => "Passwords do not match",
            Self::TermsNotAccepted => "You must accept the terms and conditions",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername => "username",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyPassword => "password",
            Self::PasswordMismatch => "confirm_password",
            Self::TermsNotAccepted => "terms",
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FormError {}

/// Result of validating a form: every problem found, not just the first.
pub type FormResult = Result<(), Vec<FormError>>;

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Whether to stay signed in.
    pub remember_me: bool,
}

impl LoginForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every `FormError` found.
    pub fn validate(&self) -> FormResult {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.push(FormError::EmptyPassword);
        }
        into_result(errors)
    }
}

/// Signup form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Chosen username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password, typed again.
    pub confirm_password: String,
    /// Whether the terms and conditions were accepted.
    pub accept_terms: bool,
}

impl SignupForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every `FormError` found.
    pub fn validate(&self) -> FormResult {
        let mut errors = Vec::new();

        if self.username.trim().is_empty() {
            errors.push(FormError::EmptyUsername);
        }
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.push(FormError::EmptyPassword);
        }
        if self.password != self.confirm_password {
            errors.push(FormError::PasswordMismatch);
        }
        if !self.accept_terms {
            errors.push(FormError::TermsNotAccepted);
        }

        into_result(errors)
    }
}

fn check_email(email: &str, errors: &mut Vec<FormError>) {
    if email.trim().is_empty() {
        errors.push(FormError::EmptyEmail);
    } else if !is_valid_email(email) {
        errors.push(FormError::InvalidEmail);
    }
}

fn into_result(errors: Vec<FormError>) -> FormResult {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Basic email validation.
///
/// Requires exactly one `@`, a non-empty local part, and a domain with at
/// least one dot and no empty labels. Whitespace inside the address is
/// rejected.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain must contain at least one dot and no empty parts
    if !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "correct horse".into(),
            confirm_password: "correct horse".into(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
        assert!(is_valid_email("  user@example.com  "));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_login_valid() {
        let form = LoginForm {
            email: "me@example.com".into(),
            password: "secret".into(),
            remember_me: true,
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_login_empty() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors, [FormError::EmptyEmail, FormError::EmptyPassword]);
    }

    #[test]
    fn test_login_bad_email() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "secret".into(),
            remember_me: false,
        };
        assert_eq!(form.validate().unwrap_err(), [FormError::InvalidEmail]);
    }

    #[test]
    fn test_signup_valid() {
        assert!(signup().validate().is_ok());
    }

    #[test]
    fn test_signup_collects_all_errors() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert!(errors.contains(&FormError::EmptyUsername));
        assert!(errors.contains(&FormError::EmptyEmail));
        assert!(errors.contains(&FormError::EmptyPassword));
        assert!(errors.contains(&FormError::TermsNotAccepted));
        // Both passwords empty, so they match.
        assert!(!errors.contains(&FormError::PasswordMismatch));
    }

    #[test]
    fn test_signup_mismatch() {
        let form = SignupForm {
            confirm_password: "different".into(),
            ..signup()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, [FormError::PasswordMismatch]);
        assert_eq!(errors[0].field(), "confirm_password");
        assert_eq!(errors[0].to_string(), "Passwords do not match");
    }

    #[test]
    fn test_signup_terms() {
        let form = SignupForm {
            accept_terms: false,
            ..signup()
        };
        assert_eq!(form.validate().unwrap_err(), [FormError::TermsNotAccepted]);
    }
}
