//! Login and signup form checks.
//!
//! There is no authentication backend; this module only validates what the
//! user typed and rates password strength for the signup form.

mod password;
mod validation;

pub use password::{MAX_SCORE, PasswordScorer, PasswordStrength, ZxcvbnScorer};
pub use validation::{FormError, FormResult, LoginForm, SignupForm, is_valid_email};
