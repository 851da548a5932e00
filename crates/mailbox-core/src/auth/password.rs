//! Password strength scoring.

use zxcvbn::zxcvbn;

/// Highest score a password can get.
pub const MAX_SCORE: u8 = 4;

/// Strength rating for a password, on a 0 to 4 scale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    /// 0 (empty or trivially guessable) to 4 (strong).
    pub score: u8,
    /// A hint on how to improve the password, if there is one.
    pub feedback: Option<String>,
}

impl PasswordStrength {
    /// Short label for the score.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self.score {
            0 => "Too weak",
            1 => "Weak",
            2 => "Fair",
            3 => "Good",
            _ => "Strong",
        }
    }
}

/// Rates password strength.
///
/// The signup form only needs a score and a hint, so any estimator can sit
/// behind this trait. [`ZxcvbnScorer`] is the default.
pub trait PasswordScorer {
    /// Scores a password. An empty password scores 0 with no feedback.
    fn score(&self, password: &str) -> PasswordStrength;
}

/// Scorer backed by the `zxcvbn` estimator.
///
/// Feedback is the estimator's warning, or its first suggestion when there is
/// no warning.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnScorer {
    user_inputs: Vec<String>,
}

impl ZxcvbnScorer {
    /// Creates a scorer with no user-specific words.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            user_inputs: Vec::new(),
        }
    }

    /// Adds words the estimator should treat as easy to guess, such as the
    /// username or email typed into the same form.
    #[must_use]
    pub fn with_user_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_inputs.extend(
            inputs
                .into_iter()
                .map(Into::into)
                .filter(|input: &String| !input.is_empty()),
        );
        self
    }
}

impl PasswordScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> PasswordStrength {
        if password.is_empty() {
            return PasswordStrength::default();
        }

        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn(password, &inputs);

        let feedback = entropy.feedback().and_then(|feedback| {
            feedback
                .warning()
                .map(|warning| warning.to_string())
                .or_else(|| feedback.suggestions().first().map(ToString::to_string))
        });

        PasswordStrength {
            score: u8::from(entropy.score()).min(MAX_SCORE),
            feedback,
        }
    }
}
