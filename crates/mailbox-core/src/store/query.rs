//! Consumer-side filters over the email collection.

use crate::email::{Email, Folder};

/// Emails in a folder, in collection order.
#[must_use]
pub fn in_folder(emails: &[Email], folder: Folder) -> Vec<&Email> {
    emails.iter().filter(|email| email.folder == folder).collect()
}

/// Number of unread emails in a folder.
#[must_use]
pub fn unread_count(emails: &[Email], folder: Folder) -> usize {
    emails
        .iter()
        .filter(|email| email.folder == folder && !email.read)
        .count()
}

/// Starred emails across all folders, in collection order.
#[must_use]
pub fn starred(emails: &[Email]) -> Vec<&Email> {
    emails.iter().filter(|email| email.starred).collect()
}

/// Case-insensitive substring search over subject, sender, recipient and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Creates a query. The text is matched case-insensitively.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Whether the query is empty and therefore matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Checks a single email.
    #[must_use]
    pub fn matches(&self, email: &Email) -> bool {
        [&email.subject, &email.from, &email.to, &email.body]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Keeps the matching emails, in their original order.
    pub fn filter<'a, I>(&self, emails: I) -> Vec<&'a Email>
    where
        I: IntoIterator<Item = &'a Email>,
    {
        emails.into_iter().filter(|email| self.matches(email)).collect()
    }
}
