//! Folder (mailbox location) model.

use serde::{Deserialize, Serialize};

use crate::Error;

/// A mailbox location an email can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Incoming mail.
    #[default]
    Inbox,
    /// Mail the user has sent.
    Sent,
    /// Unsent drafts.
    Drafts,
    /// Soft-deleted mail.
    Trash,
    /// Junk mail.
    Spam,
    /// Archived mail. Reachable by moving an email, but has no list view.
    Archive,
}

impl Folder {
    /// Folders that have a list view, in sidebar order.
    pub const VIEWS: [Self; 5] = [Self::Inbox, Self::Sent, Self::Drafts, Self::Trash, Self::Spam];

    /// Convert to the lowercase name used in configuration and URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Trash => "trash",
            Self::Spam => "spam",
            Self::Archive => "archive",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
            Self::Trash => "Trash",
            Self::Spam => "Spam",
            Self::Archive => "Archive",
        }
    }

    /// Message shown when the folder's list view has nothing in it.
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::Inbox => "Your inbox is empty",
            Self::Sent => "No sent emails",
            Self::Drafts => "No saved drafts",
            Self::Trash => "Trash is empty",
            Self::Spam => "No spam emails",
            Self::Archive => "No emails to display",
        }
    }

    /// Whether this folder has its own list view.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        !matches!(self, Self::Archive)
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Folder {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inbox" => Ok(Self::Inbox),
            "sent" => Ok(Self::Sent),
            "drafts" => Ok(Self::Drafts),
            "trash" => Ok(Self::Trash),
            "spam" => Ok(Self::Spam),
            "archive" => Ok(Self::Archive),
            _ => Err(Error::UnknownFolder(s.to_string())),
        }
    }
}
