//! Email data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Folder;
use crate::format;

/// Unique identifier for an email within a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub String);

impl EmailId {
    /// Create an email ID from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Borrow the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmailId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A file attached to an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type.
    pub mime_type: String,
    /// Download URL. Attachments added in the composer have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attachment {
    /// Creates an attachment without a download URL.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            url: None,
        }
    }

    /// Sets the download URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Human-readable size, e.g. "2.4 MB".
    #[must_use]
    pub fn display_size(&self) -> String {
        format::format_file_size(self.size)
    }

    /// Icon for the file type, chosen by extension.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        format::file_icon(&self.name)
    }

    /// Whether this attachment is an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.to_ascii_lowercase().starts_with("image/")
    }
}

/// An email record held by the mailbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Sender address.
    pub from: String,
    /// Recipient address. Empty for drafts without a recipient.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body as produced by the editor.
    pub body: String,
    /// Whether the email has been read.
    pub read: bool,
    /// Whether the email is starred.
    pub starred: bool,
    /// Importance marker. `None` until first toggled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    /// When the email was created.
    pub date: DateTime<Utc>,
    /// Folder containing this email.
    pub folder: Folder,
    /// Labels, in the order they were added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl Email {
    /// Builds a record from a draft with the given id and timestamp.
    #[must_use]
    pub fn from_new(id: EmailId, date: DateTime<Utc>, draft: NewEmail) -> Self {
        Self {
            id,
            from: draft.from,
            to: draft.to,
            subject: draft.subject,
            body: draft.body,
            read: draft.read,
            starred: draft.starred,
            important: draft.important,
            date,
            folder: draft.folder,
            labels: draft.labels,
            attachments: draft.attachments,
        }
    }

    /// Whether the email is marked important.
    #[must_use]
    pub fn is_important(&self) -> bool {
        self.important.unwrap_or(false)
    }

    /// Whether the email carries the given label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels
            .as_ref()
            .is_some_and(|labels| labels.iter().any(|l| l == label))
    }

    /// Labels as a slice, empty when absent.
    #[must_use]
    pub fn label_list(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }

    /// Attachments as a slice, empty when absent.
    #[must_use]
    pub fn attachment_list(&self) -> &[Attachment] {
        self.attachments.as_deref().unwrap_or_default()
    }

    /// Whether the email has at least one attachment.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachment_list().is_empty()
    }
}

/// The fields supplied when adding an email; id and date are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEmail {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body: String,
    /// Whether the email starts out read.
    pub read: bool,
    /// Whether the email starts out starred.
    pub starred: bool,
    /// Importance marker.
    #[serde(default)]
    pub important: Option<bool>,
    /// Destination folder.
    pub folder: Folder,
    /// Initial labels.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Attachments.
    #[serde(default)]
    pub attachments: Option<Vec<Attachment>>,
}

impl NewEmail {
    /// Creates a draft with the core fields; flags default to unread and unstarred.
    #[must_use]
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        folder: Folder,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            folder,
            ..Default::default()
        }
    }
}
