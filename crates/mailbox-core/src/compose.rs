//! Compose, reply and forward.
//!
//! A [`ComposeDraft`] holds what the composer shows. Sending or saving turns
//! it into a [`NewEmail`] for [`Mailbox::add_email`](crate::Mailbox::add_email).

use thiserror::Error;

use crate::auth::is_valid_email;
use crate::email::{Attachment, Email, Folder, NewEmail};
use crate::format;

/// What an empty editor produces.
const EMPTY_EDITOR_HTML: &str = "<p><br></p>";

/// Reasons a draft cannot be sent or saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// Nothing has been written at all.
    #[error("Nothing to save")]
    Empty,
    /// No recipient given.
    #[error("Please enter at least one recipient")]
    MissingRecipient,
    /// A recipient is not a valid address.
    #[error("Invalid email address: {0}")]
    InvalidRecipient(String),
    /// No subject given.
    #[error("Please enter a subject")]
    MissingSubject,
    /// No body written.
    #[error("Please write a message")]
    MissingBody,
}

/// State of the compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    /// Recipients, comma separated.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body from the editor.
    pub body: String,
    /// Files attached so far.
    pub attachments: Vec<Attachment>,
}

impl ComposeDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft replying to `original`.
    ///
    /// The reply goes to the original sender and quotes the original body.
    #[must_use]
    pub fn reply(original: &Email) -> Self {
        let subject = format!(
            "Re: {}",
            original.subject.strip_prefix("Re: ").unwrap_or(&original.subject)
        );
        let body = format!(
            "<br/><br/>\
             <p>On {}, {} wrote:</p>\
             <blockquote style=\"border-left: 2px solid #e5e7eb; padding-left: 1rem; margin: 1rem 0; color: #6b7280;\">\
             {}\
             </blockquote>",
            format::format_email_date(&original.date),
            original.from,
            original.body,
        );

        Self {
            to: original.from.clone(),
            subject,
            body,
            attachments: Vec::new(),
        }
    }

    /// Creates a draft forwarding `original`, with no recipient yet.
    #[must_use]
    pub fn forward(original: &Email) -> Self {
        let subject = format!(
            "Fwd: {}",
            original.subject.strip_prefix("Fwd: ").unwrap_or(&original.subject)
        );
        let body = format!(
            "<br/><br/>\
             <p>---------- Forwarded message ----------</p>\
             <p>From: {}</p>\
             <p>Date: {}</p>\
             <p>Subject: {}</p>\
             <p>To: {}</p>\
             <br/>\
             {}",
            original.from,
            format::format_email_date(&original.date),
            original.subject,
            original.to,
            original.body,
        );

        Self {
            to: String::new(),
            subject,
            body,
            attachments: original.attachment_list().to_vec(),
        }
    }

    /// Adds an attachment.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Removes the attachment at `index`, if there is one.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    /// Recipient addresses, split on commas with blanks dropped.
    pub fn recipients(&self) -> impl Iterator<Item = &str> {
        self.to.split(',').map(str::trim).filter(|r| !r.is_empty())
    }

    fn has_body(&self) -> bool {
        let body = self.body.trim();
        !body.is_empty() && body != EMPTY_EDITOR_HTML
    }

    fn is_blank(&self) -> bool {
        self.to.trim().is_empty() && self.subject.trim().is_empty() && !self.has_body()
    }

    /// Checks the draft is ready to send.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in form order.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.recipients().next().is_none() {
            return Err(ComposeError::MissingRecipient);
        }
        if let Some(bad) = self.recipients().find(|r| !is_valid_email(r)) {
            return Err(ComposeError::InvalidRecipient(bad.to_string()));
        }
        if self.subject.trim().is_empty() {
            return Err(ComposeError::MissingSubject);
        }
        if !self.has_body() {
            return Err(ComposeError::MissingBody);
        }
        Ok(())
    }

    /// Turns the draft into a sent email from `from`.
    ///
    /// # Errors
    ///
    /// Returns a `ComposeError` if the draft is not complete.
    pub fn send(&self, from: &str) -> Result<NewEmail, ComposeError> {
        self.validate()?;
        Ok(self.to_new_email(from, Folder::Sent))
    }

    /// Turns the draft into a saved draft from `from`.
    ///
    /// Any one of recipient, subject or body is enough.
    ///
    /// # Errors
    ///
    /// Returns `ComposeError::Empty` if nothing has been written.
    pub fn save_draft(&self, from: &str) -> Result<NewEmail, ComposeError> {
        if self.is_blank() {
            return Err(ComposeError::Empty);
        }
        Ok(self.to_new_email(from, Folder::Drafts))
    }

    fn to_new_email(&self, from: &str, folder: Folder) -> NewEmail {
        NewEmail {
            read: true,
            starred: false,
            attachments: (!self.attachments.is_empty()).then(|| self.attachments.clone()),
            ..NewEmail::new(
                from,
                self.to.clone(),
                self.subject.clone(),
                self.body.clone(),
                folder,
            )
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::email::EmailId;

    fn original(subject: &str) -> Email {
        let mut email = Email::from_new(
            EmailId::new("1"),
            Utc::now(),
            NewEmail::new(
                "alice@example.com",
                "me@example.com",
                subject,
                "<p>Original body</p>",
                Folder::Inbox,
            ),
        );
        email.attachments = Some(vec![Attachment::new("a.pdf", 10, "application/pdf")]);
        email
    }

    fn complete() -> ComposeDraft {
        ComposeDraft {
            to: "bob@example.com".into(),
            subject: "Hello".into(),
            body: "<p>Hi Bob</p>".into(),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_reply_prefill() {
        let draft = ComposeDraft::reply(&original("Lunch"));
        assert_eq!(draft.to, "alice@example.com");
        assert_eq!(draft.subject, "Re: Lunch");
        assert!(draft.body.contains("alice@example.com wrote:"));
        assert!(draft.body.contains("<p>Original body</p>"));
        assert!(draft.attachments.is_empty());
    }

    #[test]
    fn test_reply_does_not_stack_prefix() {
        let draft = ComposeDraft::reply(&original("Re: Lunch"));
        assert_eq!(draft.subject, "Re: Lunch");
    }

    #[test]
    fn test_forward_prefill() {
        let draft = ComposeDraft::forward(&original("Fwd: Lunch"));
        assert_eq!(draft.to, "");
        assert_eq!(draft.subject, "Fwd: Lunch");
        assert!(draft.body.contains("Forwarded message"));
        assert!(draft.body.contains("<p>To: me@example.com</p>"));
        assert!(draft.body.ends_with("<p>Original body</p>"));
        assert_eq!(draft.attachments.len(), 1);
    }

    #[test]
    fn test_send() {
        let mut draft = complete();
        draft.add_attachment(Attachment::new("notes.txt", 42, "text/plain"));
        let email = draft.send("me@example.com").unwrap();
        assert_eq!(email.folder, Folder::Sent);
        assert_eq!(email.from, "me@example.com");
        assert_eq!(email.to, "bob@example.com");
        assert!(email.read);
        assert!(!email.starred);
        assert_eq!(email.attachments.unwrap().len(), 1);
    }

    #[test]
    fn test_send_keeps_fields_as_typed() {
        let draft = ComposeDraft {
            to: " bob@example.com ".into(),
            subject: "Hello  ".into(),
            ..complete()
        };
        let email = draft.send("me@example.com").unwrap();
        assert_eq!(email.to, " bob@example.com ");
        assert_eq!(email.subject, "Hello  ");

        let saved = draft.save_draft("me@example.com").unwrap();
        assert_eq!(saved.subject, "Hello  ");
    }

    #[test]
    fn test_send_requires_every_field() {
        let draft = ComposeDraft {
            to: String::new(),
            ..complete()
        };
        assert_eq!(draft.send("me@example.com"), Err(ComposeError::MissingRecipient));

        let draft = ComposeDraft {
            subject: "  ".into(),
            ..complete()
        };
        assert_eq!(draft.send("me@example.com"), Err(ComposeError::MissingSubject));

        let draft = ComposeDraft {
            body: "<p><br></p>".into(),
            ..complete()
        };
        assert_eq!(draft.send("me@example.com"), Err(ComposeError::MissingBody));
    }

    #[test]
    fn test_send_checks_each_recipient() {
        let draft = ComposeDraft {
            to: "bob@example.com, carol".into(),
            ..complete()
        };
        assert_eq!(
            draft.validate(),
            Err(ComposeError::InvalidRecipient("carol".into()))
        );
        assert_eq!(
            ComposeError::InvalidRecipient("carol".into()).to_string(),
            "Invalid email address: carol"
        );
    }

    #[test]
    fn test_save_draft_needs_something() {
        assert_eq!(ComposeDraft::new().save_draft("me@example.com"), Err(ComposeError::Empty));

        let draft = ComposeDraft {
            subject: "Ideas".into(),
            ..ComposeDraft::new()
        };
        let saved = draft.save_draft("me@example.com").unwrap();
        assert_eq!(saved.folder, Folder::Drafts);
        assert_eq!(saved.to, "");
        assert!(saved.attachments.is_none());
    }

    #[test]
    fn test_remove_attachment() {
        let mut draft = complete();
        draft.add_attachment(Attachment::new("a.txt", 1, "text/plain"));
        draft.add_attachment(Attachment::new("b.txt", 2, "text/plain"));
        assert_eq!(draft.remove_attachment(0).unwrap().name, "a.txt");
        assert!(draft.remove_attachment(5).is_none());
        assert_eq!(draft.attachments.len(), 1);
    }

    #[test]
    fn test_recipients() {
        let draft = ComposeDraft {
            to: " a@example.com ,, b@example.com ".into(),
            ..ComposeDraft::new()
        };
        assert_eq!(draft.recipients().collect::<Vec<_>>(), ["a@example.com", "b@example.com"]);
    }
}
