//! In-memory mailbox store.

use chrono::Utc;
use tracing::debug;

use super::Mailbox;
use crate::config::MailboxConfig;
use crate::contacts::{Contact, ContactId, NewContact};
use crate::email::{Email, EmailId, Folder, NewEmail};
use crate::sample;

/// Label vocabulary a fresh mailbox starts with.
pub const DEFAULT_LABELS: [&str; 11] = [
    "Project",
    "Important",
    "Personal",
    "Work",
    "Team Events",
    "Design",
    "Client",
    "Newsletter",
    "Tech",
    "Product",
    "Technical",
];

/// Mailbox held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryMailbox {
    emails: Vec<Email>,
    contacts: Vec<Contact>,
    selected_email: Option<EmailId>,
    selected_folder: Folder,
    dark_mode: bool,
    labels: Vec<String>,
}

impl Default for MemoryMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMailbox {
    /// Creates an empty mailbox with the default label vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_emails(Vec::new())
    }

    /// Creates a mailbox holding the given emails, in the given order.
    #[must_use]
    pub fn with_emails(emails: Vec<Email>) -> Self {
        Self {
            emails,
            contacts: Vec::new(),
            selected_email: None,
            selected_folder: Folder::Inbox,
            dark_mode: false,
            labels: DEFAULT_LABELS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Creates a mailbox seeded with the demonstration emails.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::with_emails(sample::sample_emails())
    }

    /// Creates a mailbox from configuration.
    #[must_use]
    pub fn from_config(config: &MailboxConfig) -> Self {
        let emails = if config.seed_sample_data {
            sample::sample_emails()
        } else {
            Vec::new()
        };
        let mut mailbox = Self::with_emails(emails);
        mailbox.labels.clone_from(&config.labels);
        mailbox.dark_mode = config.dark_mode;
        debug!(
            emails = mailbox.emails.len(),
            labels = mailbox.labels.len(),
            "Mailbox created from config"
        );
        mailbox
    }

    /// Applies `f` to the email with the given id, if any.
    fn update(&mut self, id: &EmailId, op: &'static str, f: impl FnOnce(&mut Email)) {
        if let Some(email) = self.emails.iter_mut().find(|email| &email.id == id) {
            f(email);
            debug!(%id, op, "Email updated");
        } else {
            debug!(%id, op, "No email with this id");
        }
    }

    fn fresh_email_id(&self) -> EmailId {
        loop {
            let id = EmailId::generate();
            if !self.emails.iter().any(|email| email.id == id) {
                return id;
            }
        }
    }
}

impl Mailbox for MemoryMailbox {
    fn emails(&self) -> &[Email] {
        &self.emails
    }

    fn selected_email(&self) -> Option<&Email> {
        self.selected_email.as_ref().and_then(|id| self.email(id))
    }

    fn selected_folder(&self) -> Folder {
        self.selected_folder
    }

    fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn add_email(&mut self, draft: NewEmail) -> EmailId {
        let id = self.fresh_email_id();
        let email = Email::from_new(id.clone(), Utc::now(), draft);
        debug!(%id, folder = %email.folder, "Email added");
        self.emails.insert(0, email);
        id
    }

    fn delete_email(&mut self, id: &EmailId) {
        let before = self.emails.len();
        self.emails.retain(|email| &email.id != id);
        self.selected_email = None;
        debug!(%id, removed = before - self.emails.len(), "Email deleted");
    }

    fn mark_as_read(&mut self, id: &EmailId) {
        self.update(id, "mark_as_read", |email| email.read = true);
    }

    fn mark_as_unread(&mut self, id: &EmailId) {
        self.update(id, "mark_as_unread", |email| email.read = false);
    }

    fn toggle_starred(&mut self, id: &EmailId) {
        self.update(id, "toggle_starred", |email| email.starred = !email.starred);
    }

    fn toggle_important(&mut self, id: &EmailId) {
        self.update(id, "toggle_important", |email| {
            email.important = Some(!email.is_important());
        });
    }

    fn move_to_folder(&mut self, id: &EmailId, folder: Folder) {
        self.update(id, "move_to_folder", |email| email.folder = folder);
        self.selected_email = None;
    }

    fn add_label(&mut self, id: &EmailId, label: &str) {
        self.update(id, "add_label", |email| {
            email
                .labels
                .get_or_insert_with(Vec::new)
                .push(label.to_string());
        });
    }

    fn remove_label(&mut self, id: &EmailId, label: &str) {
        self.update(id, "remove_label", |email| {
            if let Some(labels) = email.labels.as_mut() {
                labels.retain(|l| l != label);
            }
        });
    }

    fn add_contact(&mut self, contact: NewContact) -> ContactId {
        let id = ContactId::generate();
        debug!(%id, "Contact added");
        self.contacts.push(Contact::from_new(id.clone(), contact));
        id
    }

    fn delete_contact(&mut self, id: &ContactId) {
        self.contacts.retain(|contact| &contact.id != id);
        debug!(%id, "Contact deleted");
    }

    fn set_selected_email(&mut self, id: Option<EmailId>) {
        self.selected_email = id;
    }

    fn set_selected_folder(&mut self, folder: Folder) {
        self.selected_folder = folder;
        self.selected_email = None;
    }

    fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "Dark mode toggled");
    }
}
