//! The mailbox store.
//!
//! [`Mailbox`] is the interface views are handed; [`MemoryMailbox`] is the
//! in-memory implementation. All state changes go through the trait's
//! mutation methods. Mutations are synchronous and never fail: an id that
//! matches nothing leaves the store untouched.
//!
//! Filtering for list views happens on the consumer side with the helpers in
//! this module:
//!
//! ```ignore
//! use mailbox_core::store::{Mailbox, MemoryMailbox, SearchQuery, in_folder};
//!
//! let mailbox = MemoryMailbox::with_sample_data();
//! let inbox = in_folder(mailbox.emails(), mailbox.selected_folder());
//! let results = SearchQuery::new("roadmap").filter(inbox);
//! ```

mod memory;
mod query;

pub use memory::{DEFAULT_LABELS, MemoryMailbox};
pub use query::{SearchQuery, in_folder, starred, unread_count};

use crate::contacts::{Contact, ContactId, NewContact};
use crate::email::{Email, EmailId, Folder, NewEmail};

/// Single source of truth for the email collection and view selection.
pub trait Mailbox {
    /// All emails, newest additions first.
    fn emails(&self) -> &[Email];

    /// Looks up an email by id.
    fn email(&self, id: &EmailId) -> Option<&Email> {
        self.emails().iter().find(|email| &email.id == id)
    }

    /// The currently selected email, if it is still in the mailbox.
    fn selected_email(&self) -> Option<&Email>;

    /// The folder whose list view is showing.
    fn selected_folder(&self) -> Folder;

    /// Whether dark mode is on.
    fn is_dark_mode(&self) -> bool;

    /// The known label vocabulary.
    fn labels(&self) -> &[String];

    /// Address book entries, in insertion order.
    fn contacts(&self) -> &[Contact];

    /// Adds an email with a fresh id and the current time, ahead of all others.
    fn add_email(&mut self, draft: NewEmail) -> EmailId;

    /// Removes an email and clears the selected email.
    fn delete_email(&mut self, id: &EmailId);

    /// Marks an email as read.
    fn mark_as_read(&mut self, id: &EmailId);

    /// Marks an email as unread.
    fn mark_as_unread(&mut self, id: &EmailId);

    /// Flips the starred flag.
    fn toggle_starred(&mut self, id: &EmailId);

    /// Flips the important flag. An email never marked becomes important.
    fn toggle_important(&mut self, id: &EmailId);

    /// Moves an email to another folder.
    ///
    /// The selected email is always cleared, whichever email was moved.
    fn move_to_folder(&mut self, id: &EmailId, folder: Folder);

    /// Appends a label. Duplicates are kept.
    fn add_label(&mut self, id: &EmailId, label: &str);

    /// Removes every occurrence of a label.
    fn remove_label(&mut self, id: &EmailId, label: &str);

    /// Removes the label if the email has it, otherwise adds it.
    fn toggle_label(&mut self, id: &EmailId, label: &str) {
        let has_label = self.email(id).is_some_and(|email| email.has_label(label));
        if has_label {
            self.remove_label(id, label);
        } else {
            self.add_label(id, label);
        }
    }

    /// Adds a contact with a fresh id after all others.
    fn add_contact(&mut self, contact: NewContact) -> ContactId;

    /// Removes a contact.
    fn delete_contact(&mut self, id: &ContactId);

    /// Selects an email, or clears the selection with `None`.
    fn set_selected_email(&mut self, id: Option<EmailId>);

    /// Switches the list view to a folder and clears the selected email.
    fn set_selected_folder(&mut self, folder: Folder);

    /// Flips dark mode.
    fn toggle_dark_mode(&mut self);
}
