//! Keyboard shortcuts.
//!
//! Shortcuts that change mailbox state act on the selected email through
//! [`Shortcut::apply`]. The rest (compose, search focus, navigation) belong to
//! the view, which gets [`ShortcutOutcome::ViewAction`] back.

use crate::email::{Email, EmailId, Folder};
use crate::store::Mailbox;

/// A keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Open the composer.
    Compose,
    /// Reply to the selected email.
    Reply,
    /// Forward the selected email.
    Forward,
    /// Archive the selected email.
    Archive,
    /// Move the selected email to the trash.
    Delete,
    /// Mark the selected email unread.
    MarkUnread,
    /// Toggle the selected email's important flag.
    MarkImportant,
    /// Focus the search box.
    Search,
    /// Select the next email in the list.
    NextEmail,
    /// Select the previous email in the list.
    PreviousEmail,
    /// Send the open draft.
    SendEmail,
    /// Save the open draft.
    SaveDraft,
}

/// What happened when a shortcut was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// The mailbox was updated.
    Applied,
    /// The shortcut needs a selected email and there is none.
    NothingSelected,
    /// The shortcut is handled by the view, not the mailbox.
    ViewAction,
}

impl Shortcut {
    /// Every shortcut.
    pub const ALL: [Self; 12] = [
        Self::Compose,
        Self::Reply,
        Self::Forward,
        Self::Archive,
        Self::Delete,
        Self::MarkUnread,
        Self::MarkImportant,
        Self::Search,
        Self::NextEmail,
        Self::PreviousEmail,
        Self::SendEmail,
        Self::SaveDraft,
    ];

    /// Key binding. `mod` is Ctrl, or Cmd on macOS.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Compose => "c",
            Self::Reply => "r",
            Self::Forward => "f",
            Self::Archive => "e",
            Self::Delete => "backspace",
            Self::MarkUnread => "u",
            Self::MarkImportant => "i",
            Self::Search => "/",
            Self::NextEmail => "j",
            Self::PreviousEmail => "k",
            Self::SendEmail => "mod+enter",
            Self::SaveDraft => "mod+s",
        }
    }

    /// Finds the shortcut bound to a key, ignoring case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|shortcut| shortcut.key() == key)
    }

    /// Whether this shortcut acts on the selected email.
    #[must_use]
    pub const fn needs_selection(&self) -> bool {
        matches!(
            self,
            Self::Reply
                | Self::Forward
                | Self::Archive
                | Self::Delete
                | Self::MarkUnread
                | Self::MarkImportant
        )
    }

    /// Applies the shortcut's effect on the mailbox.
    pub fn apply<M: Mailbox + ?Sized>(self, mailbox: &mut M) -> ShortcutOutcome {
        let Some(id) = mailbox.selected_email().map(|email| email.id.clone()) else {
            return if self.needs_selection() {
                ShortcutOutcome::NothingSelected
            } else {
                ShortcutOutcome::ViewAction
            };
        };

        match self {
            Self::Archive => mailbox.move_to_folder(&id, Folder::Archive),
            Self::Delete => mailbox.move_to_folder(&id, Folder::Trash),
            Self::MarkUnread => mailbox.mark_as_unread(&id),
            Self::MarkImportant => mailbox.toggle_important(&id),
            _ => return ShortcutOutcome::ViewAction,
        }
        ShortcutOutcome::Applied
    }
}

/// The email after `current` in a listing, or the first one when nothing is
/// selected. Stays on the last email at the end.
#[must_use]
pub fn next_email(listing: &[&Email], current: Option<&EmailId>) -> Option<EmailId> {
    let index = match current.and_then(|id| position(listing, id)) {
        Some(i) => (i + 1).min(listing.len().saturating_sub(1)),
        None => 0,
    };
    listing.get(index).map(|email| email.id.clone())
}

/// The email before `current` in a listing, or the first one when nothing is
/// selected. Stays on the first email at the start.
#[must_use]
pub fn previous_email(listing: &[&Email], current: Option<&EmailId>) -> Option<EmailId> {
    let index = current
        .and_then(|id| position(listing, id))
        .map_or(0, |i| i.saturating_sub(1));
    listing.get(index).map(|email| email.id.clone())
}

fn position(listing: &[&Email], id: &EmailId) -> Option<usize> {
    listing.iter().position(|email| &email.id == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::{MemoryMailbox, in_folder};

    fn selected_mailbox() -> (MemoryMailbox, EmailId) {
        let mut mailbox = MemoryMailbox::with_sample_data();
        let id = EmailId::new("1");
        mailbox.set_selected_email(Some(id.clone()));
        (mailbox, id)
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Shortcut::from_key("e"), Some(Shortcut::Archive));
        assert_eq!(Shortcut::from_key("Backspace"), Some(Shortcut::Delete));
        assert_eq!(Shortcut::from_key("mod+s"), Some(Shortcut::SaveDraft));
        assert_eq!(Shortcut::from_key("x"), None);
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in Shortcut::ALL.iter().enumerate() {
            for b in &Shortcut::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_archive() {
        let (mut mailbox, id) = selected_mailbox();
        assert_eq!(Shortcut::Archive.apply(&mut mailbox), ShortcutOutcome::Applied);
        assert_eq!(mailbox.email(&id).unwrap().folder, Folder::Archive);
        assert!(mailbox.selected_email().is_none());
    }

    #[test]
    fn test_delete_moves_to_trash() {
        let (mut mailbox, id) = selected_mailbox();
        let total = mailbox.emails().len();
        Shortcut::Delete.apply(&mut mailbox);
        assert_eq!(mailbox.email(&id).unwrap().folder, Folder::Trash);
        assert_eq!(mailbox.emails().len(), total);
    }

    #[test]
    fn test_mark_unread_and_important() {
        let (mut mailbox, id) = selected_mailbox();
        mailbox.mark_as_read(&id);
        Shortcut::MarkUnread.apply(&mut mailbox);
        assert!(!mailbox.email(&id).unwrap().read);

        Shortcut::MarkImportant.apply(&mut mailbox);
        assert_eq!(mailbox.email(&id).unwrap().important, Some(false));
    }

    #[test]
    fn test_requires_selection() {
        let mut mailbox = MemoryMailbox::with_sample_data();
        assert_eq!(Shortcut::Delete.apply(&mut mailbox), ShortcutOutcome::NothingSelected);
        assert_eq!(Shortcut::Compose.apply(&mut mailbox), ShortcutOutcome::ViewAction);
    }

    #[test]
    fn test_view_actions_leave_mailbox_alone() {
        let (mut mailbox, _) = selected_mailbox();
        let before = mailbox.emails().to_vec();
        assert_eq!(Shortcut::Reply.apply(&mut mailbox), ShortcutOutcome::ViewAction);
        assert_eq!(Shortcut::Search.apply(&mut mailbox), ShortcutOutcome::ViewAction);
        assert_eq!(mailbox.emails(), before.as_slice());
        assert!(mailbox.selected_email().is_some());
    }

    #[test]
    fn test_navigation() {
        let mailbox = MemoryMailbox::with_sample_data();
        let inbox = in_folder(mailbox.emails(), Folder::Inbox);
        let first = inbox[0].id.clone();
        let second = inbox[1].id.clone();
        let last = inbox[inbox.len() - 1].id.clone();

        assert_eq!(next_email(&inbox, None), Some(first.clone()));
        assert_eq!(next_email(&inbox, Some(&first)), Some(second.clone()));
        assert_eq!(next_email(&inbox, Some(&last)), Some(last.clone()));
        assert_eq!(previous_email(&inbox, Some(&second)), Some(first.clone()));
        assert_eq!(previous_email(&inbox, Some(&first)), Some(first));
        assert_eq!(next_email(&[], None), None);
    }
}
